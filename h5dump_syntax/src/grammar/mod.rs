//! Token vocabulary of the h5dump text format

pub mod keywords;

pub use keywords::{classify_word, literal_table, validate_tables, Keyword, LiteralEntry};
