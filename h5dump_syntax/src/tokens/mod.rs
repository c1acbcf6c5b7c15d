//! Token vocabulary types
//!
//! - **[`TokenClass`]** - semantic category used for styling
//! - **[`TypeGroup`]** - integer / float / bitfield / composite split of the type class
//! - **[`ClassifiedMatch`]** - one recognized word with its byte span
//! - **[`ClassificationTag`]** - the `(start, end, class_name)` form handed to hosts

pub mod token;

pub use token::{ClassificationTag, ClassifiedMatch, TokenClass, TypeGroup};
