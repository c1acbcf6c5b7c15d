//! Shared primitive types used by the classifier, the fold scanner and hosts.

pub mod span;

pub use span::{Position, SourceMap, Span};
