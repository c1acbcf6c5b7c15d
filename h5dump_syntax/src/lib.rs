//! Syntax support for h5dump text output
//!
//! Classifies the keywords, datatype names, constants and variables that
//! h5dump prints, and computes collapsible `{ ... }` regions. Both scans are
//! pure functions of the buffer text; [`host`] adapts them to an editor.

// Internal modules
pub mod config;
pub mod folding;
pub mod grammar;
pub mod host;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use config::{ConfigError, RuntimePreferences};
pub use folding::{FoldRegion, FoldScan, FoldScanner};
pub use host::{HostAdapter, HostError, ScanOutput, SyntaxHost};
pub use lexical::{Classifier, ClassifierError};
pub use tokens::{ClassificationTag, ClassifiedMatch, TokenClass, TypeGroup};
