//! Collapsible regions keyed on `{` / `}`
//!
//! h5dump output has no comment syntax, so folding is purely structural:
//! every brace pair is a region, nested to any depth.

pub mod region;
pub mod scanner;

pub use region::{FoldRegion, FoldScan, LineRange};
pub use scanner::FoldScanner;

/// Scan `text` with default preferences
pub fn scan_fold_regions(text: &str) -> FoldScan {
    FoldScanner::new().scan(text)
}
