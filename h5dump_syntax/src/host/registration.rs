//! Mode registration metadata handed to host editors

use crate::config::constants::compile_time::folding::{CLOSE_DELIMITER, OPEN_DELIMITER};
use crate::config::constants::compile_time::host::{
    DISPLAY_NAME, FILE_EXTENSIONS, MIME_TYPE, MODE_NAME,
};
use crate::tokens::TokenClass;
use serde::Serialize;
use std::path::Path;

/// Everything a host needs to associate buffers with the h5dump mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeRegistration {
    pub name: &'static str,
    pub display_name: &'static str,
    pub extensions: &'static [&'static str],
    pub mime_type: &'static str,
    /// Class names the mode emits, in display-priority order
    pub token_classes: Vec<&'static str>,
    pub fold_open: char,
    pub fold_close: char,
}

impl ModeRegistration {
    pub fn h5dump() -> Self {
        Self {
            name: MODE_NAME,
            display_name: DISPLAY_NAME,
            extensions: FILE_EXTENSIONS,
            mime_type: MIME_TYPE,
            token_classes: TokenClass::ALL.iter().map(|c| c.as_str()).collect(),
            fold_open: OPEN_DELIMITER,
            fold_close: CLOSE_DELIMITER,
        }
    }

    /// Whether a file path carries one of the registered extensions
    pub fn matches_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.extensions
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }
}

impl Default for ModeRegistration {
    fn default() -> Self {
        Self::h5dump()
    }
}
