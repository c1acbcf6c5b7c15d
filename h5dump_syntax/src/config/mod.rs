//! Configuration module
//!
//! `constants` holds fixed limits and mode identity; `runtime` holds user
//! preferences read from `H5DUMP_*` environment variables or a TOML file.

pub mod constants;
pub mod runtime;

pub use runtime::{
    ConfigError, FoldPreferences, LexicalPreferences, LoggingPreferences, RuntimePreferences,
};
