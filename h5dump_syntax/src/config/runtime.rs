// RUNTIME PREFERENCES (User Experience)

use super::constants::compile_time::lexical::{
    DEFAULT_LARGE_BUFFER_BYTES, MAX_LARGE_BUFFER_BYTES,
};
use crate::logging::{codes, Code, LogLevel};
use crate::{log_error, log_success};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read preferences file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid preferences TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn error_code(&self) -> Code {
        match self {
            ConfigError::Io { .. } => codes::config::FILE_READ_FAILED,
            ConfigError::Toml(_) => codes::config::INVALID_TOML,
            ConfigError::InvalidValue { .. } => codes::config::INVALID_VALUE,
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalPreferences {
    /// Whether to collect per-class match counts
    pub collect_metrics: bool,

    /// Buffers larger than this many bytes log a warning when classified
    pub large_buffer_threshold: usize,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            collect_metrics: env_parse(env_vars::LEXICAL_COLLECT_METRICS).unwrap_or(true),
            large_buffer_threshold: env_parse(env_vars::LEXICAL_LARGE_BUFFER_THRESHOLD)
                .unwrap_or(DEFAULT_LARGE_BUFFER_BYTES),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoldPreferences {
    /// Ignore braces that appear inside double-quoted strings
    pub skip_quoted_strings: bool,

    /// Whether to log a warning for each unbalanced closing brace
    pub log_unbalanced: bool,
}

impl Default for FoldPreferences {
    fn default() -> Self {
        Self {
            skip_quoted_strings: env_parse(env_vars::FOLDING_SKIP_QUOTED).unwrap_or(false),
            log_unbalanced: env_parse(env_vars::FOLDING_LOG_UNBALANCED).unwrap_or(true),
        }
    }
}

impl FoldPreferences {
    /// Every `{` and `}` counts, whatever the environment says about quotes
    pub fn plain_braces() -> Self {
        Self {
            skip_quoted_strings: false,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Minimum level forwarded to the logger
    pub min_level: LogLevel,

    /// Whether to emit JSON lines instead of plain text
    pub structured: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            min_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| LogLevel::parse(&v))
                .unwrap_or(LogLevel::Warning),
            structured: env_parse(env_vars::LOGGING_STRUCTURED).unwrap_or(false),
        }
    }
}

/// All runtime preferences, loadable from a TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimePreferences {
    pub lexical: LexicalPreferences,
    pub folding: FoldPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimePreferences {
    /// Parse preferences from TOML; missing sections fall back to defaults
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let preferences: Self = toml::from_str(source)?;
        preferences.validate()?;
        Ok(preferences)
    }

    /// Load preferences from a TOML file on disk
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match Self::from_toml_str(&source) {
            Ok(preferences) => {
                log_success!(
                    codes::success::PREFERENCES_LOADED,
                    "Preferences loaded",
                    "path" => path.display()
                );
                Ok(preferences)
            }
            Err(e) => {
                log_error!(e.error_code(), "Preferences rejected",
                    "path" => path.display(),
                    "error" => &e
                );
                Err(e)
            }
        }
    }

    /// Check values that deserialize fine but make no sense
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.lexical.large_buffer_threshold;
        if threshold == 0 || threshold > MAX_LARGE_BUFFER_BYTES {
            return Err(ConfigError::InvalidValue {
                field: "lexical.large_buffer_threshold",
                reason: format!(
                    "{} is outside 1..={}",
                    threshold, MAX_LARGE_BUFFER_BYTES
                ),
            });
        }
        Ok(())
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // Lexical
    pub const LEXICAL_COLLECT_METRICS: &str = "H5DUMP_LEXICAL_COLLECT_METRICS";
    pub const LEXICAL_LARGE_BUFFER_THRESHOLD: &str = "H5DUMP_LEXICAL_LARGE_BUFFER_THRESHOLD";

    // Folding
    pub const FOLDING_SKIP_QUOTED: &str = "H5DUMP_FOLDING_SKIP_QUOTED";
    pub const FOLDING_LOG_UNBALANCED: &str = "H5DUMP_FOLDING_LOG_UNBALANCED";

    // Logging
    pub const LOGGING_MIN_LEVEL: &str = "H5DUMP_LOGGING_MIN_LEVEL";
    pub const LOGGING_STRUCTURED: &str = "H5DUMP_LOGGING_STRUCTURED";
}
