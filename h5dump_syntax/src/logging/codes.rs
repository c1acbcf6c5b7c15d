//! Consolidated log codes and classification
//!
//! Single source of truth for every code the crate emits together with its
//! behavioral metadata.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for error, warning and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// CLASSIFICATION TYPES
// ============================================================================

/// Severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct CodeMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
}

impl CodeMetadata {
    const fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        description: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            description,
        }
    }
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

/// Token classification codes
pub mod lexical {
    use super::Code;

    pub const MATCHER_BUILD_FAILED: Code = Code::new("E020");
    pub const OVERLAPPING_TOKEN_CLASSES: Code = Code::new("E021");
    pub const LARGE_BUFFER: Code = Code::new("W020");
}

/// Fold-region codes
pub mod folding {
    use super::Code;

    pub const UNBALANCED_CLOSE: Code = Code::new("W030");
    pub const UNTERMINATED_REGION: Code = Code::new("W031");
}

/// Configuration codes
pub mod config {
    use super::Code;

    pub const FILE_READ_FAILED: Code = Code::new("E040");
    pub const INVALID_TOML: Code = Code::new("E041");
    pub const INVALID_VALUE: Code = Code::new("E042");
}

/// Host adapter codes
pub mod host {
    use super::Code;

    pub const SERIALIZATION_FAILED: Code = Code::new("E050");
    pub const REGISTRATION_REJECTED: Code = Code::new("E051");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const CLASSIFIER_READY: Code = Code::new("I020");
    pub const CLASSIFICATION_COMPLETED: Code = Code::new("I021");
    pub const FOLD_SCAN_COMPLETED: Code = Code::new("I030");
    pub const PREFERENCES_LOADED: Code = Code::new("I040");
    pub const MODE_REGISTERED: Code = Code::new("I050");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

static CODE_REGISTRY: OnceLock<HashMap<&'static str, CodeMetadata>> = OnceLock::new();

const REGISTERED_CODES: &[CodeMetadata] = &[
    CodeMetadata::new(
        "E020",
        "Lexical",
        Severity::Critical,
        false,
        "Token matcher could not be built from the token tables",
    ),
    CodeMetadata::new(
        "E021",
        "Lexical",
        Severity::High,
        false,
        "A literal appears in more than one token class",
    ),
    CodeMetadata::new(
        "W020",
        "Lexical",
        Severity::Low,
        true,
        "Buffer exceeds the size expected for interactive rescans",
    ),
    CodeMetadata::new(
        "W030",
        "Folding",
        Severity::Low,
        true,
        "Closing brace without a matching open brace",
    ),
    CodeMetadata::new(
        "W031",
        "Folding",
        Severity::Low,
        true,
        "Open brace left unterminated at end of buffer",
    ),
    CodeMetadata::new(
        "E040",
        "Config",
        Severity::Medium,
        true,
        "Preferences file could not be read",
    ),
    CodeMetadata::new(
        "E041",
        "Config",
        Severity::Medium,
        true,
        "Preferences file is not valid TOML",
    ),
    CodeMetadata::new(
        "E042",
        "Config",
        Severity::Medium,
        true,
        "Preference value out of range",
    ),
    CodeMetadata::new(
        "E050",
        "Host",
        Severity::Medium,
        true,
        "Scan output could not be serialized for the host",
    ),
    CodeMetadata::new(
        "E051",
        "Host",
        Severity::High,
        true,
        "Host rejected the mode registration",
    ),
    CodeMetadata::new(
        "I001",
        "System",
        Severity::Low,
        true,
        "Logging system initialized",
    ),
    CodeMetadata::new(
        "I020",
        "Lexical",
        Severity::Low,
        true,
        "Token matcher built",
    ),
    CodeMetadata::new(
        "I021",
        "Lexical",
        Severity::Low,
        true,
        "Buffer classified",
    ),
    CodeMetadata::new(
        "I030",
        "Folding",
        Severity::Low,
        true,
        "Fold regions computed",
    ),
    CodeMetadata::new(
        "I040",
        "Config",
        Severity::Low,
        true,
        "Preferences loaded",
    ),
    CodeMetadata::new(
        "I050",
        "Host",
        Severity::Low,
        true,
        "Mode registered with host",
    ),
];

fn get_code_registry() -> &'static HashMap<&'static str, CodeMetadata> {
    CODE_REGISTRY.get_or_init(|| {
        REGISTERED_CODES
            .iter()
            .map(|metadata| (metadata.code, metadata.clone()))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get metadata for a specific code
pub fn get_metadata(code: &str) -> Option<&'static CodeMetadata> {
    get_code_registry().get(code)
}

/// Get severity from code
pub fn get_severity(code: &str) -> Severity {
    get_metadata(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if the condition behind a code is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_metadata(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Get human-readable description for code
pub fn get_description(code: &str) -> &'static str {
    get_metadata(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get category from code
pub fn get_category(code: &str) -> &'static str {
    get_metadata(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
