//! Token classes and classified matches
use crate::utils::{SourceMap, Span};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic category of a recognized word, in display-priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenClass {
    /// The `HDF5` marker on the first line of a dump
    Warning,
    Keyword,
    /// Datatype names, see [`TypeGroup`] for the logical subgroups
    Type,
    Constant,
    Variable,
}

impl TokenClass {
    pub const ALL: [TokenClass; 5] = [
        Self::Warning,
        Self::Keyword,
        Self::Type,
        Self::Constant,
        Self::Variable,
    ];

    /// Class name handed to host renderers
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Keyword => "keyword",
            Self::Type => "type",
            Self::Constant => "constant",
            Self::Variable => "variable",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.as_str() == name)
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical subgroup inside [`TokenClass::Type`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeGroup {
    Integer,
    Float,
    Bitfield,
    Composite,
}

impl TypeGroup {
    pub const ALL: [TypeGroup; 4] = [
        Self::Integer,
        Self::Float,
        Self::Bitfield,
        Self::Composite,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer-type",
            Self::Float => "float-type",
            Self::Bitfield => "bitfield-type",
            Self::Composite => "composite-type",
        }
    }
}

impl fmt::Display for TypeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recognized word in a scanned buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedMatch<'t> {
    /// Matched text, borrowed from the scanned buffer
    pub text: &'t str,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    pub class: TokenClass,
    /// Set only for [`TokenClass::Type`]
    pub group: Option<TypeGroup>,
}

impl<'t> ClassifiedMatch<'t> {
    /// Offset-only span
    pub fn span(&self) -> Span {
        Span::from_offsets(self.start, self.end)
    }

    /// Span with line and column resolved against the buffer's source map
    pub fn resolve(&self, map: &SourceMap<'_>) -> Span {
        map.span(self.start, self.end)
    }

    /// Most specific name available: the type subgroup, else the class
    pub fn detail_name(&self) -> &'static str {
        self.group
            .map(TypeGroup::as_str)
            .unwrap_or_else(|| self.class.as_str())
    }

    pub fn to_tag(&self) -> ClassificationTag {
        ClassificationTag {
            start: self.start,
            end: self.end,
            class: self.class,
        }
    }
}

/// `(start_offset, end_offset, class_name)` triple consumed by host renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationTag {
    pub start: usize,
    pub end: usize,
    pub class: TokenClass,
}

impl ClassificationTag {
    pub fn class_name(&self) -> &'static str {
        self.class.as_str()
    }

    pub fn as_triple(&self) -> (usize, usize, &'static str) {
        (self.start, self.end, self.class_name())
    }
}
