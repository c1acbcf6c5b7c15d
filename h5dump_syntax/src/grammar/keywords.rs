//! Canonical token tables for h5dump text output
//!
//! Every recognized word is listed exactly once. Structural keywords get a
//! dedicated enum; datatype names, constants and variables are plain literal
//! tables grouped by role.
use crate::tokens::{TokenClass, TypeGroup};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// h5dump structural keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    Attribute,
    Comment,
    Data,
    Dataset,
    Dataspace,
    Datatype,
    Group,
    Softlink,
}

impl Keyword {
    pub const ALL: [Keyword; 8] = [
        Self::Attribute,
        Self::Comment,
        Self::Data,
        Self::Dataset,
        Self::Dataspace,
        Self::Datatype,
        Self::Group,
        Self::Softlink,
    ];

    /// Exact spelling in h5dump output
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Attribute => "ATTRIBUTE",
            Self::Comment => "COMMENT",
            Self::Data => "DATA",
            Self::Dataset => "DATASET",
            Self::Dataspace => "DATASPACE",
            Self::Datatype => "DATATYPE",
            Self::Group => "GROUP",
            Self::Softlink => "SOFTLINK",
        }
    }

    /// Case-sensitive lookup
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ATTRIBUTE" => Some(Self::Attribute),
            "COMMENT" => Some(Self::Comment),
            "DATA" => Some(Self::Data),
            "DATASET" => Some(Self::Dataset),
            "DATASPACE" => Some(Self::Dataspace),
            "DATATYPE" => Some(Self::Datatype),
            "GROUP" => Some(Self::Group),
            "SOFTLINK" => Some(Self::Softlink),
            _ => None,
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// LITERAL TABLES
// ============================================================================

/// Format marker shown on the first line of every dump
pub fn warning_markers() -> &'static [&'static str] {
    &["HDF5"]
}

pub fn integer_types() -> &'static [&'static str] {
    &[
        "H5T_STD_I8BE",
        "H5T_STD_I8LE",
        "H5T_STD_I16BE",
        "H5T_STD_I16LE",
        "H5T_STD_I32BE",
        "H5T_STD_I32LE",
        "H5T_STD_I64BE",
        "H5T_STD_I64LE",
        "H5T_STD_U8BE",
        "H5T_STD_U8LE",
        "H5T_STD_U16BE",
        "H5T_STD_U16LE",
        "H5T_STD_U32BE",
        "H5T_STD_U32LE",
        "H5T_STD_U64BE",
        "H5T_STD_U64LE",
        "H5T_NATIVE_CHAR",
        "H5T_NATIVE_UCHAR",
        "H5T_NATIVE_SHORT",
        "H5T_NATIVE_USHORT",
        "H5T_NATIVE_INT",
        "H5T_NATIVE_UINT",
        "H5T_NATIVE_LONG",
        "H5T_NATIVE_ULONG",
        "H5T_NATIVE_LLONG",
        "H5T_NATIVE_ULLONG",
    ]
}

pub fn float_types() -> &'static [&'static str] {
    &[
        "H5T_IEEE_F32BE",
        "H5T_IEEE_F32LE",
        "H5T_IEEE_F64BE",
        "H5T_IEEE_F64LE",
        "H5T_NATIVE_FLOAT",
        "H5T_NATIVE_DOUBLE",
        "H5T_NATIVE_LDOUBLE",
    ]
}

pub fn bitfield_types() -> &'static [&'static str] {
    &[
        "H5T_STD_B8BE",
        "H5T_STD_B8LE",
        "H5T_STD_B16BE",
        "H5T_STD_B16LE",
        "H5T_STD_B32BE",
        "H5T_STD_B32LE",
        "H5T_STD_B64BE",
        "H5T_STD_B64LE",
    ]
}

/// Structural datatype markers (compound, array, variable-length, ...)
pub fn composite_types() -> &'static [&'static str] {
    &[
        "H5T_ARRAY",
        "H5T_COMPOUND",
        "H5T_REFERENCE",
        "H5T_STRING",
        "H5T_VLEN",
    ]
}

/// Dataspace kinds
pub fn constants() -> &'static [&'static str] {
    &["SCALAR", "SIMPLE"]
}

/// Property names inside datatype and link blocks
pub fn variables() -> &'static [&'static str] {
    &["CSET", "CTYPE", "HARDLINK", "LINKTARGET", "STRPAD", "STRSIZE"]
}

/// Literals of one type subgroup
pub fn type_group_literals(group: TypeGroup) -> &'static [&'static str] {
    match group {
        TypeGroup::Integer => integer_types(),
        TypeGroup::Float => float_types(),
        TypeGroup::Bitfield => bitfield_types(),
        TypeGroup::Composite => composite_types(),
    }
}

/// One row of the combined token table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LiteralEntry {
    pub literal: &'static str,
    pub class: TokenClass,
    pub group: Option<TypeGroup>,
}

/// Every recognized literal in display-priority order
pub fn literal_table() -> Vec<LiteralEntry> {
    let plain = |class: TokenClass, literals: &'static [&'static str]| {
        literals.iter().map(move |&literal| LiteralEntry {
            literal,
            class,
            group: None,
        })
    };

    let mut table = Vec::new();
    table.extend(plain(TokenClass::Warning, warning_markers()));
    table.extend(Keyword::ALL.iter().map(|k| LiteralEntry {
        literal: k.as_str(),
        class: TokenClass::Keyword,
        group: None,
    }));
    for group in TypeGroup::ALL {
        table.extend(type_group_literals(group).iter().map(|&literal| LiteralEntry {
            literal,
            class: TokenClass::Type,
            group: Some(group),
        }));
    }
    table.extend(plain(TokenClass::Constant, constants()));
    table.extend(plain(TokenClass::Variable, variables()));
    table
}

/// Classify a complete word by exact, case-sensitive comparison
pub fn classify_word(word: &str) -> Option<LiteralEntry> {
    literal_index().get(word).copied()
}

static LITERAL_INDEX: OnceLock<HashMap<&'static str, LiteralEntry>> = OnceLock::new();

fn literal_index() -> &'static HashMap<&'static str, LiteralEntry> {
    LITERAL_INDEX.get_or_init(|| {
        literal_table()
            .into_iter()
            .map(|entry| (entry.literal, entry))
            .collect()
    })
}

/// Verify that no literal belongs to two classes; returns the offending literals
pub fn validate_tables() -> Result<(), Vec<&'static str>> {
    let mut seen = HashSet::new();
    let duplicates: Vec<&'static str> = literal_table()
        .into_iter()
        .filter(|entry| !seen.insert(entry.literal))
        .map(|entry| entry.literal)
        .collect();

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(duplicates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_round_trip() {
        for keyword in Keyword::ALL {
            assert_eq!(Keyword::from_str(keyword.as_str()), Some(keyword));
        }
        assert_eq!(Keyword::from_str("dataset"), None);
        assert_eq!(Keyword::from_str("DATASETS"), None);
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(integer_types().len(), 26);
        assert_eq!(float_types().len(), 7);
        assert_eq!(bitfield_types().len(), 8);
        assert_eq!(composite_types().len(), 5);
        assert_eq!(literal_table().len(), 1 + 8 + 46 + 2 + 6);
    }

    #[test]
    fn test_tables_are_disjoint() {
        assert_eq!(validate_tables(), Ok(()));
    }

    #[test]
    fn test_literals_are_plain_identifiers() {
        for entry in literal_table() {
            assert!(
                entry
                    .literal
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_'),
                "{} contains a non-identifier character",
                entry.literal
            );
        }
    }

    #[test]
    fn test_classify_word() {
        let entry = classify_word("H5T_IEEE_F64LE").unwrap();
        assert_eq!(entry.class, TokenClass::Type);
        assert_eq!(entry.group, Some(TypeGroup::Float));

        assert_eq!(classify_word("HDF5").unwrap().class, TokenClass::Warning);
        assert_eq!(classify_word("SIMPLE").unwrap().class, TokenClass::Constant);
        assert_eq!(classify_word("STRPAD").unwrap().class, TokenClass::Variable);
        assert!(classify_word("H5T_STD_I8BEX").is_none());
        assert!(classify_word("").is_none());
    }

    #[test]
    fn test_word_index_covers_table() {
        let table = literal_table();
        assert_eq!(literal_index().len(), table.len());
        for entry in table {
            assert_eq!(classify_word(entry.literal), Some(entry));
        }
        assert!(std::ptr::eq(literal_index(), literal_index()));
    }

    #[test]
    fn test_type_groups_partition_type_class() {
        let types: Vec<_> = literal_table()
            .into_iter()
            .filter(|e| e.class == TokenClass::Type)
            .collect();
        assert!(types.iter().all(|e| e.group.is_some()));
        assert!(literal_table()
            .into_iter()
            .filter(|e| e.class != TokenClass::Type)
            .all(|e| e.group.is_none()));
        assert_eq!(types.len(), 46);
    }
}
