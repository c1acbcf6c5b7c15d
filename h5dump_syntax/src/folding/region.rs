//! Fold region types

use crate::utils::{SourceMap, Span};
use serde::{Deserialize, Serialize};

/// Span between a `{` and its matching `}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoldRegion {
    /// Byte offset of the opening brace
    pub open: usize,
    /// Byte offset of the closing brace; `None` while the region is unterminated
    pub close: Option<usize>,
    /// Nesting depth, 0 for outermost
    pub depth: usize,
}

/// 1-based line extent of a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    pub start_line: u32,
    /// `None` for unterminated regions
    pub end_line: Option<u32>,
}

impl FoldRegion {
    pub fn is_closed(&self) -> bool {
        self.close.is_some()
    }

    /// Whether `offset` falls between the braces, inclusive of both
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.open && self.close.map_or(true, |close| offset <= close)
    }

    /// Span covering both braces; unterminated regions extend to `buffer_len`
    pub fn span(&self, buffer_len: usize) -> Span {
        let end = self.close.map(|close| close + 1).unwrap_or(buffer_len);
        Span::from_offsets(self.open, end.max(self.open))
    }

    /// Text between the braces, exclusive of both
    pub fn inner_text<'a>(&self, text: &'a str) -> &'a str {
        let start = (self.open + 1).min(text.len());
        let end = self.close.unwrap_or(text.len()).max(start);
        &text[start..end]
    }

    pub fn line_range(&self, map: &SourceMap<'_>) -> LineRange {
        LineRange {
            start_line: map.line_of(self.open),
            end_line: self.close.map(|close| map.line_of(close)),
        }
    }

    /// Line-based hosts can only fold regions that end on a later line.
    /// Unterminated regions fold to the end of the buffer.
    pub fn is_foldable_on_lines(&self, map: &SourceMap<'_>) -> bool {
        let range = self.line_range(map);
        let end_line = range.end_line.unwrap_or(map.line_count() as u32);
        end_line > range.start_line
    }

    pub fn as_pair(&self) -> (usize, Option<usize>) {
        (self.open, self.close)
    }
}

/// Result of one fold scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoldScan {
    /// Regions in document order (sorted by opening offset)
    pub(crate) regions: Vec<FoldRegion>,
    /// Offsets of `}` characters with no open region to close
    pub(crate) unbalanced: Vec<usize>,
}

impl FoldScan {
    pub fn regions(&self) -> &[FoldRegion] {
        &self.regions
    }

    pub fn unbalanced(&self) -> &[usize] {
        &self.unbalanced
    }

    pub fn is_balanced(&self) -> bool {
        self.unbalanced.is_empty() && self.regions.iter().all(FoldRegion::is_closed)
    }

    pub fn closed_regions(&self) -> impl Iterator<Item = &FoldRegion> + '_ {
        self.regions.iter().filter(|r| r.is_closed())
    }

    pub fn open_regions(&self) -> impl Iterator<Item = &FoldRegion> + '_ {
        self.regions.iter().filter(|r| !r.is_closed())
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.regions.iter().map(|r| r.depth).max()
    }

    /// Innermost region containing `offset`
    pub fn region_at(&self, offset: usize) -> Option<&FoldRegion> {
        // Document order means a later containing region is nested deeper
        self.regions.iter().rev().find(|r| r.contains(offset))
    }

    /// `(open_offset, close_offset_or_none)` pairs in document order
    pub fn pairs(&self) -> Vec<(usize, Option<usize>)> {
        self.regions.iter().map(FoldRegion::as_pair).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_and_span() {
        let closed = FoldRegion {
            open: 4,
            close: Some(9),
            depth: 0,
        };
        assert!(closed.contains(4));
        assert!(closed.contains(9));
        assert!(!closed.contains(10));
        assert_eq!(closed.span(20), Span::from_offsets(4, 10));

        let open = FoldRegion {
            open: 4,
            close: None,
            depth: 0,
        };
        assert!(open.contains(1000));
        assert_eq!(open.span(20), Span::from_offsets(4, 20));
    }

    #[test]
    fn test_inner_text() {
        let text = "DATA {1 2 3}";
        let region = FoldRegion {
            open: 5,
            close: Some(11),
            depth: 0,
        };
        assert_eq!(region.inner_text(text), "1 2 3");

        let unterminated = FoldRegion {
            open: 5,
            close: None,
            depth: 0,
        };
        assert_eq!(unterminated.inner_text(text), "1 2 3}");
    }

    #[test]
    fn test_line_foldability() {
        let text = "GROUP \"/\" {\n   DATA { 1 }\n}";
        let map = SourceMap::new(text);

        let outer = FoldRegion {
            open: 10,
            close: Some(26),
            depth: 0,
        };
        let inner = FoldRegion {
            open: 20,
            close: Some(24),
            depth: 1,
        };
        assert_eq!(
            outer.line_range(&map),
            LineRange {
                start_line: 1,
                end_line: Some(3)
            }
        );
        assert!(outer.is_foldable_on_lines(&map));
        assert!(!inner.is_foldable_on_lines(&map));
    }
}
