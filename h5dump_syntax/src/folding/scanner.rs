//! Brace-stack fold scanner
//!
//! Each `{` pushes a region, each `}` closes the innermost open one. A `}`
//! with nothing open is recorded and skipped; a `{` still open at end of input
//! stays open. Nothing here can fail.

use super::region::{FoldRegion, FoldScan};
use crate::config::constants::compile_time::folding::{
    CLOSE_DELIMITER, ESCAPE, OPEN_DELIMITER, QUOTE,
};
use crate::config::runtime::FoldPreferences;
use crate::logging::codes;
use crate::utils::Span;
use crate::{log_success, log_warning};

#[derive(Debug, Clone)]
pub struct FoldScanner {
    preferences: FoldPreferences,
}

impl FoldScanner {
    /// Plain brace matching; quoted text is not special
    pub fn new() -> Self {
        Self::with_preferences(FoldPreferences::plain_braces())
    }

    pub fn with_preferences(preferences: FoldPreferences) -> Self {
        Self { preferences }
    }

    pub fn preferences(&self) -> &FoldPreferences {
        &self.preferences
    }

    pub fn scan(&self, text: &str) -> FoldScan {
        let mut scan = FoldScan::default();
        let mut open_stack: Vec<usize> = Vec::new();
        let mut quotes = QuoteState::default();

        for (offset, ch) in text.char_indices() {
            if self.preferences.skip_quoted_strings && quotes.consume(ch) {
                continue;
            }

            match ch {
                OPEN_DELIMITER => {
                    open_stack.push(scan.regions.len());
                    scan.regions.push(FoldRegion {
                        open: offset,
                        close: None,
                        depth: open_stack.len() - 1,
                    });
                }
                CLOSE_DELIMITER => match open_stack.pop() {
                    Some(index) => scan.regions[index].close = Some(offset),
                    None => {
                        if self.preferences.log_unbalanced {
                            log_warning!(
                                codes::folding::UNBALANCED_CLOSE,
                                "Closing brace without matching open brace",
                                span = Span::from_offsets(offset, offset + 1),
                                "offset" => offset
                            );
                        }
                        scan.unbalanced.push(offset);
                    }
                },
                _ => {}
            }
        }

        if self.preferences.log_unbalanced && !open_stack.is_empty() {
            log_warning!(
                codes::folding::UNTERMINATED_REGION,
                "Open braces left unterminated at end of buffer",
                "count" => open_stack.len(),
                "first_offset" => scan.regions[open_stack[0]].open
            );
        }

        log_success!(codes::success::FOLD_SCAN_COMPLETED, "Fold regions computed",
            "regions" => scan.regions.len(),
            "unterminated" => open_stack.len(),
            "unbalanced" => scan.unbalanced.len()
        );

        scan
    }
}

impl Default for FoldScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks whether the scan is inside a double-quoted string
#[derive(Debug, Default)]
struct QuoteState {
    in_string: bool,
    escaped: bool,
}

impl QuoteState {
    /// Feed one character; returns true when it belongs to a quoted string
    fn consume(&mut self, ch: char) -> bool {
        if self.in_string {
            if self.escaped {
                self.escaped = false;
            } else if ch == ESCAPE {
                self.escaped = true;
            } else if ch == QUOTE {
                self.in_string = false;
            }
            return true;
        }

        if ch == QUOTE {
            self.in_string = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::test_support;

    fn quiet() -> FoldScanner {
        FoldScanner::with_preferences(FoldPreferences {
            skip_quoted_strings: false,
            log_unbalanced: false,
        })
    }

    #[test]
    fn test_nested_regions() {
        let text = r#"GROUP "/" {DATASET "x" {DATA {1 2 3}}}"#;
        let scan = quiet().scan(text);

        assert_eq!(
            scan.pairs(),
            vec![(10, Some(37)), (23, Some(36)), (29, Some(35))]
        );
        let depths: Vec<_> = scan.regions().iter().map(|r| r.depth).collect();
        assert_eq!(depths, vec![0, 1, 2]);
        assert!(scan.is_balanced());
        assert_eq!(scan.regions()[2].inner_text(text), "1 2 3");
    }

    #[test]
    fn test_unmatched_close() {
        let scan = quiet().scan("GROUP { } }");

        assert_eq!(scan.pairs(), vec![(6, Some(8))]);
        assert_eq!(scan.unbalanced(), &[10]);
        assert!(!scan.is_balanced());
    }

    #[test]
    fn test_close_before_open_keeps_later_regions() {
        let scan = quiet().scan("} DATA { 1 }");
        assert_eq!(scan.unbalanced(), &[0]);
        assert_eq!(scan.pairs(), vec![(7, Some(11))]);
    }

    #[test]
    fn test_unterminated_open() {
        let scan = quiet().scan("GROUP \"/\" {\n   DATASET \"d\" {\n   }\n");

        assert_eq!(scan.closed_regions().count(), 1);
        let open: Vec<_> = scan.open_regions().collect();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].open, 10);
        assert_eq!(open[0].depth, 0);
        assert!(scan.unbalanced().is_empty());
        assert!(!scan.is_balanced());
    }

    #[test]
    fn test_no_braces() {
        let scan = quiet().scan("DATASET \"x\"");
        assert!(scan.regions().is_empty());
        assert!(scan.is_balanced());
        assert_eq!(scan.max_depth(), None);
    }

    #[test]
    fn test_siblings_share_depth() {
        let scan = quiet().scan("{ {a} {b} {c} }");
        let depths: Vec<_> = scan.regions().iter().map(|r| r.depth).collect();
        assert_eq!(depths, vec![0, 1, 1, 1]);
        assert_eq!(scan.max_depth(), Some(1));
    }

    #[test]
    fn test_region_at_returns_innermost() {
        let text = r#"GROUP "/" {DATASET "x" {DATA {1 2 3}}}"#;
        let scan = quiet().scan(text);

        assert_eq!(scan.region_at(31).map(|r| r.open), Some(29));
        assert_eq!(scan.region_at(25).map(|r| r.open), Some(23));
        assert_eq!(scan.region_at(11).map(|r| r.open), Some(10));
        assert!(scan.region_at(2).is_none());
    }

    #[test]
    fn test_quoted_braces_counted_by_default() {
        let scan = quiet().scan(r#"ATTRIBUTE "a{b" { DATA { "}" } }"#);
        // Plain brace counting pairs the quoted braces with real ones
        assert!(scan.is_balanced());
        assert_eq!(
            scan.pairs(),
            vec![(12, Some(31)), (16, Some(29)), (23, Some(26))]
        );
    }

    #[test]
    fn test_new_never_skips_quotes() {
        assert!(!FoldScanner::new().preferences().skip_quoted_strings);
        assert!(!FoldScanner::default().preferences().skip_quoted_strings);

        let scan = crate::folding::scan_fold_regions(r#"DATA { "}" }"#);
        assert_eq!(scan.pairs(), vec![(5, Some(8))]);
        assert_eq!(scan.unbalanced(), &[11]);
    }

    #[test]
    fn test_fold_scan_logged_with_counts() {
        let memory = test_support::capture();

        // Three strays, seven opens, two left open
        let scan = quiet().scan("}}}{{{{{{{}}}}}");
        assert_eq!(scan.unbalanced().len(), 3);
        assert_eq!(scan.open_regions().count(), 2);

        let logged = memory
            .get_events_with_code(codes::success::FOLD_SCAN_COMPLETED)
            .into_iter()
            .any(|e| {
                e.context.get("regions").map(String::as_str) == Some("7")
                    && e.context.get("unterminated").map(String::as_str) == Some("2")
                    && e.context.get("unbalanced").map(String::as_str) == Some("3")
            });
        assert!(logged);
    }

    #[test]
    fn test_quoted_braces_skipped_when_enabled() {
        let scanner = FoldScanner::with_preferences(FoldPreferences {
            skip_quoted_strings: true,
            log_unbalanced: false,
        });
        let text = r#"ATTRIBUTE "a{b" { DATA { "}", "\"{" } }"#;
        let scan = scanner.scan(text);

        assert!(scan.is_balanced());
        assert_eq!(scan.regions().len(), 2);
        assert_eq!(scan.regions()[0].open, 16);
    }

    #[test]
    fn test_unbalanced_close_is_logged() {
        let memory = test_support::capture();
        let scanner = FoldScanner::with_preferences(FoldPreferences {
            skip_quoted_strings: false,
            log_unbalanced: true,
        });

        // Distinct offset so parallel tests cannot produce the same event
        let text = format!("{}}}", " ".repeat(4321));
        let scan = scanner.scan(&text);
        assert_eq!(scan.unbalanced(), &[4321]);

        let logged = memory
            .get_events_with_code(codes::folding::UNBALANCED_CLOSE)
            .into_iter()
            .any(|e| e.context.get("offset").map(String::as_str) == Some("4321"));
        assert!(logged);
    }
}
