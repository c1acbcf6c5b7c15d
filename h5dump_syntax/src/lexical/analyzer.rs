//! Token classifier
//!
//! All literal tables are compiled into one longest-first alternation. A
//! candidate only counts when the characters on either side are neither
//! alphanumeric nor `_`, so `H5T_STD_I8BEX` never yields `H5T_STD_I8BE` and
//! `DATA½` never yields `DATA`. The matcher is built once and is immutable
//! afterwards; scans borrow it.

use crate::config::runtime::LexicalPreferences;
use crate::grammar::keywords::{literal_table, validate_tables, LiteralEntry};
use crate::logging::{codes, Code};
use crate::tokens::{ClassificationTag, ClassifiedMatch, TokenClass};
use crate::{log_error, log_success, log_warning};
use regex::Regex;
use std::collections::HashMap;

/// Errors raised while building a classifier
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClassifierError {
    #[error("Failed to compile token matcher: {0}")]
    MatcherBuild(#[from] regex::Error),

    #[error("Literals listed in more than one token class: {}", literals.join(", "))]
    OverlappingClasses { literals: Vec<&'static str> },
}

impl ClassifierError {
    pub fn error_code(&self) -> Code {
        match self {
            ClassifierError::MatcherBuild(_) => codes::lexical::MATCHER_BUILD_FAILED,
            ClassifierError::OverlappingClasses { .. } => {
                codes::lexical::OVERLAPPING_TOKEN_CLASSES
            }
        }
    }
}

/// Per-scan match counts
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LexicalMetrics {
    pub bytes_scanned: usize,
    pub total_matches: usize,
    pub warning_matches: usize,
    pub keyword_matches: usize,
    pub type_matches: usize,
    pub constant_matches: usize,
    pub variable_matches: usize,
}

impl LexicalMetrics {
    pub(crate) fn record_match(&mut self, class: TokenClass) {
        self.total_matches += 1;

        match class {
            TokenClass::Warning => self.warning_matches += 1,
            TokenClass::Keyword => self.keyword_matches += 1,
            TokenClass::Type => self.type_matches += 1,
            TokenClass::Constant => self.constant_matches += 1,
            TokenClass::Variable => self.variable_matches += 1,
        }
    }

    pub fn count_for(&self, class: TokenClass) -> usize {
        match class {
            TokenClass::Warning => self.warning_matches,
            TokenClass::Keyword => self.keyword_matches,
            TokenClass::Type => self.type_matches,
            TokenClass::Constant => self.constant_matches,
            TokenClass::Variable => self.variable_matches,
        }
    }
}

/// Immutable token classifier built from the canonical literal tables
#[derive(Debug, Clone)]
pub struct Classifier {
    matcher: Regex,
    lookup: HashMap<&'static str, LiteralEntry>,
    preferences: LexicalPreferences,
}

impl Classifier {
    pub fn new() -> Result<Self, ClassifierError> {
        Self::with_preferences(LexicalPreferences::default())
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Result<Self, ClassifierError> {
        if let Err(literals) = validate_tables() {
            let error = ClassifierError::OverlappingClasses { literals };
            log_error!(error.error_code(), "Token tables overlap",
                "error" => &error
            );
            return Err(error);
        }

        let table = literal_table();
        let matcher = build_matcher(&table).map_err(|e| {
            log_error!(codes::lexical::MATCHER_BUILD_FAILED, "Token matcher failed to compile",
                "error" => &e
            );
            ClassifierError::from(e)
        })?;
        let lookup: HashMap<_, _> = table.iter().map(|entry| (entry.literal, *entry)).collect();

        log_success!(codes::success::CLASSIFIER_READY, "Token matcher built",
            "literals" => lookup.len()
        );

        Ok(Self {
            matcher,
            lookup,
            preferences,
        })
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    /// Number of distinct literals recognized
    pub fn literal_count(&self) -> usize {
        self.lookup.len()
    }

    /// Exact lookup of a complete word
    pub fn classify_word(&self, word: &str) -> Option<TokenClass> {
        self.lookup.get(word).map(|entry| entry.class)
    }

    /// Lazy scan over `text`; clone the iterator or call `reset` to restart
    pub fn matches<'c, 't>(&'c self, text: &'t str) -> ClassifiedMatches<'c, 't> {
        ClassifiedMatches {
            classifier: self,
            text,
            position: 0,
        }
    }

    /// Collect every match in `text`
    pub fn classify<'t>(&self, text: &'t str) -> Vec<ClassifiedMatch<'t>> {
        self.classify_with_metrics(text).0
    }

    /// Collect every match in `text` together with per-class counts
    pub fn classify_with_metrics<'t>(
        &self,
        text: &'t str,
    ) -> (Vec<ClassifiedMatch<'t>>, LexicalMetrics) {
        self.check_buffer_size(text);

        let mut metrics = LexicalMetrics {
            bytes_scanned: text.len(),
            ..LexicalMetrics::default()
        };
        let matches: Vec<_> = self.matches(text).collect();

        if self.preferences.collect_metrics {
            for m in &matches {
                metrics.record_match(m.class);
            }
            log_success!(codes::success::CLASSIFICATION_COMPLETED, "Buffer classified",
                "bytes" => metrics.bytes_scanned,
                "matches" => metrics.total_matches,
                "keywords" => metrics.keyword_matches,
                "types" => metrics.type_matches
            );
        }

        (matches, metrics)
    }

    /// `(start, end, class_name)` tags for a host renderer
    pub fn tags(&self, text: &str) -> Vec<ClassificationTag> {
        self.check_buffer_size(text);
        self.matches(text).map(|m| m.to_tag()).collect()
    }

    fn check_buffer_size(&self, text: &str) {
        if text.len() > self.preferences.large_buffer_threshold {
            log_warning!(codes::lexical::LARGE_BUFFER, "Classifying a very large buffer",
                "bytes" => text.len(),
                "threshold" => self.preferences.large_buffer_threshold
            );
        }
    }

    fn entry_for(&self, literal: &str) -> Option<&LiteralEntry> {
        self.lookup.get(literal)
    }
}

fn build_matcher(table: &[LiteralEntry]) -> Result<Regex, regex::Error> {
    let mut literals: Vec<&str> = table.iter().map(|entry| entry.literal).collect();
    // Longest first so the alternation prefers maximal tokens
    literals.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

    let alternation = literals
        .iter()
        .map(|literal| regex::escape(literal))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!("(?:{})", alternation))
}

/// Characters that glue onto a literal and make it part of a longer word
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn is_standalone(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

/// Lazy, restartable iterator over classified matches
#[derive(Debug, Clone)]
pub struct ClassifiedMatches<'c, 't> {
    classifier: &'c Classifier,
    text: &'t str,
    position: usize,
}

impl<'c, 't> ClassifiedMatches<'c, 't> {
    /// Restart the scan from the beginning of the buffer
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Byte offset where the next search starts
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'c, 't> Iterator for ClassifiedMatches<'c, 't> {
    type Item = ClassifiedMatch<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.position < self.text.len() {
            let found = self.classifier.matcher.find_at(self.text, self.position)?;

            if !is_standalone(self.text, found.start(), found.end()) {
                // A rejected candidate may hide a standalone literal inside it
                let step = self.text[found.start()..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                self.position = found.start() + step;
                continue;
            }

            self.position = found.end();
            if let Some(entry) = self.classifier.entry_for(found.as_str()) {
                return Some(ClassifiedMatch {
                    text: found.as_str(),
                    start: found.start(),
                    end: found.end(),
                    class: entry.class,
                    group: entry.group,
                });
            }
        }
        None
    }
}
