//! Token classification for h5dump text
//!
//! Builds the immutable [`Classifier`] and exposes convenience entry points
//! for one-off scans.

pub mod analyzer;

use crate::config::runtime::LexicalPreferences;

pub use analyzer::{ClassifiedMatches, Classifier, ClassifierError, LexicalMetrics};

/// Create a classifier with default preferences
pub fn create_classifier() -> Result<Classifier, ClassifierError> {
    Classifier::new()
}

/// Create a classifier with custom runtime preferences
pub fn create_classifier_with_preferences(
    preferences: LexicalPreferences,
) -> Result<Classifier, ClassifierError> {
    Classifier::with_preferences(preferences)
}
