//! Host editor integration
//!
//! The classifier and fold scanner know nothing about any editor. A host
//! implements [`SyntaxHost`]; [`HostAdapter`] owns the immutable scanners and
//! pushes results into it. Hosts across a process boundary use
//! [`HostAdapter::scan_json`] instead.

pub mod output;
pub mod registration;

pub use output::ScanOutput;
pub use registration::ModeRegistration;

use crate::config::runtime::RuntimePreferences;
use crate::folding::{FoldScan, FoldScanner};
use crate::lexical::{Classifier, ClassifierError};
use crate::logging::{codes, Code};
use crate::tokens::ClassificationTag;
use crate::{log_debug, log_error, log_info, log_success};
use std::path::Path;

/// Host integration errors
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Host rejected mode '{mode}': {reason}")]
    RegistrationRejected { mode: String, reason: String },

    #[error("Failed to serialize scan output: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

impl HostError {
    pub fn error_code(&self) -> Code {
        match self {
            HostError::RegistrationRejected { .. } => codes::host::REGISTRATION_REJECTED,
            HostError::Serialization(_) => codes::host::SERIALIZATION_FAILED,
            HostError::Classifier(e) => e.error_code(),
        }
    }
}

/// Editor-side hooks
pub trait SyntaxHost {
    /// Associate the mode with the host's file and MIME tables
    fn register_mode(&mut self, registration: &ModeRegistration) -> Result<(), HostError>;

    /// Replace the buffer's styling with `tags`
    fn apply_tags(&mut self, tags: &[ClassificationTag]);

    /// Replace the buffer's fold regions
    fn apply_folds(&mut self, folds: &FoldScan);
}

/// Owns the scanners for one mode and drives a host with their results
#[derive(Debug, Clone)]
pub struct HostAdapter {
    classifier: Classifier,
    folds: FoldScanner,
    registration: ModeRegistration,
}

impl HostAdapter {
    pub fn new() -> Result<Self, HostError> {
        Self::with_preferences(&RuntimePreferences::default())
    }

    pub fn with_preferences(preferences: &RuntimePreferences) -> Result<Self, HostError> {
        let adapter = Self {
            classifier: Classifier::with_preferences(preferences.lexical.clone())?,
            folds: FoldScanner::with_preferences(preferences.folding.clone()),
            registration: ModeRegistration::h5dump(),
        };

        log_info!("Host adapter configured",
            "mode" => adapter.registration.name,
            "skip_quoted_strings" => preferences.folding.skip_quoted_strings,
            "large_buffer_threshold" => preferences.lexical.large_buffer_threshold
        );
        Ok(adapter)
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn fold_scanner(&self) -> &FoldScanner {
        &self.folds
    }

    pub fn registration(&self) -> &ModeRegistration {
        &self.registration
    }

    pub fn handles_path(&self, path: &Path) -> bool {
        self.registration.matches_path(path)
    }

    pub fn register<H: SyntaxHost + ?Sized>(&self, host: &mut H) -> Result<(), HostError> {
        match host.register_mode(&self.registration) {
            Ok(()) => {
                log_success!(codes::success::MODE_REGISTERED, "Mode registered",
                    "mode" => self.registration.name
                );
                Ok(())
            }
            Err(e) => {
                log_error!(e.error_code(), "Mode registration failed",
                    "mode" => self.registration.name,
                    "error" => &e
                );
                Err(e)
            }
        }
    }

    /// Classify and fold one buffer revision
    pub fn scan(&self, text: &str) -> ScanOutput {
        ScanOutput::new(self.classifier.tags(text), self.folds.scan(text))
    }

    /// Recompute everything for `text` and push it into the host
    pub fn refresh<H: SyntaxHost + ?Sized>(&self, host: &mut H, text: &str) {
        let tags = self.classifier.tags(text);
        let folds = self.folds.scan(text);
        log_debug!("Pushing scan results to host",
            "tags" => tags.len(),
            "folds" => folds.regions().len()
        );

        host.apply_tags(&tags);
        host.apply_folds(&folds);
    }

    pub fn scan_json(&self, text: &str) -> Result<String, HostError> {
        self.scan(text).to_json().map_err(|e| {
            log_error!(codes::host::SERIALIZATION_FAILED, "Scan output serialization failed",
                "error" => &e
            );
            HostError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[derive(Default)]
    struct RecordingHost {
        modes: Vec<&'static str>,
        tags: Vec<ClassificationTag>,
        folds: Option<FoldScan>,
        reject: bool,
    }

    impl SyntaxHost for RecordingHost {
        fn register_mode(&mut self, registration: &ModeRegistration) -> Result<(), HostError> {
            if self.reject {
                return Err(HostError::RegistrationRejected {
                    mode: registration.name.to_string(),
                    reason: "mode already taken".to_string(),
                });
            }
            self.modes.push(registration.name);
            Ok(())
        }

        fn apply_tags(&mut self, tags: &[ClassificationTag]) {
            self.tags = tags.to_vec();
        }

        fn apply_folds(&mut self, folds: &FoldScan) {
            self.folds = Some(folds.clone());
        }
    }

    #[test]
    fn test_register_and_refresh() {
        let adapter = HostAdapter::new().unwrap();
        let mut host = RecordingHost::default();

        adapter.register(&mut host).unwrap();
        assert_eq!(host.modes, vec!["h5dump"]);

        adapter.refresh(&mut host, "GROUP \"/\" { DATASET \"d\" { } }");
        assert_eq!(host.tags.len(), 2);
        assert_eq!(host.folds.as_ref().map(|f| f.regions().len()), Some(2));

        // Rescans replace earlier results
        adapter.refresh(&mut host, "DATASET \"x\"");
        assert_eq!(host.tags.len(), 1);
        assert_eq!(host.folds.as_ref().map(|f| f.regions().len()), Some(0));
    }

    #[test]
    fn test_rejected_registration() {
        let adapter = HostAdapter::new().unwrap();
        let mut host = RecordingHost {
            reject: true,
            ..RecordingHost::default()
        };

        let err = adapter.register(&mut host).unwrap_err();
        assert_matches!(err, HostError::RegistrationRejected { .. });
        assert_eq!(err.error_code(), codes::host::REGISTRATION_REJECTED);
    }

    #[test]
    fn test_scan_json_round_trips() {
        let adapter = HostAdapter::new().unwrap();
        let json = adapter.scan_json("GROUP { } }").unwrap();
        let output = ScanOutput::from_json(&json).unwrap();

        assert_eq!(output, adapter.scan("GROUP { } }"));
        assert_eq!(output.unbalanced, vec![10]);
        assert!(json.contains(r#""class":"keyword""#));
    }

    #[test]
    fn test_dyn_host() {
        let adapter = HostAdapter::new().unwrap();
        let mut host = RecordingHost::default();
        let dyn_host: &mut dyn SyntaxHost = &mut host;
        adapter.refresh(dyn_host, "HDF5 \"f\" {}");
        assert_eq!(host.tags.len(), 1);
    }

    #[test]
    fn test_configuration_and_refresh_are_logged() {
        let memory = crate::logging::test_support::capture();
        let mut preferences = RuntimePreferences::default();
        preferences.lexical.large_buffer_threshold = 987_654;

        let adapter = HostAdapter::with_preferences(&preferences).unwrap();
        let mut host = RecordingHost::default();
        adapter.refresh(&mut host, "GROUP { DATA { } DATA { } DATA { } DATA { } DATA { } }");

        let events = memory.get_events();
        assert!(events.iter().any(|e| {
            e.level == crate::logging::LogLevel::Info
                && e.context.get("large_buffer_threshold").map(String::as_str) == Some("987654")
        }));
        assert!(events.iter().any(|e| {
            e.level == crate::logging::LogLevel::Debug
                && e.context.get("tags").map(String::as_str) == Some("6")
                && e.context.get("folds").map(String::as_str) == Some("6")
        }));
    }

    #[test]
    fn test_handles_path() {
        let adapter = HostAdapter::new().unwrap();
        assert!(adapter.handles_path(Path::new("out.h5dump")));
        assert!(!adapter.handles_path(Path::new("out.json")));
    }
}
