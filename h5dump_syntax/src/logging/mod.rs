//! Global logging module for h5dump syntax support
//!
//! Provides a process-wide logging service behind a `OnceLock`, coded log
//! events, and a small macro interface. Every macro is a silent no-op until
//! [`init_global_logging`] (or [`init_global_logging_with_service`]) runs, so
//! hosts that never initialize logging pay nothing for it.

pub mod codes;
pub mod events;
pub mod macros;
pub mod service;

use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

use crate::config::runtime::LoggingPreferences;
use crate::utils::Span;

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging from preferences
pub fn init_global_logging(preferences: &LoggingPreferences) -> Result<(), String> {
    let logging_service = Arc::new(LoggingService::from_preferences(preferences));

    GLOBAL_LOGGER
        .set(logging_service.clone())
        .map_err(|_| "Global logger already initialized")?;

    logging_service.log_success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    );

    Ok(())
}

/// Initialize with custom service (primarily for testing and embedding hosts)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())
}

/// Check if global logging is initialized
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

/// Safe access to global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

/// Whether an event at `level` would reach the global logger
pub fn is_level_enabled(level: LogLevel) -> bool {
    try_get_global_logger()
        .map(|logger| logger.should_log(level))
        .unwrap_or(false)
}

// ============================================================================
// MACRO SUPPORT
// ============================================================================

/// Attach span and context to an event and hand it to the global logger
pub fn log_with_context(event: LogEvent, span: Option<Span>, context: Vec<(&str, String)>) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };

    let mut event = event;
    if let Some(s) = span {
        event = event.with_span(s);
    }
    for (key, value) in context {
        event = event.with_context(key, &value);
    }

    logger.log_event(event);
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    static CAPTURE: OnceLock<Arc<MemoryLogger>> = OnceLock::new();

    /// Shared memory logger installed as the global logger for unit tests.
    /// Tests run in parallel, so assertions must look for their own events.
    pub fn capture() -> Arc<MemoryLogger> {
        CAPTURE
            .get_or_init(|| {
                let memory = Arc::new(MemoryLogger::new());
                let service = Arc::new(LoggingService::new(memory.clone(), LogLevel::Debug));
                let _ = init_global_logging_with_service(service);
                memory
            })
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_initialization_is_rejected() {
        let _ = test_support::capture();
        assert!(is_initialized());

        let result = init_global_logging(&LoggingPreferences::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_log_with_context_reaches_capture() {
        let memory = test_support::capture();

        log_with_context(
            LogEvent::warning_with_code(codes::lexical::LARGE_BUFFER, "context marker"),
            Some(Span::from_offsets(1, 2)),
            vec![("marker", "logging-mod".to_string())],
        );

        let found = memory
            .get_events_with_code(codes::lexical::LARGE_BUFFER)
            .into_iter()
            .any(|e| e.context.get("marker").map(String::as_str) == Some("logging-mod"));
        assert!(found);
    }
}
