//! Port for structured analysis logging.
//!
//! Defines the [`AnalysisLogger`] trait for recording the events of an
//! analysis (upload, state checks, tool calls, final answer) to a
//! machine-readable log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures a transcript that
//! can be audited later.

use serde_json::Value;

/// A structured analysis event for logging.
pub struct AnalysisEvent {
    /// Event type identifier (e.g., "video_uploaded", "tool_call").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl AnalysisEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging analysis events to a structured log.
///
/// `log` is synchronous and non-fallible; logging failures never interrupt
/// an analysis.
pub trait AnalysisLogger: Send + Sync {
    fn log(&self, event: AnalysisEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoAnalysisLogger;

impl AnalysisLogger for NoAnalysisLogger {
    fn log(&self, _event: AnalysisEvent) {}
}
