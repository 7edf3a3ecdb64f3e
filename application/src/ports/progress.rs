//! Progress notification port
//!
//! Defines the interface for reporting progress during a video analysis.

use std::time::Duration;
use summarizer_domain::RemoteFileState;

/// The remote steps of an analysis, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisStage {
    Upload,
    Processing,
    Agent,
}

impl AnalysisStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisStage::Upload => "upload",
            AnalysisStage::Processing => "processing",
            AnalysisStage::Agent => "agent",
        }
    }

    /// Human-readable label for spinners and logs
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisStage::Upload => "Uploading video",
            AnalysisStage::Processing => "Waiting for video processing",
            AnalysisStage::Agent => "Gathering insights",
        }
    }
}

impl std::fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Callback for progress updates during an analysis
///
/// Implementations live in the presentation layer (console spinner, logs).
pub trait AnalysisProgress: Send + Sync {
    fn on_stage_start(&self, stage: AnalysisStage);

    fn on_stage_complete(&self, stage: AnalysisStage, success: bool);

    /// Called after every state observation, the upload response included.
    fn on_state_checked(&self, _check: u32, _state: &RemoteFileState) {}

    /// Called before sleeping between two state checks.
    fn on_poll_wait(&self, _check: u32, _delay: Duration) {}

    /// Called when the model asks for a tool.
    fn on_tool_call(&self, _tool_name: &str, _turn: usize) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl AnalysisProgress for NoProgress {
    fn on_stage_start(&self, _stage: AnalysisStage) {}
    fn on_stage_complete(&self, _stage: AnalysisStage, _success: bool) {}
}
