//! Wait for the provider to finish processing an uploaded video.
//!
//! The remote file starts in `PROCESSING`. State is re-fetched by name with
//! exponential backoff until it leaves that state, the [`PollPolicy`] is
//! exhausted, or the cancellation token fires.
//!
//! ```text
//! upload ──▶ check #1 ──PROCESSING──▶ sleep ──▶ get ──▶ check #2 ──▶ ...
//!               │
//!               ├─ ACTIVE  ──▶ Ok(ProcessedVideo)
//!               ├─ FAILED  ──▶ Err(ProcessingFailed)
//!               └─ other   ──▶ Err(UnknownProcessingState)
//! ```

use super::analyze_video::AnalyzeVideoError;
use crate::config::PollPolicy;
use crate::ports::media_store::MediaStore;
use crate::ports::progress::{AnalysisProgress, AnalysisStage};
use summarizer_domain::{RemoteFileState, RemoteVideo};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// A remote video that reached the ready state.
#[derive(Debug, Clone)]
pub struct ProcessedVideo {
    pub video: RemoteVideo,
    /// State observations made, the upload response included.
    pub state_checks: u32,
}

/// Poll `uploaded` until it is ready.
///
/// The upload response counts as the first state check, so a file reported
/// as `PROCESSING` `n` times takes `n + 1` checks and `n` sleeps.
pub async fn await_processing(
    store: &dyn MediaStore,
    uploaded: RemoteVideo,
    policy: &PollPolicy,
    cancellation: &CancellationToken,
    progress: &dyn AnalysisProgress,
) -> Result<ProcessedVideo, AnalyzeVideoError> {
    let started = Instant::now();
    let mut video = uploaded;
    let mut checks: u32 = 1;
    progress.on_state_checked(checks, &video.state);

    loop {
        match &video.state {
            RemoteFileState::Processing => {}
            RemoteFileState::Ready => {
                debug!(name = %video.name, checks, "Video ready");
                return Ok(ProcessedVideo {
                    video,
                    state_checks: checks,
                });
            }
            RemoteFileState::Failed(reason) => {
                return Err(AnalyzeVideoError::ProcessingFailed {
                    name: video.name.clone(),
                    reason: reason.clone(),
                });
            }
            RemoteFileState::Unknown(state) => {
                return Err(AnalyzeVideoError::UnknownProcessingState {
                    name: video.name.clone(),
                    state: state.clone(),
                });
            }
        }

        let elapsed = started.elapsed();
        if checks >= policy.max_attempts || elapsed >= policy.timeout {
            warn!(name = %video.name, checks, ?elapsed, "Gave up waiting for video processing");
            return Err(AnalyzeVideoError::ProcessingTimedOut {
                name: video.name.clone(),
                attempts: checks,
                elapsed,
            });
        }

        let delay = policy.delay_after(checks).min(policy.timeout - elapsed);
        progress.on_poll_wait(checks, delay);
        debug!(name = %video.name, checks, ?delay, "Video still processing");

        tokio::select! {
            biased;
            _ = cancellation.cancelled() => {
                return Err(AnalyzeVideoError::Cancelled { stage: AnalysisStage::Processing });
            }
            _ = tokio::time::sleep(delay) => {}
        }

        let refreshed = tokio::select! {
            biased;
            _ = cancellation.cancelled() => {
                return Err(AnalyzeVideoError::Cancelled { stage: AnalysisStage::Processing });
            }
            result = store.get(&video.name) => result,
        };
        video = refreshed.map_err(|source| AnalyzeVideoError::Poll {
            name: video.name.clone(),
            source,
        })?;

        checks += 1;
        progress.on_state_checked(checks, &video.state);
    }
}
