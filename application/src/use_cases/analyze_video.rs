//! Analyze Video use case
//!
//! Validates the query, uploads the staged video, waits for the provider to
//! finish processing it, runs the agent, and removes the local copy no matter
//! how the analysis ended.

use super::await_processing::await_processing;
use super::run_agent::{RunAgentError, VideoAgent};
use crate::config::PollPolicy;
use crate::ports::analysis_logger::{AnalysisEvent, AnalysisLogger, NoAnalysisLogger};
use crate::ports::media_store::{MediaError, MediaStore};
use crate::ports::progress::{AnalysisProgress, AnalysisStage};
use crate::staging::StagedVideo;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};
use summarizer_domain::{AnalysisPromptTemplate, AnalysisQuery, DomainError};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Errors that can occur during an analysis
#[derive(Error, Debug)]
pub enum AnalyzeVideoError {
    #[error("{0}")]
    EmptyQuery(DomainError),

    #[error("upload failed: {0}")]
    Upload(#[source] MediaError),

    #[error("could not refresh state of {name}: {source}")]
    Poll {
        name: String,
        #[source]
        source: MediaError,
    },

    #[error("video processing failed for {name}{}", reason_suffix(.reason))]
    ProcessingFailed {
        name: String,
        reason: Option<String>,
    },

    #[error("unexpected processing state {state} for {name}")]
    UnknownProcessingState { name: String, state: String },

    #[error("video {name} still processing after {attempts} checks ({elapsed:?})")]
    ProcessingTimedOut {
        name: String,
        attempts: u32,
        elapsed: Duration,
    },

    #[error("analysis cancelled during {stage}")]
    Cancelled { stage: AnalysisStage },

    #[error("agent failed: {0}")]
    Agent(#[from] RunAgentError),
}

fn reason_suffix(reason: &Option<String>) -> String {
    reason
        .as_deref()
        .map(|r| format!(": {}", r))
        .unwrap_or_default()
}

impl AnalyzeVideoError {
    /// The step that failed, `None` for input validation.
    pub fn stage(&self) -> Option<AnalysisStage> {
        match self {
            AnalyzeVideoError::EmptyQuery(_) => None,
            AnalyzeVideoError::Upload(_) => Some(AnalysisStage::Upload),
            AnalyzeVideoError::Poll { .. }
            | AnalyzeVideoError::ProcessingFailed { .. }
            | AnalyzeVideoError::UnknownProcessingState { .. }
            | AnalyzeVideoError::ProcessingTimedOut { .. } => Some(AnalysisStage::Processing),
            AnalyzeVideoError::Cancelled { stage } => Some(*stage),
            AnalyzeVideoError::Agent(_) => Some(AnalysisStage::Agent),
        }
    }

    /// Input problems are shown as warnings rather than errors.
    pub fn is_warning(&self) -> bool {
        matches!(self, AnalyzeVideoError::EmptyQuery(_))
    }

    /// Text shown to the user.
    pub fn user_message(&self) -> String {
        if self.is_warning() {
            self.to_string()
        } else {
            format!("An error occurred during analysis: {}", self)
        }
    }
}

/// Input for the AnalyzeVideo use case
#[derive(Debug)]
pub struct AnalyzeVideoInput {
    pub video: StagedVideo,
    /// Raw query text, validated by the use case
    pub query: String,
}

impl AnalyzeVideoInput {
    pub fn new(video: StagedVideo, query: impl Into<String>) -> Self {
        Self {
            video,
            query: query.into(),
        }
    }
}

/// Result of a successful analysis
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    /// Markdown answer from the agent
    pub answer: String,
    pub query: String,
    /// Provider resource name of the uploaded video
    pub remote_name: String,
    pub state_checks: u32,
    pub tool_calls: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub elapsed_ms: u64,
}

/// Use case for analyzing one video
pub struct AnalyzeVideoUseCase {
    media: Arc<dyn MediaStore>,
    agent: VideoAgent,
    policy: PollPolicy,
    logger: Arc<dyn AnalysisLogger>,
    cancellation: CancellationToken,
}

impl AnalyzeVideoUseCase {
    pub fn new(media: Arc<dyn MediaStore>, agent: VideoAgent) -> Self {
        Self {
            media,
            agent,
            policy: PollPolicy::default(),
            logger: Arc::new(NoAnalysisLogger),
            cancellation: CancellationToken::new(),
        }
    }

    pub fn with_poll_policy(mut self, policy: PollPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn AnalysisLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Run the analysis. The staged file is removed before this returns.
    pub async fn execute(
        &self,
        input: AnalyzeVideoInput,
        progress: &dyn AnalysisProgress,
    ) -> Result<AnalysisOutcome, AnalyzeVideoError> {
        let AnalyzeVideoInput { mut video, query } = input;
        let started = Instant::now();

        let result = self.run(&video, &query, progress).await;

        if let Err(e) = video.cleanup() {
            warn!(path = %video.path().display(), "Could not remove staged video: {}", e);
        }

        match &result {
            Ok(outcome) => {
                info!(
                    remote = %outcome.remote_name,
                    checks = outcome.state_checks,
                    "Analysis completed"
                );
                self.logger.log(AnalysisEvent::new(
                    "analysis_completed",
                    json!({
                        "remote_name": outcome.remote_name,
                        "state_checks": outcome.state_checks,
                        "tool_calls": outcome.tool_calls,
                        "elapsed_ms": outcome.elapsed_ms,
                    }),
                ));
            }
            Err(e) => {
                if e.is_warning() {
                    info!("Analysis rejected: {}", e);
                } else {
                    warn!("Analysis failed: {}", e);
                }
                self.logger.log(AnalysisEvent::new(
                    "analysis_failed",
                    json!({
                        "stage": e.stage().map(|s| s.as_str()),
                        "error": e.to_string(),
                        "elapsed_ms": started.elapsed().as_millis() as u64,
                    }),
                ));
            }
        }

        result
    }

    async fn run(
        &self,
        video: &StagedVideo,
        raw_query: &str,
        progress: &dyn AnalysisProgress,
    ) -> Result<AnalysisOutcome, AnalyzeVideoError> {
        let started = Instant::now();
        let query = AnalysisQuery::parse(raw_query).map_err(AnalyzeVideoError::EmptyQuery)?;

        // Upload
        progress.on_stage_start(AnalysisStage::Upload);
        let uploaded = tokio::select! {
            biased;
            _ = self.cancellation.cancelled() => Err(AnalyzeVideoError::Cancelled { stage: AnalysisStage::Upload }),
            result = self.media.upload(video.path(), video.format(), video.display_name()) => {
                result.map_err(AnalyzeVideoError::Upload)
            }
        };
        progress.on_stage_complete(AnalysisStage::Upload, uploaded.is_ok());
        let uploaded = uploaded?;
        info!(name = %uploaded.name, state = %uploaded.state, "Video uploaded");
        self.logger.log(AnalysisEvent::new(
            "video_uploaded",
            json!({
                "display_name": video.display_name(),
                "remote_name": uploaded.name,
                "mime_type": uploaded.mime_type,
                "state": uploaded.state.as_str(),
            }),
        ));

        // Processing
        progress.on_stage_start(AnalysisStage::Processing);
        let processed = await_processing(
            self.media.as_ref(),
            uploaded,
            &self.policy,
            &self.cancellation,
            progress,
        )
        .await;
        progress.on_stage_complete(AnalysisStage::Processing, processed.is_ok());
        let processed = processed?;
        self.logger.log(AnalysisEvent::new(
            "video_ready",
            json!({
                "remote_name": processed.video.name,
                "state_checks": processed.state_checks,
            }),
        ));

        // Agent
        progress.on_stage_start(AnalysisStage::Agent);
        let prompt = AnalysisPromptTemplate::analysis_prompt(&query);
        let reply = tokio::select! {
            biased;
            _ = self.cancellation.cancelled() => Err(AnalyzeVideoError::Cancelled { stage: AnalysisStage::Agent }),
            result = self.agent.run(&prompt, &processed.video, progress, self.logger.as_ref()) => {
                result.map_err(AnalyzeVideoError::from)
            }
        };
        progress.on_stage_complete(AnalysisStage::Agent, reply.is_ok());
        let reply = reply?;

        Ok(AnalysisOutcome {
            answer: reply.text,
            query: query.into_content(),
            remote_name: processed.video.name,
            state_checks: processed.state_checks,
            tool_calls: reply.tool_calls,
            model: reply.model,
            elapsed_ms: started.elapsed().as_millis() as u64,
        })
    }
}
