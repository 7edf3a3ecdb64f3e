//! Application layer for video-summarizer
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod staging;
pub mod use_cases;

// Re-export commonly used types
pub use config::PollPolicy;
pub use ports::{
    analysis_logger::{AnalysisEvent, AnalysisLogger, NoAnalysisLogger},
    llm_gateway::{GatewayError, LlmGateway},
    media_store::{MediaError, MediaStore},
    progress::{AnalysisProgress, AnalysisStage, NoProgress},
    tool_executor::{NoTools, ToolExecutorPort},
};
pub use staging::StagedVideo;
pub use use_cases::analyze_video::{
    AnalysisOutcome, AnalyzeVideoError, AnalyzeVideoInput, AnalyzeVideoUseCase,
};
pub use use_cases::await_processing::{ProcessedVideo, await_processing};
pub use use_cases::run_agent::{AgentReply, RunAgentError, VideoAgent};
