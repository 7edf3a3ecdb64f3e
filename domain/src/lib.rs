//! Domain layer for video-summarizer
//!
//! This crate contains the value objects and entities of a video analysis:
//! what may be uploaded, how the provider reports readiness, what the agent
//! is, and what it says back. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! - **Staged video**: an uploaded file in one of [`VideoFormat::ALL`]
//! - **Remote video**: the provider's handle, moving through [`RemoteFileState`]
//! - **Agent**: a multimodal [`Model`] plus optional web search ([`AgentProfile`])

pub mod agent;
pub mod core;
pub mod prompt;
pub mod session;
pub mod tool;
pub mod video;

// Re-export commonly used types
pub use agent::profile::AgentProfile;
pub use core::{credential::ApiKey, error::DomainError, model::Model, query::AnalysisQuery};
pub use prompt::AnalysisPromptTemplate;
pub use session::{
    entities::{Conversation, Message, MessagePart, Role},
    response::{ContentBlock, LlmResponse, StopReason},
};
pub use tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec},
    value_objects::{ToolError, ToolResult},
};
pub use video::{
    format::VideoFormat,
    remote::{RemoteFileState, RemoteVideo},
};
