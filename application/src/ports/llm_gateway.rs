//! LLM Gateway port
//!
//! Defines the interface for communicating with the multimodal model.

use async_trait::async_trait;
use summarizer_domain::{Conversation, LlmResponse, ToolSpec};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Response blocked: {0}")]
    Blocked(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for model communication
///
/// Sends the whole conversation each time; the provider keeps no state
/// between calls. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Generate the next model turn. `tools` may be empty.
    async fn generate(
        &self,
        conversation: &Conversation,
        tools: &ToolSpec,
    ) -> Result<LlmResponse, GatewayError>;
}
