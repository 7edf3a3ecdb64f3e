//! Structured model responses.
//!
//! A reply is a list of content blocks mixing text and tool-use requests.
//! When the reply carries tool calls, the caller executes them and sends the
//! results back before asking again.

use super::entities::{Message, MessagePart};
use crate::tool::entities::ToolCall;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single block of content within a model reply.
///
/// # Examples
///
/// ```
/// use summarizer_domain::session::response::ContentBlock;
///
/// let text = ContentBlock::Text("The clip shows a sunrise.".to_string());
/// assert!(text.as_text().is_some());
///
/// let tool = ContentBlock::ToolUse {
///     id: None,
///     name: "web_search".to_string(),
///     input: [("query".to_string(), serde_json::json!("sunrise timelapse"))]
///         .into_iter().collect(),
/// };
/// assert!(tool.as_text().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ContentBlock {
    Text(String),

    /// A function call requested by the model.
    ToolUse {
        /// Provider-assigned ID, when the provider issues one.
        id: Option<String>,
        name: String,
        input: HashMap<String, serde_json::Value>,
    },
}

impl ContentBlock {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Reason the model stopped generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Natural end of response. The model is done.
    EndTurn,
    /// The model wants tools executed and their results returned.
    ToolUse,
    /// Hit the token limit. The response may be truncated.
    MaxTokens,
    /// Blocked by the provider's safety filters.
    Safety,
    /// Provider-specific stop reason.
    Other(String),
}

/// A structured response from the model.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub stop_reason: Option<StopReason>,
    /// Model identifier (if returned by the API).
    pub model: Option<String>,
}

impl LlmResponse {
    /// Create a text-only response.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text(text.into())],
            stop_reason: Some(StopReason::EndTurn),
            model: None,
        }
    }

    /// Concatenate all `Text` content blocks into a single string.
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .filter_map(|b| b.as_text())
            .collect::<Vec<_>>()
            .join("")
    }

    /// Extract all `ToolUse` content blocks as `Vec<ToolCall>`.
    pub fn tool_calls(&self) -> Vec<ToolCall> {
        self.content
            .iter()
            .filter_map(|b| match b {
                ContentBlock::ToolUse { id, name, input } => {
                    Some(ToolCall::from_native(id.as_deref(), name, input.clone()))
                }
                _ => None,
            })
            .collect()
    }

    pub fn has_tool_calls(&self) -> bool {
        self.content
            .iter()
            .any(|b| matches!(b, ContentBlock::ToolUse { .. }))
    }

    /// The reply as a model turn, for appending to the conversation.
    pub fn to_message(&self) -> Message {
        let parts = self
            .content
            .iter()
            .map(|b| match b {
                ContentBlock::Text(text) => MessagePart::Text(text.clone()),
                ContentBlock::ToolUse { id, name, input } => MessagePart::ToolUse {
                    id: id.clone(),
                    name: name.clone(),
                    input: input.clone(),
                },
            })
            .collect();
        Message::model(parts)
    }
}
