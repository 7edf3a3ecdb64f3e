//! Conversation domain entities

use crate::core::model::Model;
use crate::tool::value_objects::ToolResult;
use crate::video::remote::RemoteVideo;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Author of a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One piece of a multimodal message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum MessagePart {
    Text(String),
    /// Reference to a video already uploaded to the provider
    Video { uri: String, mime_type: String },
    /// A tool call the model asked for
    ToolUse {
        id: Option<String>,
        name: String,
        input: HashMap<String, serde_json::Value>,
    },
    /// The answer to a previous `ToolUse`
    ToolResult {
        id: Option<String>,
        name: String,
        content: String,
        is_error: bool,
    },
}

impl MessagePart {
    pub fn video(video: &RemoteVideo) -> Self {
        MessagePart::Video {
            uri: video.uri.clone(),
            mime_type: video.mime_type.clone(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessagePart::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// A message in a conversation (Entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub parts: Vec<MessagePart>,
}

impl Message {
    pub fn user(parts: Vec<MessagePart>) -> Self {
        Self {
            role: Role::User,
            parts,
        }
    }

    pub fn model(parts: Vec<MessagePart>) -> Self {
        Self {
            role: Role::Model,
            parts,
        }
    }

    /// User turn carrying the results of the model's tool calls.
    pub fn tool_results<'a>(
        results: impl IntoIterator<Item = (Option<String>, &'a ToolResult)>,
    ) -> Self {
        let parts = results
            .into_iter()
            .map(|(id, result)| MessagePart::ToolResult {
                id,
                name: result.tool_name.clone(),
                content: result.content_for_model(),
                is_error: !result.is_success(),
            })
            .collect();
        Self::user(parts)
    }

    pub fn videos(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().filter_map(|p| match p {
            MessagePart::Video { uri, .. } => Some(uri.as_str()),
            _ => None,
        })
    }
}

/// The full exchange with the model for one analysis (Entity)
#[derive(Debug, Clone)]
pub struct Conversation {
    model: Model,
    system_instruction: Option<String>,
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            system_instruction: None,
            messages: Vec::new(),
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn system_instruction(&self) -> Option<&str> {
        self.system_instruction.as_deref()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::value_objects::ToolError;
    use crate::video::remote::RemoteFileState;

    #[test]
    fn test_video_part_from_remote() {
        let video = RemoteVideo::new(
            "files/abc",
            "https://example.test/files/abc",
            "video/mp4",
            RemoteFileState::Ready,
        );
        let message = Message::user(vec![
            MessagePart::video(&video),
            MessagePart::Text("prompt".to_string()),
        ]);

        assert_eq!(message.role, Role::User);
        assert_eq!(
            message.videos().collect::<Vec<_>>(),
            vec!["https://example.test/files/abc"]
        );
        assert_eq!(message.parts[1].as_text(), Some("prompt"));
    }

    #[test]
    fn test_tool_results_message() {
        let ok = ToolResult::success("web_search", "found");
        let failed = ToolResult::failure("web_search", ToolError::execution_failed("offline"));
        let message = Message::tool_results([
            (Some("c1".to_string()), &ok),
            (None, &failed),
        ]);

        assert_eq!(message.role, Role::User);
        assert_eq!(
            message.parts[0],
            MessagePart::ToolResult {
                id: Some("c1".to_string()),
                name: "web_search".to_string(),
                content: "found".to_string(),
                is_error: false,
            }
        );
        match &message.parts[1] {
            MessagePart::ToolResult { is_error, content, .. } => {
                assert!(*is_error);
                assert!(content.contains("offline"));
            }
            other => panic!("unexpected part: {:?}", other),
        }
    }

    #[test]
    fn test_conversation_accumulates() {
        let mut conversation =
            Conversation::new(Model::default()).with_system_instruction("Use markdown.");
        assert!(conversation.is_empty());

        conversation.push(Message::user(vec![MessagePart::Text("hi".to_string())]));
        conversation.push(Message::model(vec![MessagePart::Text("hello".to_string())]));

        assert_eq!(conversation.len(), 2);
        assert_eq!(conversation.system_instruction(), Some("Use markdown."));
        assert_eq!(conversation.model(), &Model::Gemini20FlashExp);
    }
}
