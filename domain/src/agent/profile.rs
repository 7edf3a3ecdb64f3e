//! Agent profile value object

use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Static configuration of the video agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProfile {
    /// Display name, also used in the system instruction
    pub name: String,
    pub model: Model,
    /// Ask the model to answer in Markdown
    pub markdown: bool,
    /// Offer the web search tool to the model
    pub web_search: bool,
    /// Upper bound on tool-call rounds before the agent must answer
    pub max_tool_turns: usize,
}

impl Default for AgentProfile {
    fn default() -> Self {
        Self {
            name: "Video AI Summarizer".to_string(),
            model: Model::default(),
            markdown: true,
            web_search: true,
            max_tool_turns: 5,
        }
    }
}

impl AgentProfile {
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }
}
