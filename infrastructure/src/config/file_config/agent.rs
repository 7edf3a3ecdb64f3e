//! Agent configuration from TOML (`[agent]` section)

use serde::{Deserialize, Serialize};
use summarizer_domain::{AgentProfile, Model};

/// Raw agent configuration from TOML
///
/// # Example
///
/// ```toml
/// [agent]
/// name = "Video AI Summarizer"
/// markdown = true
/// max_tool_turns = 5
/// web_search = true
/// max_search_results = 5
/// ```
///
/// The model is chosen in the `[gemini]` section, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentConfig {
    pub name: String,
    /// Ask for Markdown-formatted answers
    pub markdown: bool,
    /// Tool-call rounds before the agent must answer
    pub max_tool_turns: usize,
    /// Offer the `web_search` tool
    pub web_search: bool,
    /// Hits returned per search
    pub max_search_results: usize,
}

impl Default for FileAgentConfig {
    fn default() -> Self {
        let profile = AgentProfile::default();
        Self {
            name: profile.name,
            markdown: profile.markdown,
            max_tool_turns: profile.max_tool_turns,
            web_search: profile.web_search,
            max_search_results: 5,
        }
    }
}

impl FileAgentConfig {
    pub fn to_profile(&self, model: Model) -> AgentProfile {
        AgentProfile {
            name: self.name.clone(),
            model,
            markdown: self.markdown,
            web_search: self.web_search,
            max_tool_turns: self.max_tool_turns,
        }
    }
}
