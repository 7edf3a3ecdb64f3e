//! Gemini API configuration from TOML (`[gemini]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;
use summarizer_domain::Model;

/// Default public endpoint of the Generative Language API
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Raw Gemini configuration from TOML
///
/// # Example
///
/// ```toml
/// [gemini]
/// model = "gemini-2.0-flash-exp"
/// base_url = "https://generativelanguage.googleapis.com"
/// timeout_seconds = 120
/// ```
///
/// The API key is never read from the file; it is entered per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Model identifier, with or without the `models/` prefix
    pub model: String,
    pub base_url: String,
    /// Timeout for each API call; the video body upload is not bounded
    pub timeout_seconds: u64,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            model: Model::default().to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 120,
        }
    }
}

impl FileGeminiConfig {
    pub fn parse_model(&self) -> Model {
        let Ok(model) = self.model.parse::<Model>();
        model
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
