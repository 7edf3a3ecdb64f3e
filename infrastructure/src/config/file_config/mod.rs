//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types
//! (`PollPolicy`, `AgentProfile`) at wiring time.

mod agent;
mod gemini;
mod logging;
mod polling;
mod server;

pub use agent::FileAgentConfig;
pub use gemini::{DEFAULT_BASE_URL, FileGeminiConfig};
pub use logging::FileLoggingConfig;
pub use polling::FilePollingConfig;
pub use server::FileServerConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from validating a loaded configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    #[error("{field} cannot be 0")]
    Zero { field: &'static str },

    #[error("polling.multiplier must be at least 1.0 (got {0})")]
    InvalidMultiplier(f64),

    #[error("polling.initial_interval_ms ({initial}) exceeds polling.max_interval_ms ({max})")]
    IntervalOrder { initial: u64, max: u64 },

    #[error("gemini.model cannot be empty")]
    EmptyModelName,

    #[error("gemini.base_url must start with http:// or https:// (got {0})")]
    InvalidBaseUrl(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gemini endpoint and model
    pub gemini: FileGeminiConfig,
    /// Processing-wait backoff
    pub polling: FilePollingConfig,
    /// Agent behaviour
    pub agent: FileAgentConfig,
    /// Web server
    pub server: FileServerConfig,
    /// Analysis transcript
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let zero_checks: [(&'static str, bool); 4] = [
            ("gemini.timeout_seconds", self.gemini.timeout_seconds == 0),
            ("polling.max_attempts", self.polling.max_attempts == 0),
            ("polling.timeout_seconds", self.polling.timeout_seconds == 0),
            ("agent.max_search_results", self.agent.max_search_results == 0),
        ];
        if let Some(&(field, _)) = zero_checks.iter().find(|(_, zero)| *zero) {
            return Err(ConfigValidationError::Zero { field });
        }

        if self.polling.multiplier.is_nan() || self.polling.multiplier < 1.0 {
            return Err(ConfigValidationError::InvalidMultiplier(
                self.polling.multiplier,
            ));
        }

        if self.polling.initial_interval_ms > self.polling.max_interval_ms {
            return Err(ConfigValidationError::IntervalOrder {
                initial: self.polling.initial_interval_ms,
                max: self.polling.max_interval_ms,
            });
        }

        if self.gemini.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        let base_url = self.gemini.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigValidationError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use summarizer_domain::Model;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[gemini]
model = "gemini-2.5-flash"
timeout_seconds = 60

[polling]
initial_interval_ms = 500
max_interval_ms = 4000
multiplier = 1.5
max_attempts = 30
timeout_seconds = 120

[agent]
name = "Clip Explainer"
markdown = false
web_search = false

[server]
bind = "0.0.0.0:9000"
staging_dir = "/var/tmp/uploads"

[logging]
analysis_log = "analysis.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.parse_model(), Model::Gemini25Flash);
        assert_eq!(config.gemini.base_url, DEFAULT_BASE_URL);
        assert_eq!(
            config.polling.to_poll_policy().initial_interval,
            Duration::from_millis(500)
        );
        assert_eq!(config.agent.name, "Clip Explainer");
        assert!(!config.agent.web_search);
        assert_eq!(config.agent.max_tool_turns, 5);
        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert!(config.logging.analysis_log.is_some());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: FileConfig = toml::from_str("[server]\nbind = \"127.0.0.1:3000\"\n").unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:3000");
        assert_eq!(config.gemini, FileGeminiConfig::default());
        assert_eq!(config.polling, FilePollingConfig::default());
    }

    #[test]
    fn test_validate_default_config() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let config: FileConfig = toml::from_str("[gemini]\ntimeout_seconds = 0\n").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::Zero {
                field: "gemini.timeout_seconds"
            })
        );
    }

    #[test]
    fn test_validate_zero_attempts() {
        let config: FileConfig = toml::from_str("[polling]\nmax_attempts = 0\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::Zero {
                field: "polling.max_attempts"
            })
        ));
    }

    #[test]
    fn test_validate_multiplier_below_one() {
        let config: FileConfig = toml::from_str("[polling]\nmultiplier = 0.5\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidMultiplier(_))
        ));
    }

    #[test]
    fn test_validate_empty_model_name() {
        let config: FileConfig = toml::from_str("[gemini]\nmodel = \"  \"\n").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::EmptyModelName)
        );
    }
}
