//! Processing-wait configuration from TOML (`[polling]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;
use summarizer_application::PollPolicy;

/// Raw polling configuration from TOML
///
/// # Example
///
/// ```toml
/// [polling]
/// initial_interval_ms = 1000
/// max_interval_ms = 10000
/// multiplier = 2.0
/// max_attempts = 120
/// timeout_seconds = 600
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePollingConfig {
    pub initial_interval_ms: u64,
    pub max_interval_ms: u64,
    pub multiplier: f64,
    /// State checks allowed, the upload response included
    pub max_attempts: u32,
    pub timeout_seconds: u64,
}

impl Default for FilePollingConfig {
    fn default() -> Self {
        let policy = PollPolicy::default();
        Self {
            initial_interval_ms: policy.initial_interval.as_millis() as u64,
            max_interval_ms: policy.max_interval.as_millis() as u64,
            multiplier: policy.multiplier,
            max_attempts: policy.max_attempts,
            timeout_seconds: policy.timeout.as_secs(),
        }
    }
}

impl FilePollingConfig {
    pub fn to_poll_policy(&self) -> PollPolicy {
        PollPolicy::default()
            .with_initial_interval(Duration::from_millis(self.initial_interval_ms))
            .with_max_interval(Duration::from_millis(self.max_interval_ms))
            .with_multiplier(self.multiplier)
            .with_max_attempts(self.max_attempts)
            .with_timeout(Duration::from_secs(self.timeout_seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_policy_defaults() {
        assert_eq!(
            FilePollingConfig::default().to_poll_policy(),
            PollPolicy::default()
        );
    }

    #[test]
    fn test_to_poll_policy() {
        let config = FilePollingConfig {
            initial_interval_ms: 250,
            max_interval_ms: 2000,
            multiplier: 1.5,
            max_attempts: 10,
            timeout_seconds: 60,
        };
        let policy = config.to_poll_policy();
        assert_eq!(policy.initial_interval, Duration::from_millis(250));
        assert_eq!(policy.max_interval, Duration::from_secs(2));
        assert_eq!(policy.max_attempts, 10);
        assert_eq!(policy.timeout, Duration::from_secs(60));
    }
}
