//! Poll policy: bounded exponential backoff for remote processing.
//!
//! The provider transcodes uploaded videos asynchronously. [`PollPolicy`]
//! decides how long to sleep between state checks and when to give up.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Backoff and ceiling parameters for the processing wait.
///
/// The delay after the `n`-th state check is
/// `initial_interval * multiplier^(n-1)`, capped at `max_interval`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollPolicy {
    /// Delay after the first state check.
    pub initial_interval: Duration,
    /// Growth factor applied to each subsequent delay (>= 1.0).
    pub multiplier: f64,
    /// Upper bound for a single delay.
    pub max_interval: Duration,
    /// Maximum number of state checks, the upload response included.
    pub max_attempts: u32,
    /// Overall budget for the wait.
    pub timeout: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            initial_interval: Duration::from_secs(1),
            multiplier: 2.0,
            max_interval: Duration::from_secs(10),
            max_attempts: 120,
            timeout: Duration::from_secs(600),
        }
    }
}

impl PollPolicy {
    // ==================== Builder Methods ====================

    pub fn with_initial_interval(mut self, interval: Duration) -> Self {
        self.initial_interval = interval;
        self
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier.max(1.0);
        self
    }

    pub fn with_max_interval(mut self, interval: Duration) -> Self {
        self.max_interval = interval;
        self
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fixed one-interval polling with no growth.
    pub fn fixed(interval: Duration) -> Self {
        Self::default()
            .with_initial_interval(interval)
            .with_max_interval(interval)
            .with_multiplier(1.0)
    }

    /// Delay to wait after the `check`-th state check (1-based).
    pub fn delay_after(&self, check: u32) -> Duration {
        let exponent = check.saturating_sub(1).min(64) as i32;
        let scaled = self.initial_interval.as_secs_f64() * self.multiplier.powi(exponent);
        let capped = scaled.min(self.max_interval.as_secs_f64());
        Duration::from_secs_f64(capped.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_starts_at_one_second() {
        let policy = PollPolicy::default();
        assert_eq!(policy.delay_after(1), Duration::from_secs(1));
        assert_eq!(policy.delay_after(2), Duration::from_secs(2));
        assert_eq!(policy.delay_after(3), Duration::from_secs(4));
    }

    #[test]
    fn test_delay_is_capped() {
        let policy = PollPolicy::default();
        assert_eq!(policy.delay_after(5), Duration::from_secs(10));
        assert_eq!(policy.delay_after(1000), Duration::from_secs(10));
    }

    #[test]
    fn test_fixed_policy() {
        let policy = PollPolicy::fixed(Duration::from_millis(250));
        for check in 1..10 {
            assert_eq!(policy.delay_after(check), Duration::from_millis(250));
        }
    }

    #[test]
    fn test_builders_clamp() {
        let policy = PollPolicy::default()
            .with_multiplier(0.5)
            .with_max_attempts(0);
        assert_eq!(policy.multiplier, 1.0);
        assert_eq!(policy.max_attempts, 1);
    }
}
