//! Retry policies for HTTP requests.

use std::time::Duration;

use crate::error::SdkError;

/// Retry policy for an HTTP request.
#[derive(Debug, Clone)]
pub enum RetryPolicy {
    /// Single attempt, no retries.
    None,
    /// The client-wide [`RetryConfig`]. Default for every endpoint: the
    /// backend treats the provisioning writes as idempotent upserts, so
    /// replaying them is safe.
    Standard,
    /// Request-specific retry settings.
    Custom(RetryConfig),
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::Standard
    }
}

/// Configuration for retry behavior.
///
/// A failed attempt is anything short of a success response with a fully
/// delivered body: transport errors, per-attempt timeouts and non-2xx
/// responses are all retried until `max_attempts` is exhausted. Delays double after each failure and are
/// deterministic, so a sequence of failures sleeps `base_delay`,
/// `2 * base_delay`, `4 * base_delay`, ... capped at `max_delay`.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Total number of attempts, counting the first (must be >= 1).
    pub max_attempts: u32,
    /// Delay slept after the first failed attempt.
    pub base_delay: Duration,
    /// Upper bound on any single delay.
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each failed attempt.
    pub backoff_factor: f64,
    /// Deadline for each individual attempt.
    pub attempt_timeout: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(30),
            backoff_factor: 2.0,
            attempt_timeout: Duration::from_secs(10),
        }
    }
}

impl RetryConfig {
    /// Reject configs that could never issue a request.
    pub fn validate(&self) -> Result<(), SdkError> {
        if self.max_attempts == 0 {
            return Err(SdkError::Validation(
                "retry max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Delay slept after failed attempt `attempt` (1-indexed).
    pub fn delay_after_attempt(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        let base = self.base_delay.as_millis() as f64 * self.backoff_factor.powi(exponent as i32);
        let capped = base.min(self.max_delay.as_millis() as f64);
        Duration::from_millis(capped as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_policy_default_is_standard() {
        assert!(matches!(RetryPolicy::default(), RetryPolicy::Standard));
    }

    #[test]
    fn test_retry_config_delays_double() {
        let config = RetryConfig {
            max_attempts: 4,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(30),
            backoff_factor: 2.0,
            attempt_timeout: Duration::from_secs(10),
        };
        assert_eq!(config.delay_after_attempt(1).as_millis(), 500);
        assert_eq!(config.delay_after_attempt(2).as_millis(), 1000);
        assert_eq!(config.delay_after_attempt(3).as_millis(), 2000);
    }

    #[test]
    fn test_retry_config_delay_caps_at_max() {
        let config = RetryConfig {
            max_attempts: 8,
            base_delay: Duration::from_millis(1000),
            max_delay: Duration::from_millis(2000),
            backoff_factor: 10.0,
            attempt_timeout: Duration::from_secs(10),
        };
        assert_eq!(config.delay_after_attempt(4).as_millis(), 2000);
    }

    #[test]
    fn test_retry_config_zero_attempts_rejected() {
        let config = RetryConfig {
            max_attempts: 0,
            ..RetryConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SdkError::Validation(_))
        ));
        assert!(RetryConfig::default().validate().is_ok());
    }
}
