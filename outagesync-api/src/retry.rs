//! Retry policy for outage API requests.
//!
//! Only HTTP 500 is retried. Client errors, other server errors, and
//! transport failures surface to the caller after a single attempt.

use std::time::Duration;

use reqwest::StatusCode;

/// Returns true if a response status should be retried.
///
/// The API reports transient faults as HTTP 500 exactly; every other
/// status is treated as final.
pub fn is_retriable_status(status: StatusCode) -> bool {
    status == StatusCode::INTERNAL_SERVER_ERROR
}

/// Backoff schedule applied when a request is answered with HTTP 500.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Additional attempts after the initial request.
    pub max_retries: u32,
    /// Delay before the first retry; doubles per retry after that.
    pub base_delay: Duration,
    /// Upper bound for any single delay.
    pub max_delay: Duration,
}

impl RetryPolicy {
    /// Creates a policy with the given number of additional attempts.
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(10),
        }
    }

    /// Disables retries.
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }

    /// Sets the base delay.
    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    /// Calculates the delay before the given retry (1-based), doubling per
    /// retry and capped at `max_delay`.
    pub fn delay_for_retry(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry.saturating_sub(1));
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

impl Default for RetryPolicy {
    /// Three additional attempts, matching the API's documented retry
    /// budget for HTTP 500.
    fn default() -> Self {
        Self::new(3)
    }
}

// ============================================================================
// Tests
// ============================================================================
