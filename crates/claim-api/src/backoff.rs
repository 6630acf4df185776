//! Bounded retry policy for rate-limit responses.
//!
//! The service throttles with HTTP 429. Retries are capped at a fixed
//! attempt budget with exponential backoff plus jitter; once the budget
//! is spent the caller gets [`ApiError::RateLimited`] instead of looping
//! forever under sustained throttling.

use std::time::Duration;

use rand::Rng;

use crate::error::ApiError;

/// Total request attempts before giving up (initial try + 4 retries).
pub const MAX_ATTEMPTS: u32 = 5;

/// Delay before the first retry.
pub const BASE_DELAY: Duration = Duration::from_secs(2);

/// Hard ceiling on a single backoff delay.
pub const MAX_DELAY: Duration = Duration::from_secs(30);

/// Per-request retry state. Create one per logical request; call
/// [`Backoff::wait`] after each 429 before retrying.
#[derive(Debug)]
pub struct Backoff {
    attempt: u32,
    max_attempts: u32,
    base: Duration,
    cap: Duration,
}

impl Default for Backoff {
    fn default() -> Self {
        Self::new()
    }
}

impl Backoff {
    pub fn new() -> Self {
        Self::with_limits(MAX_ATTEMPTS, BASE_DELAY, MAX_DELAY)
    }

    pub fn with_limits(max_attempts: u32, base: Duration, cap: Duration) -> Self {
        Self {
            attempt: 0,
            max_attempts: max_attempts.max(1),
            base,
            cap,
        }
    }

    /// The deterministic delay before retry number `retry` (1-based),
    /// before jitter: base * 2^(retry-1), capped.
    fn delay_for_retry(&self, retry: u32) -> Duration {
        let factor = 1u32 << (retry - 1).min(16);
        self.base.saturating_mul(factor).min(self.cap)
    }

    /// Sleep before the next retry, or fail once the budget is spent.
    pub async fn wait(&mut self) -> Result<(), ApiError> {
        self.attempt += 1;
        if self.attempt >= self.max_attempts {
            return Err(ApiError::RateLimited);
        }

        let delay = self.delay_for_retry(self.attempt);
        // Up to 25% jitter so throttled callers don't retry in lockstep.
        let jitter = delay.mul_f64(rand::thread_rng().gen_range(0.0..0.25));
        tracing::debug!(
            "rate limited, retrying in {:?} (attempt {}/{})",
            delay + jitter,
            self.attempt + 1,
            self.max_attempts
        );
        tokio::time::sleep(delay + jitter).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn budget_exhaustion_yields_rate_limited() {
        let mut backoff = Backoff::with_limits(3, Duration::ZERO, Duration::ZERO);
        assert!(backoff.wait().await.is_ok());
        assert!(backoff.wait().await.is_ok());
        assert!(matches!(backoff.wait().await, Err(ApiError::RateLimited)));
    }

    #[tokio::test]
    async fn single_attempt_budget_never_waits() {
        let mut backoff = Backoff::with_limits(1, Duration::ZERO, Duration::ZERO);
        assert!(matches!(backoff.wait().await, Err(ApiError::RateLimited)));
    }

    #[test]
    fn delays_double_until_the_cap() {
        let backoff =
            Backoff::with_limits(10, Duration::from_secs(2), Duration::from_secs(30));
        assert_eq!(backoff.delay_for_retry(1), Duration::from_secs(2));
        assert_eq!(backoff.delay_for_retry(2), Duration::from_secs(4));
        assert_eq!(backoff.delay_for_retry(3), Duration::from_secs(8));
        assert_eq!(backoff.delay_for_retry(4), Duration::from_secs(16));
        assert_eq!(backoff.delay_for_retry(5), Duration::from_secs(30));
        assert_eq!(backoff.delay_for_retry(9), Duration::from_secs(30));
    }

    #[test]
    fn large_retry_numbers_do_not_overflow() {
        let backoff = Backoff::with_limits(100, Duration::from_secs(2), MAX_DELAY);
        assert_eq!(backoff.delay_for_retry(60), MAX_DELAY);
    }
}
