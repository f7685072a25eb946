//! Retry with Exponential Backoff
//!
//! Reusable backoff policy for operations that may be retried, such as
//! rate-limited HTTP lookups.

use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// Policy for retrying an operation with exponential backoff.
///
/// After failed attempt `k` (1-indexed) the policy waits
/// `base_delay * 2^(k-1)` before the next attempt. Delays carry no
/// jitter, so the total wait for a given attempt count is exact.
#[derive(Debug, Clone, Copy)]
pub struct BackoffPolicy {
    /// Maximum number of attempts, including the first one
    pub max_attempts: u32,
    /// Delay after the first failed attempt; doubles for each one after
    pub base_delay: Duration,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl BackoffPolicy {
    /// Run `operation` until it succeeds, fails with a non-retryable
    /// error, or exhausts the attempt budget.
    ///
    /// `is_retryable` decides which errors are worth another attempt;
    /// everything else returns to the caller immediately. When the budget
    /// runs out, the error of the final attempt is returned without a
    /// trailing wait.
    pub async fn run<T, E, F, Fut>(
        &self,
        operation_name: &str,
        is_retryable: impl Fn(&E) -> bool,
        mut operation: F,
    ) -> Result<T, E>
    where
        E: std::fmt::Display,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut attempt = 1;
        loop {
            match operation().await {
                Ok(value) => {
                    if attempt > 1 {
                        tracing::debug!(
                            "operation '{}' succeeded on attempt {}/{}",
                            operation_name,
                            attempt,
                            self.max_attempts
                        );
                    }
                    return Ok(value);
                }
                Err(e) if is_retryable(&e) && attempt < self.max_attempts => {
                    let delay = self.delay_for(attempt);
                    tracing::warn!(
                        "operation '{}' failed (attempt {}/{}): {}; retrying in {:?}",
                        operation_name,
                        attempt,
                        self.max_attempts,
                        e,
                        delay
                    );
                    sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Delay after the given failed attempt (1-indexed).
    fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::time::Instant;

    #[derive(Debug, PartialEq)]
    enum TestError {
        Retryable,
        Permanent,
    }

    impl std::fmt::Display for TestError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                TestError::Retryable => write!(f, "retryable failure"),
                TestError::Permanent => write!(f, "permanent failure"),
            }
        }
    }

    fn retryable(e: &TestError) -> bool {
        *e == TestError::Retryable
    }

    #[test]
    fn test_default_policy() {
        let policy = BackoffPolicy::default();
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.base_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_delays_double_per_attempt() {
        let policy = BackoffPolicy {
            max_attempts: 5,
            base_delay: Duration::from_millis(100),
        };

        assert_eq!(policy.delay_for(1), Duration::from_millis(100));
        assert_eq!(policy.delay_for(2), Duration::from_millis(200));
        assert_eq!(policy.delay_for(3), Duration::from_millis(400));
        assert_eq!(policy.delay_for(4), Duration::from_millis(800));
    }

    #[tokio::test]
    async fn test_run_success_first_try() {
        let policy = BackoffPolicy::default();
        let calls = AtomicU32::new(0);

        let result = policy
            .run("test_op", retryable, || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok::<_, TestError>(42) }
            })
            .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_waits_doubling_delays_before_success() {
        let policy = BackoffPolicy {
            max_attempts: 5,
            base_delay: Duration::from_secs(1),
        };
        let calls = AtomicU32::new(0);
        let start = Instant::now();

        let result = policy
            .run("test_op", retryable, || {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n < 2 {
                        Err(TestError::Retryable)
                    } else {
                        Ok(7)
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        // Two failed attempts wait 1s then 2s on the paused clock
        assert_eq!(start.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_exhausts_attempts() {
        let policy = BackoffPolicy {
            max_attempts: 5,
            base_delay: Duration::from_secs(1),
        };
        let calls = AtomicU32::new(0);
        let start = Instant::now();

        let result: Result<(), _> = policy
            .run("test_op", retryable, || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(TestError::Retryable) }
            })
            .await;

        assert_eq!(result.unwrap_err(), TestError::Retryable);
        assert_eq!(calls.load(Ordering::SeqCst), 5);
        // Four waits between five attempts: 1 + 2 + 4 + 8 seconds
        assert_eq!(start.elapsed(), Duration::from_secs(15));
    }

    #[tokio::test]
    async fn test_run_non_retryable_returns_immediately() {
        let policy = BackoffPolicy::default();
        let calls = AtomicU32::new(0);

        let result: Result<(), _> = policy
            .run("test_op", retryable, || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(TestError::Permanent) }
            })
            .await;

        assert_eq!(result.unwrap_err(), TestError::Permanent);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_run_single_attempt_budget_never_sleeps() {
        let policy = BackoffPolicy {
            max_attempts: 1,
            base_delay: Duration::from_secs(3600),
        };
        let calls = AtomicU32::new(0);

        let result: Result<(), _> = policy
            .run("test_op", retryable, || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(TestError::Retryable) }
            })
            .await;

        assert_eq!(result.unwrap_err(), TestError::Retryable);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
