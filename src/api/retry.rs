//! Retrying fetcher with exponential backoff.
//!
//! A listing call is retried under exponential backoff while errors
//! classify as transient, bounded by a total elapsed budget. Permanent
//! errors abort immediately with no delay. When the budget runs out the
//! last observed error is surfaced.

use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::error::ErrorClass;

use super::client::ApiResult;

/// Total wall-clock budget across all attempts.
const MAX_ELAPSED: Duration = Duration::from_secs(30);

/// First backoff interval.
const INITIAL_INTERVAL: Duration = Duration::from_millis(500);

/// Growth factor between intervals.
const MULTIPLIER: f64 = 1.5;

/// Upper bound on a single backoff interval.
const MAX_INTERVAL: Duration = Duration::from_secs(5);

/// Exponential backoff policy for the retrying fetcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// First backoff interval.
    pub initial_interval: Duration,
    /// Growth factor applied after each attempt.
    pub multiplier: f64,
    /// Cap on a single interval.
    pub max_interval: Duration,
    /// Total elapsed budget; the contractual bound.
    pub max_elapsed: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            initial_interval: INITIAL_INTERVAL,
            multiplier: MULTIPLIER,
            max_interval: MAX_INTERVAL,
            max_elapsed: MAX_ELAPSED,
        }
    }
}

impl RetryPolicy {
    /// Creates a policy with a custom elapsed budget.
    #[must_use]
    pub fn with_max_elapsed(max_elapsed: Duration) -> Self {
        Self {
            max_elapsed,
            ..Self::default()
        }
    }

    /// The interval to sleep after the given zero-based attempt.
    #[must_use]
    pub fn interval_after(&self, attempt: u32) -> Duration {
        let scaled = self.initial_interval.as_secs_f64() * self.multiplier.powi(attempt as i32);
        Duration::from_secs_f64(scaled).min(self.max_interval)
    }
}

/// Invokes `operation` under the policy until it succeeds, fails
/// permanently, or the elapsed budget is exhausted.
///
/// # Errors
///
/// Returns the first permanent error, or the last transient error once
/// the budget runs out.
pub async fn retry_with_backoff<T, F, Fut>(policy: RetryPolicy, mut operation: F) -> ApiResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ApiResult<T>>,
{
    let started = Instant::now();
    let mut attempt: u32 = 0;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                if error.classify() == ErrorClass::Permanent {
                    debug!("Permanent API error, not retrying: {error}");
                    return Err(error);
                }

                let interval = policy.interval_after(attempt);
                let elapsed = started.elapsed();
                if elapsed + interval >= policy.max_elapsed {
                    warn!(
                        "Retry budget exhausted after {attempt} retries ({}s elapsed): {error}",
                        elapsed.as_secs()
                    );
                    return Err(error);
                }

                debug!(
                    "Transient API error (attempt {attempt}), retrying in {}ms: {error}",
                    interval.as_millis()
                );
                tokio::time::sleep(interval).await;
                attempt += 1;
            }
        }
    }
}
