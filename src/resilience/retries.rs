//! Retry logic for the counter fetch.
//!
//! # Responsibilities
//! - Execute an operation with a bounded retry budget
//! - Pause a fixed interval between attempts (no backoff growth, no
//!   jitter)
//! - Retry connection-class failures only
//!
//! # Design Decisions
//! - The budget is per invocation of `run`, never shared across calls,
//!   so concurrent requests cannot starve each other of retries
//! - Any connection failure is treated identically; error subtypes are
//!   not distinguished
//! - Budget is decremented on every connection failure and the error
//!   propagates once it reaches zero: budget 5 means the 5th
//!   consecutive failure is final (4 pauses, 5 attempts)

use std::future::Future;
use std::time::Duration;

use crate::config::RetryConfig;
use crate::counter::store::StoreError;

/// Fixed-interval retry policy for store operations.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Connection failures tolerated before giving up.
    pub budget: u32,
    /// Pause between attempts.
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn new(budget: u32, backoff: Duration) -> Self {
        Self { budget, backoff }
    }

    pub fn from_config(config: &RetryConfig) -> Self {
        Self::new(config.budget, Duration::from_millis(config.backoff_ms))
    }

    /// Run `op`, retrying connection-class failures until the budget is
    /// spent. Non-connection failures propagate immediately.
    pub async fn run<T, F, Fut>(&self, mut op: F) -> Result<T, StoreError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, StoreError>>,
    {
        let mut remaining = self.budget;
        let mut attempt: u32 = 1;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_connection() => {
                    remaining = remaining.saturating_sub(1);
                    if remaining == 0 {
                        tracing::warn!(
                            attempts = attempt,
                            error = %err,
                            "Retry budget exhausted"
                        );
                        return Err(err);
                    }
                    tracing::info!(
                        attempt = attempt,
                        remaining = remaining,
                        delay = ?self.backoff,
                        "Retrying after connection error"
                    );
                    tokio::time::sleep(self.backoff).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
