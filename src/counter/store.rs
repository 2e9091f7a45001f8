//! Counter store trait and error classification.
//!
//! # Responsibilities
//! - Define the seam between the fetcher and the external key-value
//!   service
//! - Split store failures into the two classes the retry policy cares
//!   about: connection-class (retryable) and everything else
//!
//! # Design Decisions
//! - Trait object, not a concrete client: tests inject scripted stores
//! - Errors carry a message, not the backend error type, so mocks don't
//!   need to fabricate Redis errors

use async_trait::async_trait;
use thiserror::Error;

/// Failure from the counter store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store was unreachable (refused, dropped, timed out). The only
    /// class the retry policy will re-attempt.
    #[error("counter store unreachable: {0}")]
    Connection(String),

    /// The store answered with an error (e.g. the key holds a
    /// non-integer value). Never retried.
    #[error("counter store error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Whether this failure is connection-class and eligible for retry.
    pub fn is_connection(&self) -> bool {
        matches!(self, StoreError::Connection(_))
    }
}

/// External key-value service holding the counter.
///
/// The one capability this service needs is an atomic increment that
/// returns the post-increment value; `ping` exists for the health probe.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Atomically increment the named counter, returning the new value.
    /// The key is created at 0 by the store if it does not exist yet.
    async fn increment(&self, key: &str) -> Result<i64, StoreError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
