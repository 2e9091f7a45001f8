//! Resilient counter fetcher.
//!
//! # Responsibilities
//! - Increment the hit counter through the store
//! - Apply the retry policy to connection-class failures
//!
//! # Design Decisions
//! - Holds the long-lived store handle; constructed once at startup and
//!   shared with every request via the server state
//! - One successful increment per logical call: a failed attempt never
//!   half-applies (INCR is atomic on the store side), so retrying a
//!   connection failure cannot double-count

use std::sync::Arc;

use crate::counter::store::{CounterStore, StoreError};
use crate::resilience::RetryPolicy;

/// Increments a named counter in the external store, retrying transient
/// connection failures.
pub struct HitCounter {
    store: Arc<dyn CounterStore>,
    policy: RetryPolicy,
}

impl HitCounter {
    pub fn new(store: Arc<dyn CounterStore>, policy: RetryPolicy) -> Self {
        Self { store, policy }
    }

    /// Atomically increment `name` and return the post-increment value.
    ///
    /// Connection failures are retried per the policy; any other store
    /// failure propagates unchanged on the first occurrence.
    pub async fn fetch_and_increment(&self, name: &str) -> Result<i64, StoreError> {
        let store = self.store.clone();
        let key = name.to_string();
        self.policy
            .run(move || {
                let store = store.clone();
                let key = key.clone();
                async move { store.increment(&key).await }
            })
            .await
    }

    /// Probe the store for reachability.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }
}
