//! Shared utilities for integration testing.

use std::sync::atomic::{AtomicI64, AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::net::TcpListener;

use hit_counter::config::AppConfig;
use hit_counter::counter::{CounterStore, HitCounter, StoreError};
use hit_counter::http::HttpServer;
use hit_counter::lifecycle::Shutdown;
use hit_counter::resilience::RetryPolicy;

/// In-memory counter store with a scriptable number of leading
/// connection failures. Every call is counted, failed or not.
pub struct MockStore {
    value: AtomicI64,
    failures_left: AtomicU32,
    attempts: AtomicU32,
    reachable: std::sync::atomic::AtomicBool,
}

impl MockStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            value: AtomicI64::new(0),
            failures_left: AtomicU32::new(0),
            attempts: AtomicU32::new(0),
            reachable: std::sync::atomic::AtomicBool::new(true),
        })
    }

    /// Preset the counter value, as if prior traffic had happened.
    pub fn set_value(&self, value: i64) {
        self.value.store(value, Ordering::SeqCst);
    }

    /// Fail the next `n` increment calls with connection errors.
    pub fn fail_next(&self, n: u32) {
        self.failures_left.store(n, Ordering::SeqCst);
    }

    /// Make ping (and nothing else) report unreachable.
    #[allow(dead_code)]
    pub fn set_reachable(&self, reachable: bool) {
        self.reachable.store(reachable, Ordering::SeqCst);
    }

    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn value(&self) -> i64 {
        self.value.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CounterStore for MockStore {
    async fn increment(&self, _key: &str) -> Result<i64, StoreError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        // Atomic claim: each scripted failure is consumed exactly once,
        // even with concurrent callers.
        let claimed_failure = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if claimed_failure {
            return Err(StoreError::Connection("connection refused".into()));
        }
        Ok(self.value.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        if self.reachable.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Connection("connection refused".into()))
        }
    }
}

/// Counter store that always answers with a non-connection error, like
/// Redis INCR on a key holding a string.
pub struct BrokenStore;

#[async_trait]
impl CounterStore for BrokenStore {
    async fn increment(&self, _key: &str) -> Result<i64, StoreError> {
        Err(StoreError::Backend(
            "value is not an integer or out of range".into(),
        ))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Spawn the HTTP server on an ephemeral port with the given store and a
/// short backoff so failure scenarios stay fast. Returns the base URL
/// and the shutdown handle.
#[allow(dead_code)]
pub async fn start_server(store: Arc<dyn CounterStore>) -> (String, Shutdown) {
    let config = AppConfig::default();
    // Real-time sleeps in integration tests; keep them short.
    let policy = RetryPolicy::new(config.retries.budget, std::time::Duration::from_millis(10));
    let counter = Arc::new(HitCounter::new(store, policy));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(&config, counter);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (format!("http://{}", addr), shutdown)
}
