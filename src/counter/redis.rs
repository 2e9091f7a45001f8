//! Redis-backed counter store.
//!
//! # Responsibilities
//! - Hold the process-wide Redis client handle
//! - Map Redis errors into the retry policy's two classes
//!
//! # Design Decisions
//! - The client is constructed once at startup and never torn down;
//!   connections are opened lazily per operation, so an unreachable
//!   Redis surfaces at request time, not at boot
//! - INCR atomicity is Redis's guarantee; nothing is coordinated here

use async_trait::async_trait;
use redis::AsyncCommands;

use crate::config::CacheConfig;
use crate::counter::store::{CounterStore, StoreError};

/// Counter store backed by a Redis instance.
pub struct RedisStore {
    client: redis::Client,
}

impl RedisStore {
    /// Create a store from cache config. Does not connect yet.
    pub fn new(config: &CacheConfig) -> Result<Self, StoreError> {
        let url = format!("redis://{}:{}/", config.host, config.port);
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        Ok(Self { client })
    }

    async fn connection(&self) -> Result<redis::aio::MultiplexedConnection, StoreError> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(map_redis_error)
    }
}

#[async_trait]
impl CounterStore for RedisStore {
    async fn increment(&self, key: &str) -> Result<i64, StoreError> {
        let mut conn = self.connection().await?;
        conn.incr(key, 1).await.map_err(map_redis_error)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        redis::cmd("PING")
            .query_async::<()>(&mut conn)
            .await
            .map_err(map_redis_error)
    }
}

/// Classify a Redis error for the retry policy.
///
/// Anything that signals the server was unreachable is connection-class;
/// server-side answers (type errors, protocol errors) are not.
fn map_redis_error(err: redis::RedisError) -> StoreError {
    if err.is_connection_refusal()
        || err.is_connection_dropped()
        || err.is_io_error()
        || err.is_timeout()
    {
        StoreError::Connection(err.to_string())
    } else {
        StoreError::Backend(err.to_string())
    }
}
