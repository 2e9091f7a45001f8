//! Counter subsystem.
//!
//! # Data Flow
//! ```text
//! handler calls fetch_and_increment("hits")
//!     → fetcher.rs (retry loop around the store call)
//!     → store.rs trait (seam for tests)
//!     → redis.rs (INCR against the external instance)
//!     → post-increment value back to the handler
//! ```
//!
//! # Design Decisions
//! - The counter is owned by the external store, never by this process;
//!   nothing here caches or falls back to a last-known value
//! - The store trait exists so tests can script connection failures
//!   without a Redis instance

pub mod fetcher;
pub mod redis;
pub mod store;

pub use fetcher::HitCounter;
pub use redis::RedisStore;
pub use store::{CounterStore, StoreError};
