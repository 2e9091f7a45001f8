//! Resilience subsystem.
//!
//! # Design Decisions
//! - One policy only: bounded fixed-interval retry. No circuit breaker,
//!   no exponential backoff; the counter fetch is the single operation
//!   that can fail transiently and its policy is deliberately simple.

pub mod retries;

pub use retries::RetryPolicy;
