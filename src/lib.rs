//! Hit-counter web service.
//!
//! A small HTTP service demonstrating container orchestration basics: a
//! web process that increments a counter held in a separate Redis
//! service, with bounded retry on connection failure.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────┐
//!                    │               HIT COUNTER                 │
//!                    │                                           │
//!   GET /            │  ┌─────────┐      ┌────────────────────┐ │
//!   ─────────────────┼─▶│  http   │─────▶│      counter       │ │
//!                    │  │ server  │      │ fetcher → store    │─┼──▶ Redis
//!   greeting + count │  └─────────┘      └─────────┬──────────┘ │    (INCR)
//!   ◀────────────────┼─────────────────────────────┘            │
//!                    │                                           │
//!                    │  ┌──────────────────────────────────────┐ │
//!                    │  │         Cross-Cutting Concerns        │ │
//!                    │  │  ┌────────┐ ┌──────────┐ ┌─────────┐ │ │
//!                    │  │  │ config │ │resilience│ │lifecycle│ │ │
//!                    │  │  └────────┘ └──────────┘ └─────────┘ │ │
//!                    │  └──────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod counter;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;
pub mod resilience;

pub use config::AppConfig;
pub use counter::{CounterStore, HitCounter, RedisStore, StoreError};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use resilience::RetryPolicy;
