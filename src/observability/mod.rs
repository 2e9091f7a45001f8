//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; the request path is covered by
//!   tower-http's TraceLayer, the retry path logs its own attempts
//! - No metrics endpoint; the service's one interesting number already
//!   lives in the external store

pub mod logging;
