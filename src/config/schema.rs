//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! service. All types derive Serde traits for deserialization from config
//! files, and every field has a default so a minimal (or absent) config
//! file still yields a runnable service.

use serde::{Deserialize, Serialize};

/// Root configuration for the hit-counter service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Counter cache (Redis) settings.
    pub cache: CacheConfig,

    /// Retry policy for the counter fetch.
    pub retries: RetryConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Counter cache configuration.
///
/// The counter lives in an external Redis instance; this service only
/// holds a client handle to it.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Redis hostname. "redis" matches the service name in a typical
    /// compose file; use a real hostname outside of one.
    pub host: String,

    /// Redis port.
    pub port: u16,

    /// Name of the counter key to increment.
    pub key: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            host: "redis".to_string(),
            port: 6379,
            key: "hits".to_string(),
        }
    }
}

/// Retry configuration for the counter fetch.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Connection failures tolerated per fetch before the error is
    /// propagated to the caller.
    pub budget: u32,

    /// Fixed pause between attempts in milliseconds. No jitter, no
    /// exponential growth.
    pub backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            budget: 5,
            backoff_ms: 500,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    /// Must exceed the worst-case retry wait (budget x backoff).
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
