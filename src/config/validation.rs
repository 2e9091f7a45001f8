//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (non-zero port, non-empty host/key)
//! - Check the retry policy stays inside the request timeout
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppConfig -> Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::AppConfig;

/// A single semantic violation found in a config.
#[derive(Debug)]
pub enum ValidationError {
    InvalidBindAddress(String),
    EmptyCacheHost,
    ZeroCachePort,
    EmptyCounterKey,
    ZeroRetryBudget,
    RetryWaitExceedsRequestTimeout { wait_ms: u64, timeout_ms: u64 },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "listener.bind_address '{}' is not a socket address", addr)
            }
            ValidationError::EmptyCacheHost => write!(f, "cache.host must not be empty"),
            ValidationError::ZeroCachePort => write!(f, "cache.port must not be 0"),
            ValidationError::EmptyCounterKey => write!(f, "cache.key must not be empty"),
            ValidationError::ZeroRetryBudget => write!(f, "retries.budget must be at least 1"),
            ValidationError::RetryWaitExceedsRequestTimeout { wait_ms, timeout_ms } => write!(
                f,
                "worst-case retry wait {}ms exceeds request timeout {}ms",
                wait_ms, timeout_ms
            ),
        }
    }
}

/// Validate a config, collecting every violation.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.cache.host.is_empty() {
        errors.push(ValidationError::EmptyCacheHost);
    }
    if config.cache.port == 0 {
        errors.push(ValidationError::ZeroCachePort);
    }
    if config.cache.key.is_empty() {
        errors.push(ValidationError::EmptyCounterKey);
    }

    if config.retries.budget == 0 {
        errors.push(ValidationError::ZeroRetryBudget);
    }

    // A request that spends its whole budget retrying must still fit
    // inside the request timeout, or the timeout layer masks the error.
    let wait_ms = u64::from(config.retries.budget) * config.retries.backoff_ms;
    let timeout_ms = config.timeouts.request_secs * 1000;
    if wait_ms >= timeout_ms {
        errors.push(ValidationError::RetryWaitExceedsRequestTimeout { wait_ms, timeout_ms });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
