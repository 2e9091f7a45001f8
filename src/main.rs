//! Service entry point.
//!
//! Startup order: logging, config, store handle, listener, serve.
//! Fail fast: any startup error is fatal. The Redis handle itself is
//! lazy, so an unreachable store does not prevent boot; it surfaces per
//! request through the retry path.

use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;

use hit_counter::config::{self, AppConfig};
use hit_counter::counter::{HitCounter, RedisStore};
use hit_counter::http::HttpServer;
use hit_counter::lifecycle::{signals, Shutdown};
use hit_counter::observability::logging;
use hit_counter::resilience::RetryPolicy;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional single argument: path to a TOML config file.
    let config = match std::env::args().nth(1) {
        Some(path) => config::load_config(Path::new(&path))?,
        None => AppConfig::default(),
    };

    logging::init(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        cache_host = %config.cache.host,
        cache_port = config.cache.port,
        retry_budget = config.retries.budget,
        backoff_ms = config.retries.backoff_ms,
        "Configuration loaded"
    );

    // Long-lived store handle, shared by every request.
    let store = Arc::new(RedisStore::new(&config.cache)?);
    let counter = Arc::new(HitCounter::new(
        store,
        RetryPolicy::from_config(&config.retries),
    ));

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(&config, counter);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
