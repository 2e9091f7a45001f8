//! HTTP server setup and handlers.
//!
//! # Responsibilities
//! - Create the Axum router with the hello and health handlers
//! - Wire up middleware (tracing, request timeout)
//! - Serve on a bound listener with graceful shutdown
//!
//! # Design Decisions
//! - The fetcher is shared state, cloned cheaply into every handler
//! - A fetch failure surfaces as a plain 500; there is no fallback
//!   count and no partial result

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::counter::{HitCounter, StoreError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub counter: Arc<HitCounter>,
    /// Counter key name, fixed per process.
    pub counter_key: Arc<str>,
}

/// HTTP server for the hit counter.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and fetcher.
    pub fn new(config: &AppConfig, counter: Arc<HitCounter>) -> Self {
        let state = AppState {
            counter,
            counter_key: config.cache.key.as_str().into(),
        };

        let router = Self::build_router(config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(hello_handler))
            .route("/health", get(health_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Fetch failure surfaced to the client.
struct FetchFailure(StoreError);

impl IntoResponse for FetchFailure {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Counter fetch failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

/// Root handler: bump the counter and greet with the new count.
async fn hello_handler(State(state): State<AppState>) -> Result<String, FetchFailure> {
    let count = state
        .counter
        .fetch_and_increment(&state.counter_key)
        .await
        .map_err(FetchFailure)?;

    tracing::debug!(count = count, "Serving greeting");

    Ok(format!(
        "Hello World! This is a docker compose tuto. I have been seen {} times.\n",
        count
    ))
}

/// Liveness probe: 200 when the store answers, 503 when it doesn't.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.counter.ping().await {
        Ok(()) => (StatusCode::OK, "ok\n"),
        Err(err) => {
            tracing::warn!(error = %err, "Health probe failed");
            (StatusCode::SERVICE_UNAVAILABLE, "counter store unreachable\n")
        }
    }
}
