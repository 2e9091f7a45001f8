//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum router, tracing + timeout layers)
//!     → hello_handler (counter fetch, greeting body)
//!     → text/plain response to the client
//! ```

pub mod server;

pub use server::HttpServer;
