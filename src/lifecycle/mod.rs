//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Init logging → Load config → Build store + fetcher → Bind → Serve
//!
//! Shutdown:
//!     SIGTERM/SIGINT (signals.rs)
//!         → Shutdown::trigger (shutdown.rs)
//!         → server drains connections and exits
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
