//! HTTP surface: a liveness check and the text annotation endpoint.
//!
//! The router is composable — `service_router()` returns a `Router` that
//! can be mounted on any axum server instance. `server` owns the bind →
//! spawn → graceful-shutdown lifecycle.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::service_router;
pub use server::{start_server, ApiServer, ServiceSession};
pub use types::ApiContext;
