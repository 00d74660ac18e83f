//! ctxlog Server - HTTP integration for ctxlog
//!
//! Provides the tower middleware that puts a [`Logger`](ctxlog::Logger) into every
//! request's [`Context`](ctxlog::Context), axum extractors to read it back, and a
//! small demo server wired with both.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod settings;

pub use extract::{RequestContext, RequestLogger, request_context};
pub use middleware::{AccessLogLayer, LoggerLayer, REQUEST_ID_HEADER, middleware};
pub use server::{create_router, serve};
pub use settings::ServerSettings;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
