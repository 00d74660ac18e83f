//! ctxlog - structured logging facade with context propagation
//!
//! This crate wraps a [`Handler`] behind a cheap-to-clone [`Logger`] and lets that
//! logger travel inside a request-scoped [`Context`].
//!
//! # Example
//!
//! ```
//! use ctxlog::{Context, LogConfig, Logger, Sink, args, from_context, into_context};
//!
//! let (sink, buffer) = Sink::buffer();
//! let config = LogConfig::from_vars("TEXT", "DEBUG");
//! let logger = Logger::with_handler(config.handler_with_sink(sink));
//!
//! let ctx = into_context(&Context::background(), logger);
//! from_context(&ctx).debug("cache miss", args!["key", "user:42"]);
//!
//! assert!(buffer.contents().contains("cache miss key=user:42"));
//! ```

pub mod config;
pub mod context;
pub mod handler;
pub mod logger;
pub mod sink;

pub use config::{LogConfig, LogFormat};
pub use context::{from_context, has_logger, into_context, new_context_with_logger};
pub use handler::{BaseHandler, JsonHandler, TextHandler, TracingHandler};
pub use logger::Logger;
pub use sink::{Buffer, Sink};

pub use ctxlog_core::{
    Attr, BAD_KEY, CancelHandle, Context, Handler, Level, LogError, Record, Result, Source,
    Value, args,
};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
