//! Handler backends.
//!
//! - [`TextHandler`]: human-readable lines for terminals
//! - [`JsonHandler`]: one JSON object per line
//! - [`TracingHandler`]: forwards into the `tracing` ecosystem
//!
//! [`BaseHandler`] is what configuration-driven selection produces.

mod bridge;
mod json;
mod text;

pub use self::bridge::TracingHandler;
pub use self::json::JsonHandler;
pub use self::text::{KITCHEN, TextHandler};

use std::sync::Arc;

use ctxlog_core::{Attr, Context, Handler, Level, Record, Result};

/// Handler chosen from a [`LogConfig`](crate::LogConfig).
#[derive(Debug, Clone)]
pub enum BaseHandler {
    Text(TextHandler),
    Json(JsonHandler),
}

impl BaseHandler {
    /// Minimum level the selected handler writes.
    pub fn level(&self) -> Level {
        match self {
            BaseHandler::Text(h) => h.level(),
            BaseHandler::Json(h) => h.level(),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, BaseHandler::Text(_))
    }

    pub fn is_json(&self) -> bool {
        matches!(self, BaseHandler::Json(_))
    }
}

impl Handler for BaseHandler {
    fn enabled(&self, ctx: &Context, level: Level) -> bool {
        match self {
            BaseHandler::Text(h) => h.enabled(ctx, level),
            BaseHandler::Json(h) => h.enabled(ctx, level),
        }
    }

    fn handle(&self, ctx: &Context, record: &Record) -> Result<()> {
        match self {
            BaseHandler::Text(h) => h.handle(ctx, record),
            BaseHandler::Json(h) => h.handle(ctx, record),
        }
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler> {
        match self {
            BaseHandler::Text(h) => h.with_attrs(attrs),
            BaseHandler::Json(h) => h.with_attrs(attrs),
        }
    }
}

impl From<TextHandler> for BaseHandler {
    fn from(handler: TextHandler) -> Self {
        BaseHandler::Text(handler)
    }
}

impl From<JsonHandler> for BaseHandler {
    fn from(handler: JsonHandler) -> Self {
        BaseHandler::Json(handler)
    }
}
