//! Carrying a [`Logger`] inside a [`Context`].
//!
//! The logger lives in a slot keyed by a private type, so only these functions can
//! read or replace it.

use ctxlog_core::{CancelHandle, Context};

use crate::logger::Logger;

/// Private slot type for the context-carried logger.
struct LoggerSlot(Logger);

/// Returns a context derived from `ctx` that carries `logger`.
pub fn into_context(ctx: &Context, logger: Logger) -> Context {
    ctx.with_value(LoggerSlot(logger))
}

/// Returns the logger carried by `ctx`.
///
/// Accepts `&Context` or `None`. When there is no context, or the context carries no
/// logger, a new [`Logger::default`] is returned. Never fails.
pub fn from_context<'a>(ctx: impl Into<Option<&'a Context>>) -> Logger {
    ctx.into()
        .and_then(|ctx| ctx.value::<LoggerSlot>())
        .map(|slot| slot.0.clone())
        .unwrap_or_default()
}

/// Returns a cancellable child of `parent` carrying the parent's logger (or a
/// default one), plus the handle that cancels it.
#[must_use = "dropping the handle cancels the derived context"]
pub fn new_context_with_logger(parent: &Context) -> (Context, CancelHandle) {
    let (ctx, cancel) = parent.with_cancel();
    (into_context(&ctx, from_context(parent)), cancel)
}

/// Returns true if `ctx` carries a logger.
pub fn has_logger(ctx: &Context) -> bool {
    ctx.value::<LoggerSlot>().is_some()
}
