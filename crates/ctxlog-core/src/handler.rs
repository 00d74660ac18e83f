//! Handler trait.

use std::fmt;
use std::sync::Arc;

use crate::attr::Attr;
use crate::context::Context;
use crate::error::Result;
use crate::level::Level;
use crate::record::Record;

/// Backend responsible for formatting and writing records.
///
/// Handlers are shared between threads and never mutated after construction:
/// [`with_attrs`](Handler::with_attrs) returns a new handler instead.
pub trait Handler: Send + Sync + fmt::Debug {
    /// Reports whether records at `level` would be written.
    fn enabled(&self, ctx: &Context, level: Level) -> bool;

    /// Formats and writes one record.
    fn handle(&self, ctx: &Context, record: &Record) -> Result<()>;

    /// Returns a handler that prepends `attrs` to every record it writes.
    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler>;
}

impl<H: Handler + ?Sized> Handler for Arc<H> {
    fn enabled(&self, ctx: &Context, level: Level) -> bool {
        (**self).enabled(ctx, level)
    }

    fn handle(&self, ctx: &Context, record: &Record) -> Result<()> {
        (**self).handle(ctx, record)
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler> {
        (**self).with_attrs(attrs)
    }
}
