//! Bridge into the `tracing` ecosystem.

use std::sync::Arc;

use ctxlog_core::{Attr, Context, Handler, Level, Record, Result};

use super::text::write_value;

/// Forwards records as `tracing` events under the `ctxlog` target.
///
/// `tracing` has no Notice, Fatal or Panic levels: Notice becomes INFO, Fatal and
/// Panic become ERROR. The original level name is kept in the `severity` field and
/// attributes are rendered as `key=value` in the `attrs` field.
#[derive(Debug, Clone)]
pub struct TracingHandler {
    level: Level,
    attrs: Arc<[Attr]>,
}

impl TracingHandler {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            attrs: Arc::from(Vec::new()),
        }
    }

    fn render_attrs(&self, record: &Record) -> String {
        let mut out = Vec::new();
        for (i, attr) in self.attrs.iter().chain(record.attrs.iter()).enumerate() {
            if i > 0 {
                out.push(b' ');
            }
            out.extend_from_slice(attr.key.as_bytes());
            out.push(b'=');
            write_value(&mut out, &attr.value);
        }
        String::from_utf8_lossy(&out).into_owned()
    }
}

fn subscriber_enabled(level: Level) -> bool {
    match level {
        Level::Debug => tracing::enabled!(target: "ctxlog", tracing::Level::DEBUG),
        Level::Info | Level::Notice => tracing::enabled!(target: "ctxlog", tracing::Level::INFO),
        Level::Warn => tracing::enabled!(target: "ctxlog", tracing::Level::WARN),
        Level::Error | Level::Fatal | Level::Panic => {
            tracing::enabled!(target: "ctxlog", tracing::Level::ERROR)
        }
    }
}

impl Handler for TracingHandler {
    fn enabled(&self, _ctx: &Context, level: Level) -> bool {
        level >= self.level && subscriber_enabled(level)
    }

    fn handle(&self, _ctx: &Context, record: &Record) -> Result<()> {
        let attrs = self.render_attrs(record);
        let severity = record.level.as_str();
        let message = record.message.as_str();

        match record.level {
            Level::Debug => tracing::debug!(target: "ctxlog", severity, attrs = %attrs, "{message}"),
            Level::Info | Level::Notice => {
                tracing::info!(target: "ctxlog", severity, attrs = %attrs, "{message}")
            }
            Level::Warn => tracing::warn!(target: "ctxlog", severity, attrs = %attrs, "{message}"),
            Level::Error | Level::Fatal | Level::Panic => {
                tracing::error!(target: "ctxlog", severity, attrs = %attrs, "{message}")
            }
        }
        Ok(())
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler> {
        let mut bound = self.attrs.to_vec();
        bound.extend(attrs);
        Arc::new(Self {
            level: self.level,
            attrs: Arc::from(bound),
        })
    }
}
