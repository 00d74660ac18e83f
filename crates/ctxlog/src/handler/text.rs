//! Human-readable text handler.

use chrono::format::{Item, StrftimeItems};
use std::fmt::Write as _;
use std::io::Write;
use std::sync::Arc;

use ctxlog_core::{Attr, Context, Handler, Level, LogError, Record, Result, Source, Value};

use crate::sink::Sink;

/// chrono format for the "kitchen" clock, e.g. `3:04PM`.
pub const KITCHEN: &str = "%-I:%M%p";

/// Writes records as single lines meant for terminals:
///
/// ```text
/// 3:04PM INFO <server/main.rs:42> listening addr=0.0.0.0:8080
/// ```
#[derive(Debug, Clone)]
pub struct TextHandler {
    sink: Sink,
    level: Level,
    time_format: String,
    report_timestamp: bool,
    report_caller: bool,
    attrs: Arc<[Attr]>,
}

impl TextHandler {
    /// Creates a handler writing records at or above `level` to `sink`, with
    /// kitchen timestamps and caller reporting enabled.
    pub fn new(sink: Sink, level: Level) -> Self {
        Self {
            sink,
            level,
            time_format: KITCHEN.to_string(),
            report_timestamp: true,
            report_caller: true,
            attrs: Arc::from(Vec::new()),
        }
    }

    /// Sets the chrono format string used for timestamps.
    ///
    /// A format chrono cannot parse is rejected and the handler keeps [`KITCHEN`].
    pub fn with_time_format(mut self, format: impl Into<String>) -> Self {
        let format = format.into();
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            tracing::warn!(format = %format, "Invalid time format, keeping kitchen format");
        } else {
            self.time_format = format;
        }
        self
    }

    /// chrono format string used for timestamps.
    pub fn time_format(&self) -> &str {
        &self.time_format
    }

    /// Enables or disables the leading timestamp.
    pub fn with_timestamp(mut self, report: bool) -> Self {
        self.report_timestamp = report;
        self
    }

    /// Enables or disables the `<file:line>` caller column.
    pub fn with_caller(mut self, report: bool) -> Self {
        self.report_caller = report;
        self
    }

    /// Minimum level this handler writes.
    pub fn level(&self) -> Level {
        self.level
    }

    fn encode(&self, record: &Record) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(128);

        if self.report_timestamp {
            let mut stamp = String::with_capacity(16);
            write!(stamp, "{}", record.time.format(&self.time_format))?;
            out.extend_from_slice(stamp.as_bytes());
            out.push(b' ');
        }
        out.extend_from_slice(label(record.level).as_bytes());
        if self.report_caller {
            if let Some(source) = record.source {
                write!(out, " <{}:{}>", short_path(&source), source.line)?;
            }
        }
        if !record.message.is_empty() {
            out.push(b' ');
            if record.message.chars().any(char::is_control) {
                write_quoted(&mut out, &record.message)?;
            } else {
                out.extend_from_slice(record.message.as_bytes());
            }
        }
        for attr in self.attrs.iter().chain(record.attrs.iter()) {
            out.push(b' ');
            write_key(&mut out, &attr.key)?;
            out.push(b'=');
            write_value(&mut out, &attr.value);
        }
        out.push(b'\n');

        Ok(out)
    }
}

impl Handler for TextHandler {
    fn enabled(&self, _ctx: &Context, level: Level) -> bool {
        level >= self.level
    }

    fn handle(&self, _ctx: &Context, record: &Record) -> Result<()> {
        let bytes = self.encode(record)?;
        self.sink.write_record(&bytes)
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler> {
        let mut bound = self.attrs.to_vec();
        bound.extend(attrs);
        Arc::new(Self {
            attrs: Arc::from(bound),
            ..self.clone()
        })
    }
}

/// Four-letter column label.
fn label(level: Level) -> &'static str {
    match level {
        Level::Debug => "DEBU",
        Level::Info => "INFO",
        Level::Notice => "NOTI",
        Level::Warn => "WARN",
        Level::Error => "ERRO",
        Level::Fatal => "FATA",
        Level::Panic => "PANI",
    }
}

/// Keeps the last two path components (`dir/file.rs`).
fn short_path(source: &Source) -> &'static str {
    let file = source.file;
    let trimmed = file.trim_end_matches(['/', '\\']);
    let mut separators = trimmed.rmatch_indices(['/', '\\']);
    match separators.nth(1) {
        Some((idx, _)) => &file[idx + 1..],
        None => file,
    }
}

/// Renders a key; keys that would break `key=value` parsing are quoted.
pub(crate) fn write_key(out: &mut Vec<u8>, key: &str) -> Result<()> {
    if needs_quoting(key) {
        write_quoted(out, key)
    } else {
        out.extend_from_slice(key.as_bytes());
        Ok(())
    }
}

fn write_quoted(out: &mut Vec<u8>, s: &str) -> Result<()> {
    serde_json::to_writer(&mut *out, s).map_err(LogError::from)
}

/// Renders a value the way it appears after `key=`.
pub(crate) fn write_value(out: &mut Vec<u8>, value: &Value) {
    match value {
        Value::String(s) if !needs_quoting(s) => out.extend_from_slice(s.as_bytes()),
        // Value's Display is compact JSON: strings come out quoted and escaped.
        other => out.extend_from_slice(other.to_string().as_bytes()),
    }
}

fn needs_quoting(s: &str) -> bool {
    s.is_empty()
        || s
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || c == '=' || c == '"')
}
