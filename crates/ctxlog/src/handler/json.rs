//! JSON lines handler.

use chrono::SecondsFormat;
use serde::Serialize;
use std::sync::Arc;

use ctxlog_core::{Attr, Context, Handler, Level, Record, Result};

use crate::sink::Sink;

/// Writes one JSON object per record.
///
/// Field order is `time`, `level`, `source`, `msg`, then bound attributes, then the
/// record's own attributes. `level` always carries the level name (`"NOTICE"`,
/// `"FATAL"`, ...), never a numeric form.
#[derive(Debug, Clone)]
pub struct JsonHandler {
    sink: Sink,
    level: Level,
    add_source: bool,
    attrs: Arc<[Attr]>,
}

#[derive(Serialize)]
struct SourceField<'a> {
    file: &'a str,
    line: u32,
}

impl JsonHandler {
    /// Creates a handler writing records at or above `level` to `sink`.
    pub fn new(sink: Sink, level: Level) -> Self {
        Self {
            sink,
            level,
            add_source: true,
            attrs: Arc::from(Vec::new()),
        }
    }

    /// Enables or disables the `source` field.
    pub fn with_source(mut self, add_source: bool) -> Self {
        self.add_source = add_source;
        self
    }

    /// Minimum level this handler writes.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Attributes bound to this handler.
    pub fn bound_attrs(&self) -> &[Attr] {
        &self.attrs
    }

    fn encode(&self, record: &Record) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(256);
        let mut fields = FieldWriter::new(&mut out);

        fields.push(
            "time",
            &record.time.to_rfc3339_opts(SecondsFormat::Millis, false),
        )?;
        fields.push("level", record.level.as_str())?;
        if self.add_source {
            if let Some(source) = record.source {
                fields.push(
                    "source",
                    &SourceField {
                        file: source.file,
                        line: source.line,
                    },
                )?;
            }
        }
        fields.push("msg", &record.message)?;
        for attr in self.attrs.iter().chain(record.attrs.iter()) {
            fields.push(&attr.key, &attr.value)?;
        }
        fields.finish();

        Ok(out)
    }
}

impl Handler for JsonHandler {
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

/// Appends `"key":value` pairs to an object. Duplicate keys are kept in order.
struct FieldWriter<'a> {
    out: &'a mut Vec<u8>,
    first: bool,
}

impl<'a> FieldWriter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        out.push(b'{');
        Self { out, first: true }
    }

    fn push<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        if !self.first {
            self.out.push(b',');
        }
        self.first = false;
        serde_json::to_writer(&mut *self.out, key)?;
        self.out.push(b':');
        serde_json::to_writer(&mut *self.out, value)?;
        Ok(())
    }

    fn finish(self) {
        self.out.extend_from_slice(b"}\n");
    }
}
