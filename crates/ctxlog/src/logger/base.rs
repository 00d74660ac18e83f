use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use ctxlog_core::{Context, Handler, Level, Record, Value, args_to_attrs};

use crate::config::LogConfig;

/// Cheap-to-clone handle over a single [`Handler`].
///
/// Emission never fails from the caller's side: records below the handler's level
/// are dropped before any formatting, and write failures are reported through
/// `tracing` instead of being returned.
///
/// # Example
///
/// ```
/// use ctxlog::{Logger, Sink, LogConfig, args};
///
/// let (sink, buffer) = Sink::buffer();
/// let logger = Logger::with_handler(LogConfig::default().handler_with_sink(sink));
///
/// logger.info("user signed in", args!["user", "ana"]);
/// assert!(buffer.contents().contains("\"user\":\"ana\""));
/// ```
#[derive(Clone)]
pub struct Logger {
    handler: Arc<dyn Handler>,
}

impl Logger {
    /// Creates a logger over the handler selected by `config`, writing to stderr.
    pub fn new(config: &LogConfig) -> Self {
        Self::with_handler(config.handler())
    }

    /// Creates a logger over a custom handler, used as-is.
    pub fn with_handler(handler: impl Handler + 'static) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Creates a logger over an already shared handler.
    pub fn from_shared(handler: Arc<dyn Handler>) -> Self {
        Self { handler }
    }

    /// Creates a logger that tags every record with `name=<name>`.
    pub fn named(name: impl Into<String>, config: &LogConfig) -> Self {
        Self::new(config).with(vec![Value::from("name"), Value::String(name.into())])
    }

    /// The handler this logger writes through.
    pub fn handler(&self) -> &Arc<dyn Handler> {
        &self.handler
    }

    /// Returns a logger whose records all carry `args` (alternating key/value).
    /// The receiver is left untouched.
    pub fn with(&self, args: Vec<Value>) -> Self {
        let attrs = args_to_attrs(args);
        if attrs.is_empty() {
            return self.clone();
        }
        Self {
            handler: self.handler.with_attrs(attrs),
        }
    }

    /// Reports whether records at `level` would be written.
    pub fn enabled(&self, ctx: &Context, level: Level) -> bool {
        self.handler.enabled(ctx, level)
    }

    /// True if both handles share the same handler.
    pub fn ptr_eq(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }

    /// Emits a record at `level` with alternating key/value `args`.
    #[track_caller]
    pub fn log(&self, ctx: &Context, level: Level, msg: &str, args: Vec<Value>) {
        self.emit(ctx, level, msg, args, Location::caller());
    }

    pub(crate) fn emit(
        &self,
        ctx: &Context,
        level: Level,
        msg: &str,
        args: Vec<Value>,
        location: &'static Location<'static>,
    ) {
        if !self.handler.enabled(ctx, level) {
            return;
        }

        let record = Record::new(level, msg)
            .with_attrs(args_to_attrs(args))
            .with_source(location.into());

        if let Err(e) = self.handler.handle(ctx, &record) {
            tracing::warn!(error = %e, level = %level, "Failed to write log record");
        }
    }

    #[track_caller]
    pub fn debug(&self, msg: &str, args: Vec<Value>) {
        self.log(&Context::background(), Level::Debug, msg, args);
    }

    #[track_caller]
    pub fn info(&self, msg: &str, args: Vec<Value>) {
        self.log(&Context::background(), Level::Info, msg, args);
    }

    #[track_caller]
    pub fn notice(&self, msg: &str, args: Vec<Value>) {
        self.log(&Context::background(), Level::Notice, msg, args);
    }

    #[track_caller]
    pub fn warn(&self, msg: &str, args: Vec<Value>) {
        self.log(&Context::background(), Level::Warn, msg, args);
    }

    #[track_caller]
    pub fn error(&self, msg: &str, args: Vec<Value>) {
        self.log(&Context::background(), Level::Error, msg, args);
    }

    #[track_caller]
    pub fn debug_context(&self, ctx: &Context, msg: &str, args: Vec<Value>) {
        self.log(ctx, Level::Debug, msg, args);
    }

    #[track_caller]
    pub fn info_context(&self, ctx: &Context, msg: &str, args: Vec<Value>) {
        self.log(ctx, Level::Info, msg, args);
    }

    #[track_caller]
    pub fn notice_context(&self, ctx: &Context, msg: &str, args: Vec<Value>) {
        self.log(ctx, Level::Notice, msg, args);
    }

    #[track_caller]
    pub fn warn_context(&self, ctx: &Context, msg: &str, args: Vec<Value>) {
        self.log(ctx, Level::Warn, msg, args);
    }

    #[track_caller]
    pub fn error_context(&self, ctx: &Context, msg: &str, args: Vec<Value>) {
        self.log(ctx, Level::Error, msg, args);
    }
}

impl Default for Logger {
    /// JSON to stderr at Info, without reading the environment.
    fn default() -> Self {
        Self::new(&LogConfig::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("handler", &self.handler)
            .finish()
    }
}
