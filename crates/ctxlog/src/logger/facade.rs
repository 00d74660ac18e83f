use std::fmt;
use std::panic::Location;
use std::process;

use ctxlog_core::{Context, Level, Value};

use super::Logger;

/// Formatted emission and the two terminating levels.
///
/// Formatted variants take [`fmt::Arguments`], built with `format_args!`:
///
/// ```
/// use ctxlog::{Logger, LogConfig, Sink};
///
/// let (sink, buffer) = Sink::buffer();
/// let logger = Logger::with_handler(LogConfig::from_vars("TEXT", "INFO").handler_with_sink(sink));
///
/// let port = 8080;
/// logger.infof(format_args!("listening on port {port}"));
/// assert!(buffer.contents().contains("listening on port 8080"));
/// ```
impl Logger {
    #[track_caller]
    fn logf(&self, level: Level, args: fmt::Arguments<'_>) {
        let ctx = Context::background();
        if !self.enabled(&ctx, level) {
            return;
        }
        self.emit(&ctx, level, &args.to_string(), Vec::new(), Location::caller());
    }

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Debug, args);
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Info, args);
    }

    #[track_caller]
    pub fn noticef(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Notice, args);
    }

    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Warn, args);
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Error, args);
    }

    /// Emits at Panic, then panics with `msg`. The panic unwinds and can be caught.
    #[track_caller]
    pub fn panic(&self, msg: &str, args: Vec<Value>) -> ! {
        self.panic_context(&Context::background(), msg, args)
    }

    /// Formatted form of [`panic`](Self::panic).
    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        let msg = args.to_string();
        self.panic_context(&Context::background(), &msg, Vec::new())
    }

    /// [`panic`](Self::panic) with an explicit context.
    #[track_caller]
    pub fn panic_context(&self, ctx: &Context, msg: &str, args: Vec<Value>) -> ! {
        self.emit(ctx, Level::Panic, msg, args, Location::caller());
        panic!("{msg}");
    }

    /// Emits at Fatal, then exits the process with status 1. Destructors do not run;
    /// meant for unrecoverable startup failures.
    #[track_caller]
    pub fn fatal(&self, msg: &str, args: Vec<Value>) -> ! {
        self.fatal_context(&Context::background(), msg, args)
    }

    /// Formatted form of [`fatal`](Self::fatal).
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        let msg = args.to_string();
        self.fatal_context(&Context::background(), &msg, Vec::new())
    }

    /// [`fatal`](Self::fatal) with an explicit context.
    #[track_caller]
    pub fn fatal_context(&self, ctx: &Context, msg: &str, args: Vec<Value>) -> ! {
        self.emit(ctx, Level::Fatal, msg, args, Location::caller());
        process::exit(1);
    }
}
