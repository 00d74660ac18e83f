//! Logging configuration and handler selection.
//!
//! Configuration is an explicit value. The environment is read only when
//! [`LogConfig::from_env`] is called:
//!
//! | Variable     | Values                                   | Effect                          |
//! |--------------|------------------------------------------|---------------------------------|
//! | `LOG_FORMAT` | `TEXT` / anything else                   | text handler vs JSON handler    |
//! | `LOG_LEVEL`  | `DEBUG` .. `PANIC`, case-insensitive     | minimum level, unknown → `INFO` |

use config::{Config, Environment};
use serde::Deserialize;
use std::collections::HashMap;

use ctxlog_core::{Level, LogError, Result};

use crate::handler::{BaseHandler, JsonHandler, TextHandler};
use crate::sink::Sink;

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per line.
    #[default]
    Json,
}

impl LogFormat {
    /// `"TEXT"` (any case) selects [`LogFormat::Text`]; everything else, including
    /// the empty string, selects [`LogFormat::Json`].
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("TEXT") {
            LogFormat::Text
        } else {
            LogFormat::Json
        }
    }
}

/// Settings used to build the base handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    pub level: Level,
    /// Report the call site (`source` in JSON, `<file:line>` in text).
    pub add_source: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Json,
            level: Level::Info,
            add_source: true,
        }
    }
}

/// Raw `LOG_*` variables, before normalization.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawLogVars {
    format: String,
    level: String,
}

impl LogConfig {
    /// Builds a configuration from raw format and level strings.
    ///
    /// Never fails: unknown formats mean JSON and unknown levels mean Info.
    pub fn from_vars(format: &str, level: &str) -> Self {
        Self {
            format: LogFormat::parse(format),
            level: Level::parse_or_default(level),
            ..Self::default()
        }
    }

    /// Reads `LOG_FORMAT` and `LOG_LEVEL` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::load(Environment::with_prefix("LOG"))
    }

    /// Same as [`from_env`](Self::from_env) but reads from the given map instead of
    /// the process environment.
    pub fn from_map(vars: HashMap<String, String>) -> Result<Self> {
        Self::load(Environment::with_prefix("LOG").source(Some(vars.into_iter().collect())))
    }

    fn load(source: Environment) -> Result<Self> {
        let raw: RawLogVars = Config::builder()
            .add_source(source)
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| LogError::config(e.to_string()))?;

        Ok(Self::from_vars(&raw.format, &raw.level))
    }

    /// Sets the minimum level.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Builds the configured handler writing to stderr.
    pub fn handler(&self) -> BaseHandler {
        self.handler_with_sink(Sink::stderr())
    }

    /// Builds the configured handler writing to `sink`.
    pub fn handler_with_sink(&self, sink: Sink) -> BaseHandler {
        match self.format {
            LogFormat::Text => TextHandler::new(sink, self.level)
                .with_caller(self.add_source)
                .into(),
            LogFormat::Json => JsonHandler::new(sink, self.level)
                .with_source(self.add_source)
                .into(),
        }
    }
}
