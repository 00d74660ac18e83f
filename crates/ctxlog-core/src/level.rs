//! Severity levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LogError;

/// Ordered severity of a log record.
///
/// The numeric values leave gaps between the common levels so that `Notice` sits
/// between `Info` and `Warn`, and `Fatal`/`Panic` sit above `Error`.
///
/// # Example
///
/// ```
/// use ctxlog_core::Level;
///
/// assert!(Level::Warn > Level::Notice);
/// assert_eq!(Level::parse_or_default("warn"), Level::Warn);
/// assert_eq!(Level::parse_or_default("verbose"), Level::Info);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[repr(i8)]
pub enum Level {
    Debug = -4,
    #[default]
    Info = 0,
    Notice = 2,
    Warn = 4,
    Error = 8,
    Fatal = 12,
    Panic = 16,
}

impl Level {
    /// All levels from least to most severe.
    pub const ALL: [Level; 7] = [
        Level::Debug,
        Level::Info,
        Level::Notice,
        Level::Warn,
        Level::Error,
        Level::Fatal,
        Level::Panic,
    ];

    /// Human-readable name, as written in the `level` field of JSON records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Notice => "NOTICE",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Panic => "PANIC",
        }
    }

    /// Numeric severity.
    pub fn as_i8(&self) -> i8 {
        *self as i8
    }

    /// Parses a level name, falling back to [`Level::Info`] on unrecognized input.
    pub fn parse_or_default(s: &str) -> Level {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| LogError::UnknownLevel(s.to_string()))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
