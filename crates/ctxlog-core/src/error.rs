//! Error types for ctxlog.
//!
//! Logging itself never fails from the caller's point of view: emission methods
//! swallow handler errors after reporting them. The errors below surface only from
//! the fallible building blocks (level parsing, configuration loading, handler I/O).
//!
//! # Example
//!
//! ```
//! use ctxlog_core::{Level, LogError};
//!
//! match "verbose".parse::<Level>() {
//!     Err(LogError::UnknownLevel(name)) => assert_eq!(name, "verbose"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use std::{fmt, io};
use thiserror::Error;

/// Main error type for ctxlog operations.
#[derive(Debug, Error)]
pub enum LogError {
    /// A level name did not match any known severity.
    #[error("Unknown log level '{0}'")]
    UnknownLevel(String),

    /// Writing a record to its destination failed.
    #[error("Failed to write log record: {0}")]
    Io(#[from] io::Error),

    /// Encoding a record or attribute value failed.
    #[error("Failed to encode log record: {0}")]
    Encode(#[from] serde_json::Error),

    /// A field (such as the timestamp) could not be formatted.
    #[error("Failed to format log field")]
    Format(#[from] fmt::Error),

    /// Configuration could not be loaded or deserialized.
    #[error("Invalid logging configuration: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },
}

impl LogError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Returns true for errors raised while writing output.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

/// Result alias used across ctxlog crates.
pub type Result<T> = std::result::Result<T, LogError>;
