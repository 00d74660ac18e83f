//! Log records.

use chrono::{DateTime, Local};
use std::panic::Location;

use crate::attr::Attr;
use crate::level::Level;

/// Call site that produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source {
    pub file: &'static str,
    pub line: u32,
}

impl From<&'static Location<'static>> for Source {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

/// A single log event as seen by a [`Handler`](crate::Handler).
#[derive(Debug, Clone)]
pub struct Record {
    pub time: DateTime<Local>,
    pub level: Level,
    pub message: String,
    pub attrs: Vec<Attr>,
    pub source: Option<Source>,
}

impl Record {
    /// Creates a record stamped with the current time and no source.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            time: Local::now(),
            level,
            message: message.into(),
            attrs: Vec::new(),
            source: None,
        }
    }

    /// Attaches attributes.
    pub fn with_attrs(mut self, attrs: Vec<Attr>) -> Self {
        self.attrs = attrs;
        self
    }

    /// Attaches the call site.
    pub fn with_source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_from_location() {
        let source = Source::from(Location::caller());
        assert!(source.file.ends_with("record.rs"));
        assert!(source.line > 0);
    }

    #[test]
    fn test_builder() {
        let record = Record::new(Level::Warn, "disk almost full")
            .with_attrs(vec![Attr::new("free_mb", 120)]);
        assert_eq!(record.level, Level::Warn);
        assert_eq!(record.message, "disk almost full");
        assert_eq!(record.attrs.len(), 1);
        assert!(record.source.is_none());
    }
}
