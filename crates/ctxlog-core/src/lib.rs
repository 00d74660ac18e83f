//! ctxlog Core - Domain types and traits
//!
//! This crate provides the foundational types shared by the ctxlog facade and its
//! HTTP integration:
//!
//! - [`Level`]: ordered severity levels with string parsing
//! - [`Attr`] and [`args_to_attrs`]: key/value attributes built from alternating lists
//! - [`Record`]: a single log event handed to a [`Handler`]
//! - [`Context`]: an immutable, derivable carrier of request-scoped values
//! - [`LogError`]: the error hierarchy

pub mod attr;
pub mod context;
pub mod error;
pub mod handler;
pub mod level;
pub mod record;

pub use attr::{Attr, BAD_KEY, args_to_attrs};
pub use context::{CancelHandle, Context};
pub use error::{LogError, Result};
pub use handler::Handler;
pub use level::Level;
pub use record::{Record, Source};

/// Attribute value type. Any JSON-compatible value can be attached to a record.
pub use serde_json::Value;

/// Builds an alternating key/value argument list.
///
/// Every element is converted with `Value::from`, so strings, integers, floats and
/// booleans can be mixed freely.
///
/// ```
/// use ctxlog_core::{args, args_to_attrs};
///
/// let attrs = args_to_attrs(args!["user", "ana", "attempts", 3]);
/// assert_eq!(attrs.len(), 2);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($value)),+]
    };
}

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
