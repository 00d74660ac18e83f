//! Key/value attributes and argument pairing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key used for values that could not be paired with a string key.
pub const BAD_KEY: &str = "!BADKEY";

/// A single key/value pair attached to a record or bound to a handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attr {
    pub key: String,
    pub value: Value,
}

impl Attr {
    /// Creates a new attribute.
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    fn bad(value: Value) -> Self {
        Self {
            key: BAD_KEY.to_string(),
            value,
        }
    }
}

/// Converts an alternating key/value list into attributes.
///
/// Pairing is lenient and never fails:
/// - a string followed by any value becomes one attribute;
/// - a trailing string with nothing after it becomes `!BADKEY=<string>`;
/// - a non-string element where a key is expected becomes `!BADKEY=<element>`
///   and pairing resumes with the next element.
pub fn args_to_attrs(args: Vec<Value>) -> Vec<Attr> {
    let mut attrs = Vec::with_capacity(args.len() / 2 + 1);
    let mut iter = args.into_iter();

    while let Some(head) = iter.next() {
        match head {
            Value::String(key) => match iter.next() {
                Some(value) => attrs.push(Attr { key, value }),
                None => attrs.push(Attr::bad(Value::String(key))),
            },
            other => attrs.push(Attr::bad(other)),
        }
    }

    attrs
}
