//! JSON log line parser.
//!
//! Turns one line of input into a [`LogRecord`] by pulling out the `level`,
//! `time`, and `message` keys and keeping everything else in a field bag.
//! Anything that is not a single JSON object is a [`ParseError`].

use std::collections::BTreeMap;

use crate::error::ParseError;

const LEVEL_KEY: &str = "level";
const TIME_KEY: &str = "time";
const MESSAGE_KEY: &str = "message";

/// A structured log entry extracted from a JSON object.
///
/// Built fresh for every line and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// The `level` value, only when it was a JSON string.
    pub level: Option<String>,
    /// The `time` value, verbatim. JSON `null` is treated as absent.
    pub time: Option<serde_json::Value>,
    /// The `message` value, only when it was a JSON string.
    pub message: Option<String>,
    /// Remaining fields, ordered alphabetically.
    pub fields: BTreeMap<String, serde_json::Value>,
}

/// Parse a single line into a [`LogRecord`].
///
/// A `level` or `message` that is not a string is dropped, not kept in the
/// field bag.
pub fn parse_line(line: &str) -> Result<LogRecord, ParseError> {
    let parsed: serde_json::Value = serde_json::from_str(line)?;

    let serde_json::Value::Object(map) = parsed else {
        return Err(ParseError::NotAnObject);
    };

    let mut record = LogRecord {
        level: None,
        time: None,
        message: None,
        fields: BTreeMap::new(),
    };

    for (key, value) in map {
        match key.as_str() {
            LEVEL_KEY => record.level = into_string(value),
            TIME_KEY => record.time = Some(value).filter(|v| !v.is_null()),
            MESSAGE_KEY => record.message = into_string(value),
            _ => {
                record.fields.insert(key, value);
            }
        }
    }

    Ok(record)
}

fn into_string(v: serde_json::Value) -> Option<String> {
    match v {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    }
}
