//! Single-line colorized output for structured log records.
//!
//! A [`LogRecord`] is rendered as space-separated segments in fixed order:
//!
//! ```text
//! 2025-06-15 08:18:02 DEBUG hello component=auth
//! ```
//!
//! - Timestamp in cyan, normalized to `YYYY-MM-DD HH:MM:SS` UTC
//! - Level upper-cased and colored by severity
//! - Message with custom word colors
//! - Remaining fields as `key=value` in key order, keys in magenta
//!
//! Absent segments are left out entirely.

use crate::color::{self, Color};
use crate::config::Config;
use crate::level::{self, Severity};
use crate::parser::{self, LogRecord};
use crate::timestamp;

const TIME_COLOR: Color = Color::Cyan;
const KEY_COLOR: Color = Color::Magenta;

/// Format a single input line for output.
///
/// JSON object lines are rendered; anything else is passed through
/// unchanged. The result is written into `out`.
///
/// Returns `false` when the line is suppressed by the minimum-level filter,
/// in which case `out` is left untouched.
pub fn format_line(line: &str, config: &Config, use_color: bool, out: &mut String) -> bool {
    let record = match parser::parse_line(line) {
        Ok(record) => record,
        Err(e) => {
            tracing::debug!(error = %e, "passing line through unformatted");
            out.push_str(line);
            return true;
        }
    };

    if let Some(min_level) = config.min_level
        && !level::should_show(&record, min_level)
    {
        return false;
    }

    out.push_str(&render(&record, config, use_color));
    true
}

/// Render a [`LogRecord`] into a display line.
///
/// Pure: the same record and configuration always produce the same string.
pub fn render(record: &LogRecord, config: &Config, use_color: bool) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(3 + record.fields.len());

    let time = timestamp::normalize(record.time.as_ref());
    if !time.is_empty() {
        parts.push(TIME_COLOR.paint(&time, use_color));
    }

    if let Some(level) = record.level.as_deref().filter(|l| !l.trim().is_empty()) {
        parts.push(format_level(level, use_color));
    }

    if let Some(message) = record.message.as_deref().filter(|m| !m.is_empty()) {
        parts.push(color::colorize(message, &config.color_rules, use_color));
    }

    // BTreeMap iteration keeps keys in ascending order.
    for (key, value) in &record.fields {
        let text = if config.convert_timestamps && config.timestamp_fields.matches(key) {
            timestamp::convert_field_value(value)
        } else {
            format_value(value)
        };
        parts.push(format!(
            "{}={}",
            KEY_COLOR.paint(key, use_color),
            color::colorize(&text, &config.color_rules, use_color)
        ));
    }

    parts.join(" ")
}

/// Upper-case a level and color it by severity family.
///
/// Unrecognized levels keep their text and get the default color.
fn format_level(level: &str, use_color: bool) -> String {
    let color = Severity::from_str_loose(level).map_or(Color::DEFAULT, Severity::color);
    color.paint(&level.to_uppercase(), use_color)
}

/// Format a JSON value for display.
///
/// - Strings: unquoted
/// - Numbers: their JSON text (integers stay integers)
/// - Bools: `true` / `false`
/// - Null: `null`
/// - Arrays and objects: compact JSON
pub fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
