//! Timestamp parsing and normalization.
//!
//! Converts epoch numbers (seconds or milliseconds, picked by magnitude) and
//! RFC 3339 / zone-less ISO strings into `YYYY-MM-DD HH:MM:SS` in UTC.
//! Normalization never fails: anything that cannot be converted is shown in
//! its original form.

use std::fmt;

use crate::formatter::format_value;

/// Display format for converted timestamps.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Epoch numbers with a magnitude above this are milliseconds, otherwise seconds.
const MILLIS_THRESHOLD: u64 = 10_000_000_000;

/// Parsed timestamp.
///
/// Wraps a [`jiff::Timestamp`]; [`format_display`](Self::format_display)
/// renders it in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub value: jiff::Timestamp,
}

impl Timestamp {
    /// Format the timestamp with a strftime-compatible format string, in UTC.
    pub fn format_with(&self, format: &str) -> String {
        let zdt = self.value.to_zoned(jiff::tz::TimeZone::UTC);
        zdt.strftime(format).to_string()
    }

    /// Format the timestamp as `YYYY-MM-DD HH:MM:SS`.
    pub fn format_display(&self) -> String {
        self.format_with(DISPLAY_FORMAT)
    }

    /// Parse a timestamp from a [`serde_json::Value`].
    ///
    /// Supports:
    /// - Unix epoch seconds (magnitude up to 1e10, fraction truncated)
    /// - Unix epoch milliseconds (magnitude above 1e10)
    /// - RFC 3339 strings
    /// - `YYYY-MM-DDTHH:MM:SS` strings without a zone, taken as UTC
    pub fn from_json_value(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => Self::parse_string(s),
            serde_json::Value::Number(n) => Self::parse_number(n),
            _ => None,
        }
    }

    fn parse_string(s: &str) -> Option<Self> {
        if let Ok(ts) = s.parse::<jiff::Timestamp>() {
            return Some(Self { value: ts });
        }

        for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
            if let Ok(dt) = jiff::civil::DateTime::strptime(format, s)
                && let Ok(zdt) = dt.to_zoned(jiff::tz::TimeZone::UTC)
            {
                return Some(Self {
                    value: zdt.timestamp(),
                });
            }
        }

        None
    }

    fn parse_number(n: &serde_json::Number) -> Option<Self> {
        if let Some(i) = n.as_i64() {
            Self::from_epoch_integer(i)
        } else {
            n.as_f64().and_then(Self::from_epoch_float)
        }
    }

    fn from_epoch_integer(value: i64) -> Option<Self> {
        let ts = if value.unsigned_abs() > MILLIS_THRESHOLD {
            jiff::Timestamp::from_millisecond(value).ok()?
        } else {
            jiff::Timestamp::from_second(value).ok()?
        };
        Some(Self { value: ts })
    }

    fn from_epoch_float(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        // Out-of-range floats saturate and are then rejected by jiff.
        #[allow(clippy::cast_possible_truncation)]
        let whole = value.trunc() as i64;
        #[allow(clippy::cast_precision_loss)]
        let ts = if value.abs() > MILLIS_THRESHOLD as f64 {
            jiff::Timestamp::from_millisecond(whole).ok()?
        } else {
            jiff::Timestamp::from_second(whole).ok()?
        };
        Some(Self { value: ts })
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_display())
    }
}

/// Normalize a time value for display.
///
/// | input | output |
/// |---|---|
/// | absent or `null` | empty string |
/// | convertible number or string | `YYYY-MM-DD HH:MM:SS` (UTC) |
/// | unparseable string | the string unchanged |
/// | anything else | its stringified form |
pub fn normalize(value: Option<&serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(v) => Timestamp::from_json_value(v)
            .map_or_else(|| format_value(v), |ts| ts.format_display()),
    }
}

/// Render a field value that has been selected for timestamp conversion.
///
/// Produces `"<converted> (<original>)"` when the value converts to something
/// different from its original text, otherwise the original text.
pub fn convert_field_value(value: &serde_json::Value) -> String {
    let original = format_value(value);
    let converted = normalize(Some(value));
    if !converted.is_empty() && converted != original {
        format!("{converted} ({original})")
    } else {
        original
    }
}
