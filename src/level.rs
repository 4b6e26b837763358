//! Severity classification with alias matching and minimum-level filtering.
//!
//! Classification is deliberately fail-open: a level string that is not
//! recognized is treated as [`Severity::Info`] so that custom or malformed
//! levels are still shown by default rather than hidden.

use std::fmt;

use crate::color::Color;
use crate::parser::{self, LogRecord};

/// Canonical severity enumeration.
///
/// Ordered by severity (ascending) for `>=` filtering via [`Ord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    /// Canonical upper-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Display color used for the level segment of a rendered line.
    pub const fn color(self) -> Color {
        match self {
            Self::Trace => Color::Magenta,
            Self::Debug => Color::Blue,
            Self::Info => Color::Green,
            Self::Warn => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    /// Parse a level string, case-insensitive and ignoring surrounding
    /// whitespace.
    ///
    /// Returns `None` for unrecognized strings.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "TRACE" | "TRC" => Some(Self::Trace),
            "DEBUG" | "DBG" => Some(Self::Debug),
            "INFO" | "INF" => Some(Self::Info),
            "WARN" | "WARNING" | "WRN" => Some(Self::Warn),
            "ERROR" | "ERR" | "FATAL" | "CRIT" | "CRITICAL" => Some(Self::Error),
            _ => None,
        }
    }

    /// Classify a level string, defaulting to [`Severity::Info`] for anything
    /// unrecognized (including the empty string).
    pub fn classify(s: &str) -> Self {
        Self::from_str_loose(s).unwrap_or(Self::Info)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide whether a record passes the minimum-level gate.
///
/// A record without a level (absent, or present but not a string) is always
/// shown.
pub fn should_show(record: &LogRecord, min_level: Severity) -> bool {
    match record.level.as_deref() {
        Some(level) => Severity::classify(level) >= min_level,
        None => true,
    }
}

/// Decide whether a raw input line passes the minimum-level gate.
///
/// Lines that are not a JSON object are always shown.
pub fn should_show_line(line: &str, min_level: Severity) -> bool {
    parser::parse_line(line).map_or(true, |record| should_show(&record, min_level))
}
