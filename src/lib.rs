//! `glug`: colorize newline-delimited JSON log records from stdin.
//!
//! This library holds the parsing and rendering behind the `glug` CLI.
//! Each JSON object line is turned into a single readable line:
//! normalized timestamp, colored severity, message with custom word
//! colors, then the remaining fields as sorted `key=value` pairs.
//! Anything that is not a JSON object passes through untouched.
//!
//! # Example
//!
//! ```
//! use glug::{Config, format_line};
//!
//! let config = Config::default();
//! let mut out = String::new();
//!
//! let shown = format_line(
//!     r#"{"time":1749975482337,"level":"debug","message":"hello","component":"auth"}"#,
//!     &config,
//!     false,
//!     &mut out,
//! );
//! assert!(shown);
//! assert_eq!(out, "2025-06-15 08:18:02 DEBUG hello component=auth");
//! ```

pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod fields;
pub mod formatter;
pub mod level;
pub mod logging;
pub mod output;
pub mod parser;
pub mod timestamp;

// Re-export primary API types for convenience.
pub use color::{Color, ColorRules, colorize};
pub use config::Config;
pub use error::{GlugError, ParseError};
pub use fields::TimestampFields;
pub use formatter::{format_line, render};
pub use level::{Severity, should_show, should_show_line};
pub use parser::{LogRecord, parse_line};
pub use timestamp::{Timestamp, normalize};
