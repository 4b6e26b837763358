//! Error types for `glug`.
//!
//! Uses [`thiserror`] for ergonomic error derivation.

use thiserror::Error;

/// Errors raised by the application shell around the formatting core.
///
/// Maps to exit codes: [`Config`](Self::Config) and [`Toml`](Self::Toml) → exit 1,
/// [`Io`](Self::Io) and [`Pager`](Self::Pager) → exit 2.
#[derive(Debug, Error)]
pub enum GlugError {
    /// Configuration error (invalid color rule, unreadable config file).
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The pager could not be started or fed.
    #[error("pager error: {0}")]
    Pager(String),
}

impl GlugError {
    /// Process exit code for this error.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Toml(_) => 1,
            Self::Io(_) | Self::Pager(_) => 2,
        }
    }
}

/// A line that could not be turned into a log record.
///
/// Never fatal: callers pass the original line through unchanged.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The line is not syntactically valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The line is valid JSON but not an object (array or scalar).
    #[error("JSON value is not an object")]
    NotAnObject,
}
