//! Command-line argument definitions for `glug`.
//!
//! Uses [`clap`] derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_complete::Shell;

const EXAMPLES: &str = "\
Examples:
  echo '{\"message\":\"Test PASS\"}' | glug --colour green:PASS
  cat logs.json | glug --colour green:PASS --colour red:FAIL
  docker logs container | glug --level warning --color red:ERROR
  echo '{\"message\":\"Quick output\"}' | glug --no-pager
  cat logs.json | glug --convert-timestamps validUntil,expires

Supported colors: red, green, yellow, blue, magenta, cyan, white
Supported levels: trace, debug, info, warn/warning, error";

/// Colorize newline-delimited JSON log records from stdin.
///
/// Each JSON object is rewritten as `time LEVEL message key=value ...`.
/// Lines that are not JSON objects are passed through unchanged.
#[derive(Debug, Parser)]
#[command(name = "glug", version, about, long_about = None, after_help = EXAMPLES)]
pub struct Cli {
    /// Color specific words (format: color:word, e.g. green:PASS).
    ///
    /// May be given several times; a later rule for the same word wins.
    #[arg(long = "colour", visible_alias = "color", value_name = "COLOR:WORD")]
    pub colour: Vec<String>,

    /// Minimum log level to show.
    ///
    /// Lines below this level are suppressed; an unrecognized name counts
    /// as `info`. Lines without a level and non-JSON lines always pass through.
    #[arg(short = 'l', long)]
    pub level: Option<String>,

    /// Page output through `$PAGER`, `less`, or `more`.
    ///
    /// Enabled by default when stdout is a terminal.
    #[arg(short = 'p', long, overrides_with = "no_pager")]
    pub pager: bool,

    /// Write directly to stdout without a pager.
    #[arg(short = 'n', long, overrides_with = "pager")]
    pub no_pager: bool,

    /// Comma-separated field names whose values are converted as timestamps.
    #[arg(short = 't', long, value_delimiter = ',', value_name = "FIELDS")]
    pub convert_timestamps: Option<Vec<String>>,

    /// Guess timestamp fields from their names (e.g. `expires`, `lastSeen`).
    ///
    /// Ignored when `--convert-timestamps` names the fields explicitly.
    #[arg(long)]
    pub detect_timestamps: bool,

    /// Control ANSI color output.
    ///
    /// `auto` enables colors when stdout is a TTY and `NO_COLOR` is unset.
    /// A non-empty `FORCE_COLOR` enables them even when piped.
    #[arg(long, value_enum)]
    pub color_mode: Option<ColorMode>,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log diagnostics (e.g. lines that failed to parse) to stderr.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Print a shell completion script and exit.
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Enable colors only when stdout is a TTY.
    #[default]
    Auto,
    /// Always enable colors.
    Always,
    /// Never enable colors.
    Never,
}
