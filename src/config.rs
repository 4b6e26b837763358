//! Configuration management with TOML file support.
//!
//! Merges settings from three sources (highest precedence first):
//! 1. CLI flags
//! 2. Config file (`$XDG_CONFIG_HOME/glug/config.toml` or `~/.config/glug/config.toml`)
//! 3. Built-in defaults

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::{Cli, ColorMode};
use crate::color::{Color, ColorRules};
use crate::error::GlugError;
use crate::fields::TimestampFields;
use crate::level::Severity;

/// Runtime configuration merged from defaults, config file, and CLI arguments.
///
/// Immutable once built. Use [`Config::from_cli`] to build from parsed CLI
/// arguments, or [`Config::default`] for built-in defaults (useful in tests
/// and benchmarks).
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Color output mode (auto/always/never).
    pub color_mode: ColorMode,
    /// Minimum severity to display; records below this are suppressed.
    pub min_level: Option<Severity>,
    /// Custom word colors applied to messages and field values.
    pub color_rules: ColorRules,
    /// Render matching fields as converted timestamps.
    pub convert_timestamps: bool,
    /// Which fields count as timestamps when conversion is on.
    pub timestamp_fields: TimestampFields,
    /// `Some(true)` forces the pager, `Some(false)` disables it, `None` pages
    /// only when stdout is a terminal.
    pub pager: Option<bool>,
}

impl Config {
    /// Build a [`Config`] from CLI arguments, loading the config file if present.
    ///
    /// Merge precedence: CLI flags > config file > defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self, GlugError> {
        let mut config = Self::default();

        let config_path = cli.config.clone().unwrap_or_else(Self::default_config_path);
        let mut file_fields = None;
        let mut detect = false;

        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "loading config file");
            let file_config = FileConfig::load(&config_path)?;
            file_fields = file_config.timestamp_fields.clone();
            detect = file_config.detect_timestamps.unwrap_or(false);
            config.apply_file_config(file_config);
        } else if cli.config.is_some() {
            return Err(GlugError::Config(format!(
                "config file not found: {}",
                config_path.display()
            )));
        }

        // CLI overrides
        if let Some(mode) = cli.color_mode {
            config.color_mode = mode;
        }

        if let Some(ref level) = cli.level {
            config.min_level = Some(min_level(level));
        }

        for rule in &cli.colour {
            let (word, color) = ColorRules::parse_rule(rule)?;
            config.color_rules.insert(word, color);
        }

        if cli.no_pager {
            config.pager = Some(false);
        } else if cli.pager {
            config.pager = Some(true);
        }

        detect |= cli.detect_timestamps;
        let explicit = cli.convert_timestamps.clone().or(file_fields);
        config.timestamp_fields = match explicit {
            Some(names) => TimestampFields::explicit(names).with_detect(detect),
            None if detect => TimestampFields::detect(),
            None => TimestampFields::default(),
        };
        config.convert_timestamps = config.timestamp_fields.is_active();

        Ok(config)
    }

    /// Default config file path: `$XDG_CONFIG_HOME/glug/config.toml` or `~/.config/glug/config.toml`.
    fn default_config_path() -> PathBuf {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("glug").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("glug")
                .join("config.toml")
        } else {
            PathBuf::from(".config/glug/config.toml")
        }
    }

    /// Apply settings from a parsed config file.
    ///
    /// Timestamp settings are merged by [`from_cli`](Self::from_cli) since
    /// they combine with CLI flags.
    fn apply_file_config(&mut self, file: FileConfig) {
        if let Some(color) = file.color {
            self.color_mode = match color.as_str() {
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                _ => ColorMode::Auto,
            };
        }

        if let Some(level) = file.level {
            self.min_level = Some(min_level(&level));
        }

        if let Some(pager) = file.pager {
            self.pager = Some(pager);
        }

        if let Some(colors) = file.colors {
            for (word, name) in colors {
                self.color_rules.insert(word, Color::from_name(&name));
            }
        }
    }
}

/// Classify a minimum level from the CLI or config file.
///
/// Unrecognized names count as INFO, the same as record levels.
fn min_level(name: &str) -> Severity {
    Severity::from_str_loose(name).unwrap_or_else(|| {
        tracing::warn!(level = name, "unrecognized minimum level, using INFO");
        Severity::Info
    })
}

/// Config file structure (TOML deserialization).
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    color: Option<String>,
    level: Option<String>,
    pager: Option<bool>,
    detect_timestamps: Option<bool>,
    timestamp_fields: Option<Vec<String>>,
    /// Word → color name.
    colors: Option<BTreeMap<String, String>>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self, GlugError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            GlugError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
