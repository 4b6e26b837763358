//! Display colors and custom word colorization.
//!
//! Colors form a closed set with a single mapping to [`owo_colors::Style`].
//! Unknown color names fall back to [`Color::White`], the neutral default.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::{OwoColorize, Style};

use crate::error::GlugError;

/// Supported display colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// The neutral default color.
    pub const DEFAULT: Self = Self::White;

    /// Parse a color name, case-insensitive. Returns `None` for unknown names.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "red" => Some(Self::Red),
            "green" => Some(Self::Green),
            "yellow" => Some(Self::Yellow),
            "blue" => Some(Self::Blue),
            "magenta" => Some(Self::Magenta),
            "cyan" => Some(Self::Cyan),
            "white" => Some(Self::White),
            _ => None,
        }
    }

    /// Parse a color name, falling back to [`Color::DEFAULT`] with a warning.
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            tracing::warn!(color = name, "unknown color name, using {}", Self::DEFAULT);
            Self::DEFAULT
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }

    pub const fn style(self) -> Style {
        match self {
            Self::Red => Style::new().red(),
            Self::Green => Style::new().green(),
            Self::Yellow => Style::new().yellow(),
            Self::Blue => Style::new().blue(),
            Self::Magenta => Style::new().magenta(),
            Self::Cyan => Style::new().cyan(),
            Self::White => Style::new().white(),
        }
    }

    /// Wrap `text` in this color. Identity when `use_color` is false.
    pub fn paint(self, text: &str, use_color: bool) -> String {
        if use_color {
            text.style(self.style()).to_string()
        } else {
            text.to_string()
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Word → color rules supplied once per run.
///
/// Rules are kept sorted by word so substring replacement is applied in a
/// deterministic order. Inserting a word twice keeps the later color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorRules {
    rules: BTreeMap<String, Color>,
}

impl ColorRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule. Empty words are ignored.
    pub fn insert(&mut self, word: impl Into<String>, color: Color) {
        let word = word.into();
        if !word.is_empty() {
            self.rules.insert(word, color);
        }
    }

    /// Parse a `color:word` rule as given on the command line.
    ///
    /// The word may itself contain `:`; only the first one separates.
    pub fn parse_rule(rule: &str) -> Result<(String, Color), GlugError> {
        let Some((color, word)) = rule.split_once(':') else {
            return Err(GlugError::Config(format!(
                "invalid color rule format: {rule} (expected color:word)"
            )));
        };
        if color.is_empty() || word.is_empty() {
            return Err(GlugError::Config(format!(
                "invalid color rule format: {rule} (expected color:word)"
            )));
        }
        Ok((word.to_string(), Color::from_name(color)))
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn get(&self, word: &str) -> Option<Color> {
        self.rules.get(word).copied()
    }

    /// Rules in ascending word order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> {
        self.rules.iter().map(|(w, c)| (w.as_str(), *c))
    }
}

impl<S: Into<String>> FromIterator<(S, Color)> for ColorRules {
    fn from_iter<I: IntoIterator<Item = (S, Color)>>(iter: I) -> Self {
        let mut rules = Self::new();
        for (word, color) in iter {
            rules.insert(word, color);
        }
        rules
    }
}

/// Apply custom word colors to `text`.
///
/// Matches are found in a single left-to-right pass over the original text;
/// at any position the longest matching word wins and the scan resumes after
/// it, so painted output is never matched again. Unmatched text is copied
/// through unchanged. When no rule matches (or there are no rules) the whole
/// text is wrapped in the default color instead.
pub fn colorize(text: &str, rules: &ColorRules, use_color: bool) -> String {
    if rules.is_empty() {
        return Color::DEFAULT.paint(text, use_color);
    }

    let mut result = String::with_capacity(text.len());
    let mut matched = false;
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        let longest = rules
            .iter()
            .filter(|(word, _)| rest.starts_with(word))
            .max_by_key(|(word, _)| word.len());

        if let Some((word, color)) = longest {
            result.push_str(&text[plain_start..pos]);
            result.push_str(&color.paint(word, use_color));
            matched = true;
            pos += word.len();
            plain_start = pos;
        } else {
            pos += rest.chars().next().map_or(1, char::len_utf8);
        }
    }

    if matched {
        result.push_str(&text[plain_start..]);
        result
    } else {
        Color::DEFAULT.paint(text, use_color)
    }
}
