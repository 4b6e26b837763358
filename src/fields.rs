//! Selection of fields whose values are rendered as converted timestamps.
//!
//! The user normally names the fields explicitly (`--convert-timestamps
//! validUntil,expires`). A name-based heuristic is available as an opt-in
//! (`--detect-timestamps`) and only applies when no explicit list is given.

use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock};

/// Field names (lower-case) that suggest a timestamp.
///
/// A field matches when its lower-cased name equals a pattern, starts with
/// `pattern_`, or ends with `_pattern`.
pub const TIMESTAMP_NAME_PATTERNS: &[&str] = &[
    "time",
    "timestamp",
    "ts",
    "date",
    "created",
    "updated",
    "modified",
    "expires",
    "expiry",
    "expire",
    "validuntil",
    "valid_until",
    "starttime",
    "start_time",
    "endtime",
    "end_time",
    "begintime",
    "begin_time",
    "lastseen",
    "last_seen",
    "lastlogin",
    "last_login",
    "lastaccess",
    "last_access",
    "issued",
    "issuedat",
    "issued_at",
    "notbefore",
    "not_before",
    "notafter",
    "not_after",
    "since",
    "until",
    "from",
    "to",
    "when",
];

/// Heuristically decide whether a field name refers to a timestamp.
pub fn looks_like_timestamp_field(name: &str) -> bool {
    let name = name.to_lowercase();

    let pattern_match = TIMESTAMP_NAME_PATTERNS.iter().any(|&pattern| {
        name == pattern
            || name
                .strip_prefix(pattern)
                .is_some_and(|rest| rest.starts_with('_'))
            || name
                .strip_suffix(pattern)
                .is_some_and(|rest| rest.ends_with('_'))
    });
    if pattern_match {
        return true;
    }

    if name.contains("time") && !name.contains("status") {
        return true;
    }
    name.contains("at") && (name.contains("time") || name.contains("date"))
}

/// Memoized results of [`looks_like_timestamp_field`], keyed by field name.
///
/// Safe to share between threads; cloning takes a snapshot of the entries.
#[derive(Debug, Default)]
pub struct FieldCache {
    entries: RwLock<HashMap<String, bool>>,
}

impl FieldCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached answer for `name`, computing and storing it on a miss.
    pub fn get_or_insert_with(&self, name: &str, compute: impl FnOnce(&str) -> bool) -> bool {
        if let Some(&hit) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
        {
            return hit;
        }

        let result = compute(name);
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), result);
        result
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Clone for FieldCache {
    fn clone(&self) -> Self {
        let entries = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        Self {
            entries: RwLock::new(entries),
        }
    }
}

/// Which fields get timestamp conversion.
#[derive(Debug, Clone, Default)]
pub struct TimestampFields {
    /// Lower-cased explicit field names, if the user supplied a list.
    explicit: Option<HashSet<String>>,
    /// Fall back to the name heuristic when no explicit list is present.
    detect: bool,
    cache: FieldCache,
}

impl TimestampFields {
    /// Match exactly these names, case-insensitively.
    ///
    /// Names are trimmed; empty names are ignored.
    pub fn explicit<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_lowercase())
            .filter(|n| !n.is_empty())
            .collect();
        Self {
            explicit: Some(set),
            ..Self::default()
        }
    }

    /// Match by the name heuristic.
    pub fn detect() -> Self {
        Self {
            detect: true,
            ..Self::default()
        }
    }

    /// Enable or disable the heuristic fallback.
    #[must_use]
    pub fn with_detect(mut self, detect: bool) -> Self {
        self.detect = detect;
        self
    }

    /// True when some field could ever match.
    pub fn is_active(&self) -> bool {
        self.explicit.as_ref().is_some_and(|s| !s.is_empty()) || self.detect
    }

    /// Decide whether `field_name` should be rendered as a timestamp.
    ///
    /// An explicit list, when present, is the only source of truth.
    pub fn matches(&self, field_name: &str) -> bool {
        if let Some(ref explicit) = self.explicit {
            return explicit.contains(&field_name.to_lowercase());
        }
        self.detect
            && self
                .cache
                .get_or_insert_with(field_name, looks_like_timestamp_field)
    }

    pub fn cache(&self) -> &FieldCache {
        &self.cache
    }
}
