//! Filter configuration for listing notes.
//!
//! A [`NoteFilter`] holds the raw options a caller sent. The accessors
//! normalize them: an absent, blank, or `all` option means "no predicate".
//! The repository layer turns the active options into bound SQL predicates.

use serde::Deserialize;

use crate::clinical_note::{validate_note_status, validate_priority};
use crate::error::CoreError;

/// Option value that disables an exact-match predicate.
pub const MATCH_ALL: &str = "all";

/// Escape character used in generated `LIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

/// Named, optional predicates over notes. All active predicates are AND-ed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteFilter {
    /// Exact note status.
    pub status: Option<String>,
    /// Exact note priority.
    pub priority: Option<String>,
    /// Exact department.
    pub department: Option<String>,
    /// Case-insensitive substring over patient name, patient id, and note type
    /// (a note matches when any of the three contains it).
    pub search: Option<String>,
}

impl NoteFilter {
    pub fn status(&self) -> Option<&str> {
        exact_option(self.status.as_deref())
    }

    pub fn priority(&self) -> Option<&str> {
        exact_option(self.priority.as_deref())
    }

    pub fn department(&self) -> Option<&str> {
        exact_option(self.department.as_deref())
    }

    /// Active search text. `all` is a literal search term here, not a wildcard.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Reject enumerated options that can never match.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(status) = self.status() {
            validate_note_status(status)?;
        }
        if let Some(priority) = self.priority() {
            validate_priority("priority", priority)?;
        }
        Ok(())
    }

    /// Whether no predicate is active.
    pub fn is_unfiltered(&self) -> bool {
        self.status().is_none()
            && self.priority().is_none()
            && self.department().is_none()
            && self.search().is_none()
    }
}

fn exact_option(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != MATCH_ALL)
}

/// Build a `LIKE` pattern matching `needle` anywhere, with wildcards escaped.
///
/// Use with `ESCAPE '\'` so `%`, `_`, and `\` in the search text match literally.
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
