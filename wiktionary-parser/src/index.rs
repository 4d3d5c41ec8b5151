//! Dotted section indices and the comparisons used to correlate sections.
//!
//! Wiktionary numbers its table of contents as `1`, `1.2`, `1.2.3`, ...
//! Indices are compared as plain strings, component by component, exactly as
//! the page numbers them. This is not numeric ordering: `"1.10" < "1.2"`.
//! The correlator depends on that ordering, so it must not be "fixed".

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::WiktionaryError;

/// Upper bound used when a section has no successor.
pub const SENTINEL: &str = "999";

/// A dotted table-of-contents index such as `"1.2.3"`.
///
/// Ordering is the derived `String` ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionIndex(String);

impl SectionIndex {
    /// Wraps an index string as found on the page, without validation.
    #[must_use]
    pub fn new(index: impl Into<String>) -> Self {
        Self(index.into())
    }

    /// Parses and validates a dotted list of positive integers, as read from
    /// a table-of-contents number.
    pub fn parse(index: &str) -> Result<Self, WiktionaryError> {
        let trimmed = index.trim();
        let valid = !trimmed.is_empty()
            && trimmed.split('.').all(|part| {
                !part.is_empty()
                    && part.chars().all(|c| c.is_ascii_digit())
                    && part.chars().any(|c| c != '0')
            });
        if valid {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(WiktionaryError::InvalidIndex(index.to_string()))
        }
    }

    /// The index of the synthetic etymology created when a page has none.
    ///
    /// It is the empty string, which sorts before every real index.
    #[must_use]
    pub fn root() -> Self {
        Self(String::new())
    }

    /// The `"999"` upper bound.
    #[must_use]
    pub fn sentinel() -> Self {
        Self(SENTINEL.to_string())
    }

    /// Returns the raw string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of numeral characters (not components) in the index.
    #[must_use]
    pub fn digit_count(&self) -> usize {
        digit_count(&self.0)
    }

    /// True if `self` is nested under `parent`.
    #[must_use]
    pub fn is_descendant_of(&self, parent: &Self) -> bool {
        is_descendant(&self.0, &parent.0)
    }

    /// True if `lower <= self < upper` under string comparison.
    #[must_use]
    pub fn in_range(&self, lower: &Self, upper: &Self) -> bool {
        in_half_open_range(&self.0, &lower.0, &upper.0)
    }

    /// True if the raw index string starts with `prefix`'s raw string.
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.0.starts_with(prefix.as_str())
    }
}

impl fmt::Display for SectionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionIndex {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// True iff `child` has more components than `parent` and shares all of
/// `parent`'s components positionally.
#[must_use]
pub fn is_descendant(child: &str, parent: &str) -> bool {
    let child_parts: Vec<&str> = child.split('.').collect();
    let parent_parts: Vec<&str> = parent.split('.').collect();
    if child_parts.len() <= parent_parts.len() {
        return false;
    }
    child_parts
        .iter()
        .zip(parent_parts.iter())
        .all(|(c, p)| c == p)
}

/// True iff `lower <= index < upper` comparing the raw strings.
#[must_use]
pub fn in_half_open_range(index: &str, lower: &str, upper: &str) -> bool {
    lower <= index && index < upper
}

/// Counts the ASCII digits in an index string.
#[must_use]
pub fn digit_count(index: &str) -> usize {
    index.chars().filter(char::is_ascii_digit).count()
}
