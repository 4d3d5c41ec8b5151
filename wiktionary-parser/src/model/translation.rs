//! Translation values and senses.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Language key to translation value, for one sense.
pub type TranslationMap = BTreeMap<String, TranslationValue>;

/// A leaf translation: one item or several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationText {
    /// A single translation.
    Single(String),
    /// Several comma-separated translations, in page order.
    Multiple(Vec<String>),
}

impl TranslationText {
    /// Builds from split items: a lone item becomes `Single`.
    ///
    /// Returns `None` for an empty list.
    #[must_use]
    pub fn from_items(mut items: Vec<String>) -> Option<Self> {
        match items.len() {
            0 => None,
            1 => items.pop().map(Self::Single),
            _ => Some(Self::Multiple(items)),
        }
    }

    /// Items joined by `", "`.
    #[must_use]
    pub fn joined(&self) -> String {
        match self {
            Self::Single(text) => text.clone(),
            Self::Multiple(items) => items.join(", "),
        }
    }

    /// Appends a continuation line to the last item, separated by `"; "`.
    pub fn append_continuation(&mut self, text: &str) {
        match self {
            Self::Single(value) => {
                value.push_str("; ");
                value.push_str(text);
            }
            Self::Multiple(items) => match items.last_mut() {
                Some(last) => {
                    last.push_str("; ");
                    last.push_str(text);
                }
                None => items.push(text.to_string()),
            },
        }
    }
}

/// The translations recorded for one language key.
///
/// Dialect breakdowns nest exactly one level: a dialect maps to a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationValue {
    /// A single translation.
    Single(String),
    /// Several translations.
    Multiple(Vec<String>),
    /// Dialect label to translations.
    Dialects(BTreeMap<String, TranslationText>),
}

impl From<TranslationText> for TranslationValue {
    fn from(text: TranslationText) -> Self {
        match text {
            TranslationText::Single(value) => Self::Single(value),
            TranslationText::Multiple(items) => Self::Multiple(items),
        }
    }
}

impl TranslationValue {
    /// Returns the dialect map, if this is one.
    #[must_use]
    pub const fn dialects(&self) -> Option<&BTreeMap<String, TranslationText>> {
        match self {
            Self::Dialects(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the leaf text, if this is not a dialect map.
    #[must_use]
    pub fn as_text(&self) -> Option<TranslationText> {
        match self {
            Self::Single(value) => Some(TranslationText::Single(value.clone())),
            Self::Multiple(items) => Some(TranslationText::Multiple(items.clone())),
            Self::Dialects(_) => None,
        }
    }
}

/// Translations grouped under one sense of a definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationSense {
    /// Sense label (may be empty).
    pub sense: String,
    /// Language key to translations.
    pub translations: TranslationMap,
}

impl TranslationSense {
    /// Creates a translation sense.
    #[must_use]
    pub fn new(sense: impl Into<String>, translations: TranslationMap) -> Self {
        Self {
            sense: sense.into(),
            translations,
        }
    }
}
