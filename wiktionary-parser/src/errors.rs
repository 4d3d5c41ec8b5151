//! Error types for the wiktionary parser.
//!
//! Translation tables are the least regular part of a Wiktionary page, so
//! their failures get a dedicated taxonomy ([`TranslationParsingError`]).
//! Those errors are normally caught at the sense or language-item boundary
//! and logged; only [`WiktionaryError`] reaches the caller of a fetch.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// The main error type for wiktionary parser operations.
#[derive(Debug, Error)]
pub enum WiktionaryError {
    /// The HTTP request itself failed (connection, TLS, body decoding).
    #[error("HTTP request to {url} failed: {source}")]
    Http {
        /// The requested URL.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("HTTP status {status} for {url}")]
    Status {
        /// The requested URL.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The server answered with something other than an HTML page.
    #[error("Expected HTML from {url}, got {content_type:?}")]
    NotHtml {
        /// The requested URL.
        url: String,
        /// The response's content type, if it sent one.
        content_type: Option<String>,
    },

    /// A translation table could not be parsed.
    #[error("{0}")]
    Translation(#[from] TranslationParsingError),

    /// A section index string was not a dotted list of numerals.
    #[error("Invalid section index: {0:?}")]
    InvalidIndex(String),

    /// Invalid parser configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WiktionaryError {
    /// Creates a status error.
    #[must_use]
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Where in a page a translation error happened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseContext {
    /// The queried word.
    pub word: String,
    /// The sense label of the translation table (may be empty).
    pub sense: String,
    /// The language key being parsed, when known.
    pub language: String,
}

impl ParseContext {
    /// Creates a context for a word.
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ..Default::default()
        }
    }

    /// Sets the sense label.
    #[must_use]
    pub fn with_sense(mut self, sense: impl Into<String>) -> Self {
        self.sense = sense.into();
        self
    }

    /// Sets the language key.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

impl fmt::Display for ParseContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "word '{}', sense '{}'", self.word, self.sense)?;
        if !self.language.is_empty() {
            write!(f, ", language '{}'", self.language)?;
        }
        Ok(())
    }
}

/// Failures while reading translation tables.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranslationParsingError {
    /// The node next to a translations anchor is not a translation container,
    /// or an off-page translation lookup failed.
    #[error("Cannot locate translation senses for {context}: {reason}")]
    SenseLocation {
        /// Error location.
        context: ParseContext,
        /// What went wrong.
        reason: String,
    },

    /// A sense table yielded no language items.
    #[error("Empty translation sense for {context}")]
    EmptySense {
        /// Error location.
        context: ParseContext,
    },

    /// A sense contains no table.
    #[error("No translation table for {context}")]
    ZeroTables {
        /// Error location.
        context: ParseContext,
    },

    /// A sense contains more than one table.
    #[error("{count} translation tables for {context}")]
    MultipleTables {
        /// Error location.
        context: ParseContext,
        /// Number of tables found.
        count: usize,
    },

    /// The chosen table has more than one body.
    #[error("{count} table bodies in translation table for {context}")]
    MultipleTableBodies {
        /// Error location.
        context: ParseContext,
        /// Number of bodies found.
        count: usize,
    },

    /// A language item has no `language: value` separator.
    #[error("Missing colon (:) for {context} in {text:?}")]
    MissingColon {
        /// Error location.
        context: ParseContext,
        /// The offending text.
        text: String,
    },

    /// Splitting a value produced no items.
    #[error("No items for {context} in {text:?}")]
    ZeroLengthList {
        /// Error location.
        context: ParseContext,
        /// The offending text.
        text: String,
    },
}

impl TranslationParsingError {
    /// Creates a sense location error.
    #[must_use]
    pub fn sense_location(context: ParseContext, reason: impl Into<String>) -> Self {
        Self::SenseLocation {
            context,
            reason: reason.into(),
        }
    }

    /// Creates a missing colon error.
    #[must_use]
    pub fn missing_colon(context: ParseContext, text: impl Into<String>) -> Self {
        Self::MissingColon {
            context,
            text: text.into(),
        }
    }

    /// Creates a zero-length list error.
    #[must_use]
    pub fn zero_length_list(context: ParseContext, text: impl Into<String>) -> Self {
        Self::ZeroLengthList {
            context,
            text: text.into(),
        }
    }

    /// Stable name of the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SenseLocation { .. } => "SenseLocationError",
            Self::EmptySense { .. } => "EmptySenseError",
            Self::ZeroTables { .. } => "ZeroTablesError",
            Self::MultipleTables { .. } => "MultipleTablesError",
            Self::MultipleTableBodies { .. } => "MultipleTableBodiesError",
            Self::MissingColon { .. } => "MissingColonError",
            Self::ZeroLengthList { .. } => "ZeroLengthListError",
        }
    }

    /// The location the error refers to.
    #[must_use]
    pub const fn context(&self) -> &ParseContext {
        match self {
            Self::SenseLocation { context, .. }
            | Self::EmptySense { context }
            | Self::ZeroTables { context }
            | Self::MultipleTables { context, .. }
            | Self::MultipleTableBodies { context, .. }
            | Self::MissingColon { context, .. }
            | Self::ZeroLengthList { context, .. } => context,
        }
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let context = self.context();
        let mut map = HashMap::new();
        map.insert("type".to_string(), serde_json::json!(self.kind()));
        map.insert("word".to_string(), serde_json::json!(context.word));
        map.insert("sense".to_string(), serde_json::json!(context.sense));
        map.insert("language".to_string(), serde_json::json!(context.language));

        match self {
            Self::SenseLocation { reason, .. } => {
                map.insert("reason".to_string(), serde_json::json!(reason));
            }
            Self::MultipleTables { count, .. } | Self::MultipleTableBodies { count, .. } => {
                map.insert("count".to_string(), serde_json::json!(count));
            }
            Self::MissingColon { text, .. } | Self::ZeroLengthList { text, .. } => {
                map.insert("text".to_string(), serde_json::json!(text));
            }
            Self::EmptySense { .. } | Self::ZeroTables { .. } => {}
        }

        map.insert("message".to_string(), serde_json::json!(self.to_string()));
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_context_display() {
        let ctx = ParseContext::new("table").with_sense("furniture");
        assert_eq!(ctx.to_string(), "word 'table', sense 'furniture'");

        let ctx = ctx.with_language("german");
        assert_eq!(
            ctx.to_string(),
            "word 'table', sense 'furniture', language 'german'"
        );
    }

    #[test]
    fn test_missing_colon_to_dict() {
        let err = TranslationParsingError::missing_colon(
            ParseContext::new("table").with_sense("furniture"),
            "Tisch",
        );
        let dict = err.to_dict();

        assert_eq!(dict.get("type").unwrap(), "MissingColonError");
        assert_eq!(dict.get("word").unwrap(), "table");
        assert_eq!(dict.get("text").unwrap(), "Tisch");
        assert!(err.to_string().contains("Missing colon"));
    }

    #[test]
    fn test_kind_names_are_stable() {
        let ctx = ParseContext::new("w");
        assert_eq!(
            TranslationParsingError::EmptySense { context: ctx.clone() }.kind(),
            "EmptySenseError"
        );
        assert_eq!(
            TranslationParsingError::MultipleTables {
                context: ctx.clone(),
                count: 2
            }
            .kind(),
            "MultipleTablesError"
        );
        assert_eq!(
            TranslationParsingError::ZeroTables { context: ctx }.kind(),
            "ZeroTablesError"
        );
    }

    #[test]
    fn test_translation_error_converts() {
        let err: WiktionaryError =
            TranslationParsingError::sense_location(ParseContext::new("w"), "missing anchor").into();
        assert!(matches!(err, WiktionaryError::Translation(_)));
        assert!(err.to_string().contains("missing anchor"));
    }
}
