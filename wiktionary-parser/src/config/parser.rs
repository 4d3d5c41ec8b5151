//! Parser-level configuration.

use serde::{Deserialize, Serialize};

use super::FetchConfig;
use crate::errors::WiktionaryError;
use crate::extract::ExtractOptions;
use crate::profile::{LanguageProfile, ProfileKind, Vocabulary};

/// Everything needed to build a parser.
///
/// Loads from JSON; absent fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Which Wiktionary site to read.
    #[serde(default)]
    pub profile: ProfileKind,
    /// Target language when a fetch names none. Defaults to the profile's.
    #[serde(default)]
    pub default_language: Option<String>,
    /// HTTP settings.
    #[serde(default)]
    pub fetch: FetchConfig,
    /// Accept translation senses whose table is empty.
    #[serde(default)]
    pub allow_empty_senses: bool,
    /// Class every translation sense container must carry.
    #[serde(default)]
    pub sense_marker_class: Option<String>,
    /// Parts of speech added to the profile's list.
    #[serde(default)]
    pub include_parts_of_speech: Vec<String>,
    /// Parts of speech removed from the profile's list.
    #[serde(default)]
    pub exclude_parts_of_speech: Vec<String>,
    /// Relations added to the profile's list.
    #[serde(default)]
    pub include_relations: Vec<String>,
    /// Relations removed from the profile's list.
    #[serde(default)]
    pub exclude_relations: Vec<String>,
}

impl ParserConfig {
    /// Creates a configuration for a site.
    #[must_use]
    pub fn new(profile: ProfileKind) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, WiktionaryError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the default target language.
    #[must_use]
    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = Some(language.into());
        self
    }

    /// Sets the HTTP settings.
    #[must_use]
    pub fn with_fetch(mut self, fetch: FetchConfig) -> Self {
        self.fetch = fetch;
        self
    }

    /// Accepts or rejects empty translation senses.
    #[must_use]
    pub const fn with_allow_empty_senses(mut self, allow: bool) -> Self {
        self.allow_empty_senses = allow;
        self
    }

    /// Requires translation sense containers to carry `class`.
    #[must_use]
    pub fn with_sense_marker(mut self, class: impl Into<String>) -> Self {
        self.sense_marker_class = Some(class.into());
        self
    }

    /// Checks values serde cannot.
    pub fn validate(&self) -> Result<(), WiktionaryError> {
        if self
            .default_language
            .as_ref()
            .is_some_and(|l| l.trim().is_empty())
        {
            return Err(WiktionaryError::config("default_language must not be empty"));
        }
        if !(self.fetch.timeout_seconds.is_finite() && self.fetch.timeout_seconds > 0.0) {
            return Err(WiktionaryError::config(format!(
                "timeout_seconds must be positive, got {}",
                self.fetch.timeout_seconds
            )));
        }
        if self.sense_marker_class.as_ref().is_some_and(|c| c.trim().is_empty()) {
            return Err(WiktionaryError::config("sense_marker_class must not be empty"));
        }
        Ok(())
    }

    /// The site profile with this configuration applied.
    #[must_use]
    pub fn language_profile(&self) -> LanguageProfile {
        let mut profile = self.profile.profile();
        if let Some(language) = &self.default_language {
            profile.default_language = language.to_lowercase();
        }
        if let Some(class) = &self.sense_marker_class {
            profile = profile.with_sense_marker(class.clone());
        }
        profile.vocabulary = self.apply_vocabulary(profile.vocabulary);
        profile
    }

    /// Extraction options for this configuration.
    #[must_use]
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions::from_profile(&self.language_profile())
            .with_allow_empty_senses(self.allow_empty_senses)
    }

    fn apply_vocabulary(&self, mut vocabulary: Vocabulary) -> Vocabulary {
        for term in &self.include_parts_of_speech {
            vocabulary.include_part_of_speech(term);
        }
        for term in &self.exclude_parts_of_speech {
            vocabulary.exclude_part_of_speech(term);
        }
        for term in &self.include_relations {
            vocabulary.include_relation(term);
        }
        for term in &self.exclude_relations {
            vocabulary.exclude_relation(term);
        }
        vocabulary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::LabelMatch;

    #[test]
    fn test_from_json_str() {
        let config = ParserConfig::from_json_str(
            r#"{
                "profile": "spanish",
                "allow_empty_senses": true,
                "include_parts_of_speech": ["Abbreviation"],
                "exclude_relations": ["synonyms"],
                "fetch": {"retry": {"max_retries": 1}}
            }"#,
        )
        .unwrap();

        assert_eq!(config.profile, ProfileKind::Spanish);
        assert_eq!(config.fetch.retry.max_retries, 1);

        let profile = config.language_profile();
        assert_eq!(profile.site_code(), "es");
        assert_eq!(profile.default_language, "español");
        assert_eq!(profile.label_match, LabelMatch::Contains);
        assert!(profile.vocabulary.parts_of_speech().contains("abbreviation"));
        assert!(!profile.vocabulary.relations().contains("synonyms"));
        assert!(config.extract_options().allow_empty_senses);
    }

    #[test]
    fn test_defaults() {
        let config = ParserConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ParserConfig::default());
        let profile = config.language_profile();
        assert_eq!(profile.default_language, "english");
        assert!(profile.sense_marker_class.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = ParserConfig::new(ProfileKind::Russian)
            .with_default_language("English")
            .with_sense_marker("NavFrame");
        let profile = config.language_profile();
        assert_eq!(profile.default_language, "english");
        assert_eq!(profile.sense_marker_class.as_deref(), Some("NavFrame"));
        assert_eq!(
            config.extract_options().sense_marker_class.as_deref(),
            Some("NavFrame")
        );
    }

    #[test]
    fn test_validation_errors() {
        let err = ParserConfig::from_json_str(r#"{"default_language": " "}"#).unwrap_err();
        assert!(matches!(err, WiktionaryError::Config(_)));

        let err = ParserConfig::from_json_str(r#"{"fetch": {"timeout_seconds": 0}}"#).unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));

        let err = ParserConfig::from_json_str(r#"{"profile": "klingon"}"#).unwrap_err();
        assert!(matches!(err, WiktionaryError::Serialization(_)));
    }
}
