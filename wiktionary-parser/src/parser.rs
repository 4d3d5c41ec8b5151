//! The fetch pipeline.
//!
//! A fetch downloads the printable page, scopes it to the target language,
//! runs every extractor, resolves off-page translation tables one request
//! at a time, and correlates the results into a [`WordDocument`].

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use crate::config::ParserConfig;
use crate::correlate::map_to_object;
use crate::errors::{TranslationParsingError, WiktionaryError};
use crate::extract::translations::log_parse_error;
use crate::extract::{extract_page, parse_subpage, ExtractOptions, PageExtraction, PendingLookup};
use crate::fetch::{page_url, Fetcher, HttpFetcher};
use crate::locator::{SectionLocator, WordContents};
use crate::model::{TranslationSense, WordDocument};
use crate::profile::LanguageProfile;

/// Parameters of one fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest {
    /// The word to look up.
    pub word: String,
    /// Target language; the parser default when absent.
    #[serde(default)]
    pub language: Option<String>,
    /// Revision to pin.
    #[serde(default)]
    pub old_id: Option<String>,
    /// Return serialized JSON instead of the typed document.
    #[serde(default)]
    pub raw: bool,
}

impl FetchRequest {
    /// Creates a request for `word`.
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ..Self::default()
        }
    }

    /// Sets the target language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Pins a revision.
    #[must_use]
    pub fn with_old_id(mut self, old_id: impl Into<String>) -> Self {
        self.old_id = Some(old_id.into());
        self
    }

    /// Requests serialized output.
    #[must_use]
    pub const fn raw(mut self) -> Self {
        self.raw = true;
        self
    }
}

/// What a [`FetchRequest`] produced.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutput {
    /// The typed document.
    Document(WordDocument),
    /// The document as nested JSON.
    Raw(serde_json::Value),
}

impl FetchOutput {
    /// The output as JSON, whichever form it is in.
    pub fn into_json(self) -> Result<serde_json::Value, WiktionaryError> {
        match self {
            Self::Document(document) => Ok(document.to_json()?),
            Self::Raw(value) => Ok(value),
        }
    }
}

/// Scrapes word entries from one Wiktionary site.
///
/// The vocabulary and default language are mutable between fetches. A
/// fetch itself only reads the parser.
pub struct WiktionaryParser<F: Fetcher = HttpFetcher> {
    fetcher: F,
    profile: LanguageProfile,
    locator: SectionLocator,
    options: ExtractOptions,
    language: String,
}

impl<F: Fetcher> std::fmt::Debug for WiktionaryParser<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WiktionaryParser")
            .field("profile", &self.profile)
            .field("locator", &self.locator)
            .field("options", &self.options)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl WiktionaryParser<HttpFetcher> {
    /// An English-site parser with default settings.
    pub fn new() -> Result<Self, WiktionaryError> {
        Self::from_config(&ParserConfig::default())
    }

    /// A parser over HTTP configured by `config`.
    pub fn from_config(config: &ParserConfig) -> Result<Self, WiktionaryError> {
        config.validate()?;
        let fetcher = HttpFetcher::new(config.fetch.clone())?;
        Ok(Self::with_fetcher(fetcher, config))
    }
}

impl<F: Fetcher> WiktionaryParser<F> {
    /// A parser using `fetcher` for every request.
    #[must_use]
    pub fn with_fetcher(fetcher: F, config: &ParserConfig) -> Self {
        let profile = config.language_profile();
        Self {
            fetcher,
            locator: SectionLocator::new(&profile),
            options: config.extract_options(),
            language: profile.default_language.clone(),
            profile,
        }
    }

    /// The site profile.
    #[must_use]
    pub const fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    /// The fetcher.
    #[must_use]
    pub const fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Target language used when a fetch names none.
    #[must_use]
    pub fn default_language(&self) -> &str {
        &self.language
    }

    /// Changes the default target language.
    pub fn set_default_language(&mut self, language: &str) {
        self.language = language.trim().to_lowercase();
    }

    /// Recognizes an extra part-of-speech heading.
    pub fn include_part_of_speech(&mut self, part_of_speech: &str) -> bool {
        self.locator.vocabulary_mut().include_part_of_speech(part_of_speech)
    }

    /// Stops recognizing a part-of-speech heading.
    pub fn exclude_part_of_speech(&mut self, part_of_speech: &str) -> bool {
        self.locator.vocabulary_mut().exclude_part_of_speech(part_of_speech)
    }

    /// Recognizes an extra relation heading.
    pub fn include_relation(&mut self, relation: &str) -> bool {
        self.locator.vocabulary_mut().include_relation(relation)
    }

    /// Stops recognizing a relation heading.
    pub fn exclude_relation(&mut self, relation: &str) -> bool {
        self.locator.vocabulary_mut().exclude_relation(relation)
    }

    /// Fetches and parses `word`.
    ///
    /// A page without a section for the language yields an empty document.
    pub async fn fetch(
        &self,
        word: &str,
        language: Option<&str>,
        old_id: Option<&str>,
    ) -> Result<WordDocument, WiktionaryError> {
        let language = self.resolve_language(language);
        let url = page_url(self.profile.site_code(), word, old_id);
        let start = Instant::now();
        info!(word, language = %language, url = %url, "Fetching word");

        let page = self.fetcher.fetch(&url).await?;
        let document = self.parse_document(word, &language, &page.text).await;

        info!(
            word,
            language = %language,
            etymologies = document.etymologies.len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Fetched word"
        );
        Ok(document)
    }

    /// Runs a [`FetchRequest`].
    pub async fn fetch_request(&self, request: &FetchRequest) -> Result<FetchOutput, WiktionaryError> {
        let document = self
            .fetch(
                &request.word,
                request.language.as_deref(),
                request.old_id.as_deref(),
            )
            .await?;
        if request.raw {
            Ok(FetchOutput::Raw(document.to_json()?))
        } else {
            Ok(FetchOutput::Document(document))
        }
    }

    /// Parses an already downloaded page, fetching translation sub-pages
    /// as needed.
    pub async fn parse_document(&self, word: &str, language: &str, body: &str) -> WordDocument {
        let Some(mut extraction) = self.extract(word, language, body) else {
            info!(word, language, "Language not found on page");
            return WordDocument::default();
        };
        for lookup in std::mem::take(&mut extraction.pending) {
            let senses = self.resolve_lookup(&lookup).await;
            if let Some(slot) = extraction.raw.translations.get_mut(lookup.slot) {
                slot.value = senses;
            }
        }
        map_to_object(&extraction.raw)
    }

    /// Reads a page without any network access.
    ///
    /// Returns `None` when the page lists other languages but not
    /// `language`. Sub-page lookups are left pending.
    #[must_use]
    pub fn extract(&self, word: &str, language: &str, body: &str) -> Option<PageExtraction> {
        let ctx = self.locator.context(word, language, body);
        if ctx.contents == WordContents::LanguageMissing {
            return None;
        }
        Some(extract_page(&self.locator, &ctx, &self.options))
    }

    async fn resolve_lookup(&self, lookup: &PendingLookup) -> Vec<TranslationSense> {
        let url = page_url(self.profile.site_code(), &lookup.link.page, None);
        debug!(url = %url, sense = %lookup.context.sense, "Fetching translations sub-page");
        let result = match self.fetcher.fetch(&url).await {
            Ok(page) => parse_subpage(&page.text, &lookup.link, &lookup.context, &self.options),
            Err(e) => Err(TranslationParsingError::sense_location(
                lookup.context.clone(),
                format!("cannot fetch {url}: {e}"),
            )),
        };
        result.unwrap_or_else(|err| {
            log_parse_error(&err);
            Vec::new()
        })
    }

    fn resolve_language(&self, language: Option<&str>) -> String {
        language
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map_or_else(|| self.language.clone(), str::to_lowercase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileKind;
    use crate::testing::{fixtures, StaticFetcher};

    fn parser() -> WiktionaryParser<StaticFetcher> {
        WiktionaryParser::with_fetcher(fixtures::table_fetcher(), &ParserConfig::default())
    }

    #[test]
    fn test_default_language() {
        let mut parser = parser();
        assert_eq!(parser.default_language(), "english");
        parser.set_default_language(" Spanish ");
        assert_eq!(parser.default_language(), "spanish");
        assert_eq!(parser.resolve_language(None), "spanish");
        assert_eq!(parser.resolve_language(Some("French")), "french");
        assert_eq!(parser.resolve_language(Some("")), "spanish");
    }

    #[test]
    fn test_from_profile_config() {
        let config = ParserConfig::new(ProfileKind::Russian);
        let parser = WiktionaryParser::with_fetcher(StaticFetcher::new(), &config);
        assert_eq!(parser.default_language(), "русский");
        assert_eq!(parser.profile().site_code(), "ru");
    }

    #[test]
    fn test_vocabulary_changes() {
        let mut parser = parser();
        assert!(parser.include_part_of_speech("Abbreviation"));
        assert!(!parser.include_part_of_speech("abbreviation"));
        assert!(parser.exclude_relation("synonyms"));
        assert!(!parser.exclude_relation("synonyms"));

        let extraction = parser
            .extract("table", "english", &fixtures::table_page())
            .unwrap();
        assert!(extraction.raw.related.is_empty());
    }

    #[test]
    fn test_extract_missing_language() {
        let parser = parser();
        assert!(parser
            .extract("table", "german", &fixtures::table_page())
            .is_none());
    }

    #[tokio::test]
    async fn test_fetch_request_raw() {
        let parser = parser();
        let request = FetchRequest::new("table")
            .with_old_id(fixtures::TABLE_OLD_ID)
            .raw();

        let output = parser.fetch_request(&request).await.unwrap();
        let FetchOutput::Raw(value) = output else {
            panic!("expected raw output");
        };
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[0]["definitions"][0]["partOfSpeech"], "noun");
    }

    #[tokio::test]
    async fn test_fetch_http_error_propagates() {
        let parser = parser();
        let err = parser.fetch("chair", None, None).await.unwrap_err();
        assert!(matches!(err, WiktionaryError::Status { status: 404, .. }));
    }
}
