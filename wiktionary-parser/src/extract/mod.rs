//! Section extractors.
//!
//! Each extractor takes the located headings of one category and walks the
//! page from every heading's anchor, collecting raw text until a boundary
//! specific to that category. The results are flat lists tagged with the
//! heading index; [`crate::correlate`] turns them into a document.
//!
//! Off-page translation tables cannot be read during this pass: the page
//! tree is not kept across network calls. They come back as
//! [`PendingLookup`]s, which the parser resolves afterwards.

mod definitions;
mod etymology;
mod examples;
mod pronunciation;
mod related;
pub mod translations;

pub use definitions::extract_definitions;
pub use etymology::extract_etymologies;
pub use examples::extract_examples;
pub use pronunciation::extract_pronunciations;
pub use related::extract_related;
pub use translations::{extract_translations, parse_subpage, SubpageLink, TranslationSource};

use scraper::ElementRef;
use serde::{Deserialize, Serialize};
use std::iter;
use tracing::debug;

use crate::errors::ParseContext;
use crate::html::{is_named, next_element_sibling};
use crate::index::SectionIndex;
use crate::locator::{Category, FetchContext, SectionLocator};
use crate::model::TranslationSense;
use crate::profile::{start_after_container, LanguageProfile, StartNodeFn};

/// Heading tags that end a section walk.
pub(crate) const HEADINGS: &[&str] = &["h3", "h4", "h5"];

/// Knobs of the extraction pass.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Where the etymology walk begins.
    pub etymology_start: StartNodeFn,
    /// When set, translation sense containers must carry this class.
    pub sense_marker_class: Option<String>,
    /// Accept senses whose table has no language items.
    pub allow_empty_senses: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            etymology_start: start_after_container,
            sense_marker_class: None,
            allow_empty_senses: false,
        }
    }
}

impl ExtractOptions {
    /// Options taken from a site profile.
    #[must_use]
    pub fn from_profile(profile: &LanguageProfile) -> Self {
        Self {
            etymology_start: profile.etymology_start,
            sense_marker_class: profile.sense_marker_class.clone(),
            allow_empty_senses: false,
        }
    }

    /// Requires translation sense containers to carry `class`.
    #[must_use]
    pub fn with_sense_marker(mut self, class: impl Into<String>) -> Self {
        self.sense_marker_class = Some(class.into());
        self
    }

    /// Accepts or rejects empty translation senses.
    #[must_use]
    pub const fn with_allow_empty_senses(mut self, allow: bool) -> Self {
        self.allow_empty_senses = allow;
        self
    }
}

/// A value extracted from one heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extracted<T> {
    /// Index of the heading.
    pub index: SectionIndex,
    /// Matched heading label, in English.
    pub label: String,
    /// What was read under the heading.
    pub value: T,
}

impl<T> Extracted<T> {
    /// Creates an extracted value.
    #[must_use]
    pub fn new(index: SectionIndex, label: impl Into<String>, value: T) -> Self {
        Self {
            index,
            label: label.into(),
            value,
        }
    }
}

/// Pronunciation lines and audio files of one heading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PronunciationData {
    /// Visible pronunciation lines.
    pub texts: Vec<String>,
    /// Audio source URLs.
    pub audio: Vec<String>,
}

/// The flat per-category lists read from a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawWordData {
    /// Etymology prose per heading.
    pub etymologies: Vec<Extracted<String>>,
    /// Pronunciations per heading.
    pub pronunciations: Vec<Extracted<PronunciationData>>,
    /// Gloss lines per part-of-speech heading.
    pub definitions: Vec<Extracted<Vec<String>>>,
    /// Example uses, one entry per ordered list.
    pub examples: Vec<Extracted<Vec<String>>>,
    /// Related words per relation heading.
    pub related: Vec<Extracted<Vec<String>>>,
    /// Translation senses per translations heading.
    pub translations: Vec<Extracted<Vec<TranslationSense>>>,
}

/// Translations that live on a sub-page and still have to be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLookup {
    /// Position in [`RawWordData::translations`] to fill.
    pub slot: usize,
    /// Where the translations are.
    pub link: SubpageLink,
    /// Error context for the lookup.
    pub context: ParseContext,
}

/// Everything read from one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageExtraction {
    /// Extracted lists; pending slots hold no senses yet.
    pub raw: RawWordData,
    /// Sub-page lookups, in document order.
    pub pending: Vec<PendingLookup>,
}

/// Runs every extractor over a page.
#[must_use]
pub fn extract_page(
    locator: &SectionLocator,
    ctx: &FetchContext,
    options: &ExtractOptions,
) -> PageExtraction {
    let definition_sections = locator.locate(Category::Definitions, ctx);

    let mut raw = RawWordData {
        etymologies: extract_etymologies(
            ctx,
            &locator.locate(Category::Etymology, ctx),
            options.etymology_start,
        ),
        pronunciations: extract_pronunciations(ctx, &locator.locate(Category::Pronunciation, ctx)),
        examples: extract_examples(ctx, &definition_sections),
        definitions: extract_definitions(ctx, &definition_sections),
        related: extract_related(ctx, &locator.locate(Category::Related, ctx)),
        translations: Vec::new(),
    };

    let mut pending = Vec::new();
    let translation_sections = locator.locate(Category::Translations, ctx);
    let sources = extract_translations(ctx, &translation_sections, options);
    for (slot, section) in sources.into_iter().enumerate() {
        let senses = match section.value {
            TranslationSource::Parsed(senses) => senses,
            TranslationSource::Subpage { link, context } => {
                pending.push(PendingLookup {
                    slot,
                    link,
                    context,
                });
                Vec::new()
            }
        };
        raw.translations
            .push(Extracted::new(section.index, section.label, senses));
    }

    debug!(
        word = %ctx.word,
        etymologies = raw.etymologies.len(),
        pronunciations = raw.pronunciations.len(),
        definitions = raw.definitions.len(),
        examples = raw.examples.len(),
        related = raw.related.len(),
        translations = raw.translations.len(),
        pending = pending.len(),
        "Extracted page"
    );
    PageExtraction { raw, pending }
}

/// `start` and every following sibling element.
pub(crate) fn walk_from(start: Option<ElementRef<'_>>) -> impl Iterator<Item = ElementRef<'_>> {
    iter::successors(start, |el| next_element_sibling(*el))
}

/// Siblings from `start` up to, not including, the next section heading.
pub(crate) fn walk_section(start: Option<ElementRef<'_>>) -> impl Iterator<Item = ElementRef<'_>> {
    walk_from(start).take_while(|el| !is_named(*el, HEADINGS))
}

/// Trimmed text, or `None` if only whitespace.
pub(crate) fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::LanguageProfile;
    use crate::testing::fixtures;

    #[test]
    fn test_extract_page_counts() {
        let locator = SectionLocator::new(&LanguageProfile::english());
        let ctx = locator.context("table", "english", &fixtures::table_page());
        let extraction = extract_page(&locator, &ctx, &ExtractOptions::default());
        let raw = extraction.raw;

        assert_eq!(raw.etymologies.len(), 2);
        assert_eq!(raw.pronunciations.len(), 1);
        assert_eq!(raw.definitions.len(), 2);
        assert_eq!(raw.related.len(), 1);
        assert_eq!(raw.translations.len(), 2);
        assert_eq!(extraction.pending.len(), 1);
        assert_eq!(extraction.pending[0].slot, 1);
        assert!(raw.translations[1].value.is_empty());
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  a b "), Some("a b".to_string()));
        assert_eq!(non_empty(" \n "), None);
    }
}
