//! Section location: which headings of a page hold which kind of content.
//!
//! A fetch first scopes the page's table of contents to the target
//! language ([`SectionLocator::context`]), then asks for the headings of
//! each [`Category`]. Labels are matched in the site language and reported
//! back in English.

mod toc;

pub use toc::{clean_label, scope_to_language, table_of_contents, title_case, TocEntry, WordContents};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::html::Page;
use crate::index::SectionIndex;
use crate::profile::{LabelMatch, LabelTranslator, LanguageProfile, Vocabulary};

/// Content categories a heading can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Etymology prose.
    Etymology,
    /// Pronunciation lines and audio.
    Pronunciation,
    /// Part-of-speech sections.
    Definitions,
    /// Synonyms, antonyms and other relations.
    Related,
    /// Translation tables.
    Translations,
}

impl Category {
    /// All categories in extraction order.
    pub const ALL: [Self; 5] = [
        Self::Etymology,
        Self::Pronunciation,
        Self::Definitions,
        Self::Related,
        Self::Translations,
    ];

    /// Category name as used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Etymology => "etymology",
            Self::Pronunciation => "pronunciation",
            Self::Definitions => "definitions",
            Self::Related => "related",
            Self::Translations => "translations",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A heading found for a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatedSection {
    /// Table-of-contents index.
    pub index: SectionIndex,
    /// Id of the heading's anchor element.
    pub anchor_id: String,
    /// Matched checklist label, in English.
    pub label: String,
}

impl LocatedSection {
    /// Creates a located section.
    #[must_use]
    pub fn new(index: SectionIndex, anchor_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            index,
            anchor_id: anchor_id.into(),
            label: label.into(),
        }
    }
}

/// Everything extraction needs to know about one fetched page.
///
/// Built once per page and only read afterwards.
#[derive(Debug)]
pub struct FetchContext {
    /// The queried word.
    pub word: String,
    /// The target language, lowercase.
    pub language: String,
    /// The parsed page.
    pub page: Page,
    /// Headings scoped to the target language.
    pub contents: WordContents,
}

/// Finds category headings, using a mutable vocabulary.
#[derive(Clone)]
pub struct SectionLocator {
    vocabulary: Vocabulary,
    translator: Arc<dyn LabelTranslator>,
    label_match: LabelMatch,
    query_word_languages: Vec<String>,
}

impl fmt::Debug for SectionLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionLocator")
            .field("vocabulary", &self.vocabulary)
            .field("label_match", &self.label_match)
            .field("query_word_languages", &self.query_word_languages)
            .finish_non_exhaustive()
    }
}

impl SectionLocator {
    /// Creates a locator from a site profile.
    #[must_use]
    pub fn new(profile: &LanguageProfile) -> Self {
        Self {
            vocabulary: profile.vocabulary.clone(),
            translator: Arc::clone(&profile.translator),
            label_match: profile.label_match,
            query_word_languages: profile.query_word_languages.clone(),
        }
    }

    /// The current vocabulary.
    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The vocabulary, for include/exclude changes.
    pub fn vocabulary_mut(&mut self) -> &mut Vocabulary {
        &mut self.vocabulary
    }

    /// Parses `body` and scopes its headings to `language`.
    #[must_use]
    pub fn context(&self, word: &str, language: &str, body: &str) -> FetchContext {
        let page = Page::parse(body);
        let language = language.to_lowercase();
        let mut included = self.vocabulary.included_items();
        if self.uses_query_word(&language) {
            included.push(word.to_lowercase());
        }
        let included = self.translator.translate_list(&included);
        let contents = scope_to_language(
            table_of_contents(&page),
            &language,
            &included,
            self.label_match,
        );
        FetchContext {
            word: word.to_string(),
            language,
            page,
            contents,
        }
    }

    /// Headings of `category` in page order.
    #[must_use]
    pub fn locate(&self, category: Category, ctx: &FetchContext) -> Vec<LocatedSection> {
        let english = self.checklist(category, ctx);
        let translated = self.translator.translate_list(&english);

        let sections = match &ctx.contents {
            WordContents::Scoped(entries) => entries
                .iter()
                .filter_map(|entry| {
                    let label = clean_label(&entry.label);
                    self.label_match.find(&label, &translated).map(|matched| {
                        LocatedSection::new(
                            entry.index.clone(),
                            entry.anchor_id.clone(),
                            self.translator.untranslate(matched),
                        )
                    })
                })
                .collect(),
            WordContents::Unscoped => english
                .iter()
                .zip(&translated)
                .filter_map(|(label, site_label)| {
                    let id = title_case(site_label);
                    ctx.page
                        .anchor(&id)
                        .map(|_| LocatedSection::new(SectionIndex::new("1"), id, label.clone()))
                })
                .collect(),
            WordContents::LanguageMissing => Vec::new(),
        };

        debug!(
            word = %ctx.word,
            category = %category,
            count = sections.len(),
            "Located sections"
        );
        sections
    }

    fn checklist(&self, category: Category, ctx: &FetchContext) -> Vec<String> {
        match category {
            Category::Etymology => vec!["etymology".to_string()],
            Category::Pronunciation => vec!["pronunciation".to_string()],
            Category::Translations => vec!["translations".to_string()],
            Category::Related => self.vocabulary.relations().iter().cloned().collect(),
            Category::Definitions => {
                let mut list: Vec<String> =
                    self.vocabulary.parts_of_speech().iter().cloned().collect();
                if self.uses_query_word(&ctx.language) {
                    list.push(ctx.word.to_lowercase());
                }
                list
            }
        }
    }

    fn uses_query_word(&self, language: &str) -> bool {
        self.query_word_languages
            .iter()
            .any(|l| l.eq_ignore_ascii_case(language))
    }
}
