//! Language profiles: one generic engine, parameterized per Wiktionary site.
//!
//! The English, Spanish and Russian sites differ in their heading
//! vocabulary, in how heading labels are matched, and in where the
//! etymology text starts relative to its anchor. A [`LanguageProfile`]
//! captures those differences as data plus one injectable function.

mod dicts;
mod translator;
mod vocabulary;

pub use dicts::{part_of_speech_abbreviation, PARTS_OF_SPEECH, RELATIONS};
pub use translator::{DictionaryTranslator, IdentityTranslator, LabelTranslator};
pub use vocabulary::{Vocabulary, FIXED_ITEMS};

use scraper::ElementRef;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::html::{next_element_sibling, parent_element};

/// Picks the first node of a sibling walk, given a section's anchor element.
pub type StartNodeFn = for<'a> fn(ElementRef<'a>) -> Option<ElementRef<'a>>;

/// The walk starts after the anchor's heading container.
pub fn start_after_container(anchor: ElementRef<'_>) -> Option<ElementRef<'_>> {
    parent_element(anchor).and_then(next_element_sibling)
}

/// The walk starts after the anchor element itself.
pub fn start_after_anchor(anchor: ElementRef<'_>) -> Option<ElementRef<'_>> {
    next_element_sibling(anchor)
}

/// The supported Wiktionary sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    /// en.wiktionary.org
    #[default]
    English,
    /// es.wiktionary.org
    Spanish,
    /// ru.wiktionary.org
    Russian,
}

impl ProfileKind {
    /// Builds the profile for this site.
    #[must_use]
    pub fn profile(self) -> LanguageProfile {
        match self {
            Self::English => LanguageProfile::english(),
            Self::Spanish => LanguageProfile::spanish(),
            Self::Russian => LanguageProfile::russian(),
        }
    }

    /// Subdomain code of the site (`en`, `es`, `ru`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
            Self::Russian => "ru",
        }
    }

    /// Parses a site code or name (`en`, `english`, ...).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "en" | "english" => Some(Self::English),
            "es" | "spanish" | "español" => Some(Self::Spanish),
            "ru" | "russian" | "русский" => Some(Self::Russian),
            _ => None,
        }
    }
}

/// How a heading label is tested against a checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelMatch {
    /// The cleaned label must equal a checklist entry.
    #[default]
    Exact,
    /// The cleaned label must contain a checklist entry.
    Contains,
}

impl LabelMatch {
    /// Returns the checklist entry matched by `label`, if any.
    #[must_use]
    pub fn find<'c>(self, label: &str, checklist: &'c [String]) -> Option<&'c str> {
        match self {
            Self::Exact => checklist.iter().find(|c| c.as_str() == label),
            Self::Contains => checklist
                .iter()
                .find(|c| !c.is_empty() && label.contains(c.as_str())),
        }
        .map(String::as_str)
    }
}

/// Per-site configuration of the parsing engine.
#[derive(Clone)]
pub struct LanguageProfile {
    /// Which site this is.
    pub kind: ProfileKind,
    /// Target language used when a fetch does not name one.
    pub default_language: String,
    /// Default checklists for this site.
    pub vocabulary: Vocabulary,
    /// Heading-label translation.
    pub translator: Arc<dyn LabelTranslator>,
    /// Label matching mode.
    pub label_match: LabelMatch,
    /// Where the etymology walk begins.
    pub etymology_start: StartNodeFn,
    /// When set, translation sense containers must carry this class.
    pub sense_marker_class: Option<String>,
    /// Target languages whose entries also use the query word as a
    /// part-of-speech heading.
    pub query_word_languages: Vec<String>,
}

impl fmt::Debug for LanguageProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageProfile")
            .field("kind", &self.kind)
            .field("default_language", &self.default_language)
            .field("label_match", &self.label_match)
            .field("sense_marker_class", &self.sense_marker_class)
            .finish_non_exhaustive()
    }
}

impl Default for LanguageProfile {
    fn default() -> Self {
        Self::english()
    }
}

impl LanguageProfile {
    /// en.wiktionary.org
    #[must_use]
    pub fn english() -> Self {
        Self {
            kind: ProfileKind::English,
            default_language: "english".to_string(),
            vocabulary: Vocabulary::new(),
            translator: Arc::new(IdentityTranslator),
            label_match: LabelMatch::Exact,
            etymology_start: start_after_container,
            sense_marker_class: None,
            query_word_languages: vec!["chinese".to_string()],
        }
    }

    /// es.wiktionary.org
    #[must_use]
    pub fn spanish() -> Self {
        let mut vocabulary = Vocabulary::new();
        vocabulary.include_part_of_speech("verbal form");
        Self {
            kind: ProfileKind::Spanish,
            default_language: "español".to_string(),
            vocabulary,
            translator: Arc::new(DictionaryTranslator::from_pairs(dicts::ENGLISH_SPANISH)),
            label_match: LabelMatch::Contains,
            etymology_start: start_after_anchor,
            sense_marker_class: None,
            query_word_languages: Vec::new(),
        }
    }

    /// ru.wiktionary.org
    #[must_use]
    pub fn russian() -> Self {
        Self {
            kind: ProfileKind::Russian,
            default_language: "русский".to_string(),
            vocabulary: Vocabulary::new(),
            translator: Arc::new(DictionaryTranslator::from_pairs(dicts::ENGLISH_RUSSIAN)),
            label_match: LabelMatch::Exact,
            etymology_start: start_after_container,
            sense_marker_class: None,
            query_word_languages: Vec::new(),
        }
    }

    /// Subdomain code of the site.
    #[must_use]
    pub const fn site_code(&self) -> &'static str {
        self.kind.code()
    }

    /// Requires translation sense containers to carry `class`.
    #[must_use]
    pub fn with_sense_marker(mut self, class: impl Into<String>) -> Self {
        self.sense_marker_class = Some(class.into());
        self
    }
}
