//! The typed word document produced by a fetch.
//!
//! A [`WordDocument`] is an ordered list of [`EtymologyBlock`]s. Each block
//! owns its pronunciations and its [`DefinitionBlock`]s, and each definition
//! owns its examples, related words and translation senses. Nothing is
//! shared between blocks.
//!
//! The serialized form is a nested JSON structure:
//!
//! ```json
//! [{ "etymology": "...",
//!    "definitions": [{ "partOfSpeech": "noun", "text": [], "relatedWords": [],
//!                      "examples": [], "translations": [] }],
//!    "pronunciations": { "text": [], "audio": [] } }]
//! ```

mod translation;

pub use translation::{TranslationMap, TranslationSense, TranslationText, TranslationValue};

use serde::{Deserialize, Serialize};

use crate::profile::part_of_speech_abbreviation;

/// A parsed dictionary entry for one word in one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordDocument {
    /// Etymology blocks in page order.
    pub etymologies: Vec<EtymologyBlock>,
}

impl WordDocument {
    /// Creates a document from etymology blocks.
    #[must_use]
    pub fn new(etymologies: Vec<EtymologyBlock>) -> Self {
        Self { etymologies }
    }

    /// True if there are no etymology blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.etymologies.is_empty()
    }

    /// Iterates every definition across all etymologies.
    pub fn definitions(&self) -> impl Iterator<Item = &DefinitionBlock> {
        self.etymologies.iter().flat_map(|e| e.definitions.iter())
    }

    /// `(abbr) gloss lines` for every definition, grouped per etymology.
    #[must_use]
    pub fn meanings(&self) -> Vec<Vec<String>> {
        self.etymologies
            .iter()
            .map(|etymology| {
                etymology
                    .definitions
                    .iter()
                    .map(|d| {
                        format!(
                            "({}) {}",
                            part_of_speech_abbreviation(&d.part_of_speech),
                            d.text.join("\n")
                        )
                    })
                    .collect()
            })
            .collect()
    }

    /// Pronunciation lines per etymology.
    #[must_use]
    pub fn pronunciation_texts(&self) -> Vec<Vec<String>> {
        self.etymologies
            .iter()
            .map(|e| e.pronunciations.clone())
            .collect()
    }

    /// Serializes to the nested JSON structure.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Parses the nested JSON structure.
    pub fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

/// One etymology of a word, with what belongs to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EtymologyBlockRepr", into = "EtymologyBlockRepr")]
pub struct EtymologyBlock {
    /// Etymology prose (empty for the synthetic block).
    pub etymology_text: String,
    /// Pronunciation lines.
    pub pronunciations: Vec<String>,
    /// Audio file URLs.
    pub audio_links: Vec<String>,
    /// Definitions in page order.
    pub definitions: Vec<DefinitionBlock>,
}

impl EtymologyBlock {
    /// Creates an etymology block with the given text.
    #[must_use]
    pub fn new(etymology_text: impl Into<String>) -> Self {
        Self {
            etymology_text: etymology_text.into(),
            ..Default::default()
        }
    }
}

#[derive(Serialize, Deserialize)]
struct EtymologyBlockRepr {
    #[serde(default)]
    etymology: String,
    #[serde(default)]
    definitions: Vec<DefinitionBlock>,
    #[serde(default)]
    pronunciations: PronunciationsRepr,
}

#[derive(Default, Serialize, Deserialize)]
struct PronunciationsRepr {
    #[serde(default)]
    text: Vec<String>,
    #[serde(default)]
    audio: Vec<String>,
}

impl From<EtymologyBlockRepr> for EtymologyBlock {
    fn from(repr: EtymologyBlockRepr) -> Self {
        Self {
            etymology_text: repr.etymology,
            pronunciations: repr.pronunciations.text,
            audio_links: repr.pronunciations.audio,
            definitions: repr.definitions,
        }
    }
}

impl From<EtymologyBlock> for EtymologyBlockRepr {
    fn from(block: EtymologyBlock) -> Self {
        Self {
            etymology: block.etymology_text,
            definitions: block.definitions,
            pronunciations: PronunciationsRepr {
                text: block.pronunciations,
                audio: block.audio_links,
            },
        }
    }
}

/// One part-of-speech section with its glosses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionBlock {
    /// Part of speech; empty for an unmarked "definitions" heading.
    #[serde(default)]
    pub part_of_speech: String,
    /// One entry per gloss line.
    #[serde(default)]
    pub text: Vec<String>,
    /// Usage examples.
    #[serde(default, rename = "examples")]
    pub example_uses: Vec<String>,
    /// Related-word groups.
    #[serde(default)]
    pub related_words: Vec<RelatedWordGroup>,
    /// Translation senses.
    #[serde(default)]
    pub translations: Vec<TranslationSense>,
}

impl DefinitionBlock {
    /// Creates a definition block.
    #[must_use]
    pub fn new(part_of_speech: impl Into<String>, text: Vec<String>) -> Self {
        Self {
            part_of_speech: part_of_speech.into(),
            text,
            ..Default::default()
        }
    }
}

/// Words standing in one relation to the entry (synonyms, antonyms, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedWordGroup {
    /// Relation name.
    #[serde(rename = "relationshipType")]
    pub relation_type: String,
    /// Related words in page order.
    pub words: Vec<String>,
}

impl RelatedWordGroup {
    /// Creates a related-word group.
    #[must_use]
    pub fn new(relation_type: impl Into<String>, words: Vec<String>) -> Self {
        Self {
            relation_type: relation_type.into(),
            words,
        }
    }
}
