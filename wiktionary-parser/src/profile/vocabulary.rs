//! Runtime-mutable heading vocabularies.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::dicts::{PARTS_OF_SPEECH, RELATIONS};

/// Heading labels recognized regardless of configuration.
pub const FIXED_ITEMS: &[&str] = &["etymology", "pronunciation", "translations"];

/// The configurable part-of-speech and relation checklists.
///
/// Terms are stored lowercase, in English.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    parts_of_speech: BTreeSet<String>,
    relations: BTreeSet<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::from_lists(PARTS_OF_SPEECH, RELATIONS)
    }
}

impl Vocabulary {
    /// Creates a vocabulary from the default lists.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a vocabulary from explicit lists.
    #[must_use]
    pub fn from_lists(parts_of_speech: &[&str], relations: &[&str]) -> Self {
        Self {
            parts_of_speech: parts_of_speech.iter().map(|p| p.to_lowercase()).collect(),
            relations: relations.iter().map(|r| r.to_lowercase()).collect(),
        }
    }

    /// Adds a part of speech. Returns false if it was already present.
    pub fn include_part_of_speech(&mut self, part_of_speech: &str) -> bool {
        self.parts_of_speech.insert(part_of_speech.to_lowercase())
    }

    /// Removes a part of speech. Returns false if it was not present.
    pub fn exclude_part_of_speech(&mut self, part_of_speech: &str) -> bool {
        self.parts_of_speech.remove(&part_of_speech.to_lowercase())
    }

    /// Adds a relation. Returns false if it was already present.
    pub fn include_relation(&mut self, relation: &str) -> bool {
        self.relations.insert(relation.to_lowercase())
    }

    /// Removes a relation. Returns false if it was not present.
    pub fn exclude_relation(&mut self, relation: &str) -> bool {
        self.relations.remove(&relation.to_lowercase())
    }

    /// Recognized parts of speech.
    #[must_use]
    pub const fn parts_of_speech(&self) -> &BTreeSet<String> {
        &self.parts_of_speech
    }

    /// Recognized relations.
    #[must_use]
    pub const fn relations(&self) -> &BTreeSet<String> {
        &self.relations
    }

    /// Every heading label that belongs to a word entry.
    #[must_use]
    pub fn included_items(&self) -> Vec<String> {
        self.relations
            .iter()
            .chain(self.parts_of_speech.iter())
            .cloned()
            .chain(FIXED_ITEMS.iter().map(|s| (*s).to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_and_exclude_are_case_insensitive() {
        let mut vocab = Vocabulary::new();
        assert!(vocab.include_part_of_speech("Abbreviation"));
        assert!(!vocab.include_part_of_speech("abbreviation"));
        assert!(vocab.parts_of_speech().contains("abbreviation"));

        assert!(vocab.exclude_part_of_speech("NOUN"));
        assert!(!vocab.parts_of_speech().contains("noun"));
        assert!(!vocab.exclude_part_of_speech("noun"));
    }

    #[test]
    fn test_relations() {
        let mut vocab = Vocabulary::new();
        assert!(vocab.relations().contains("synonyms"));
        assert!(vocab.include_relation("Derived terms"));
        assert!(vocab.exclude_relation("synonyms"));
        assert!(vocab.included_items().contains(&"derived terms".to_string()));
        assert!(!vocab.included_items().contains(&"synonyms".to_string()));
    }

    #[test]
    fn test_included_items_has_fixed_labels() {
        let items = Vocabulary::new().included_items();
        for fixed in FIXED_ITEMS {
            assert!(items.contains(&(*fixed).to_string()));
        }
        assert!(items.contains(&"noun".to_string()));
    }
}
