//! Joins the flat extractor output into a [`WordDocument`].
//!
//! Ownership follows heading indices:
//!
//! - a definition belongs to the etymology whose range
//!   `[etymology, next etymology)` holds its index;
//! - a pronunciation belongs to an etymology at the same depth or inside
//!   its range, and the last qualifying one wins;
//! - examples and related words belong to a definition whose index is a
//!   string prefix of theirs;
//! - translations belong to a definition when their index lies in
//!   `[definition, next definition)`.
//!
//! Ranges compare indices as plain strings and use `"999"` as the upper
//! bound when there is no successor.

use tracing::debug;

use crate::extract::{Extracted, RawWordData};
use crate::index::SectionIndex;
use crate::model::{DefinitionBlock, EtymologyBlock, RelatedWordGroup, WordDocument};

/// Builds the document from per-category lists.
///
/// Never fails. A page without etymology headings gets one synthetic
/// block with empty text.
#[must_use]
pub fn map_to_object(raw: &RawWordData) -> WordDocument {
    let synthetic;
    let etymologies: &[Extracted<String>] = if raw.etymologies.is_empty() {
        synthetic = [Extracted::new(SectionIndex::root(), "etymology", String::new())];
        &synthetic
    } else {
        &raw.etymologies
    };

    let blocks = etymologies
        .iter()
        .enumerate()
        .map(|(position, etymology)| {
            let next = next_index(etymologies, position);
            build_etymology(raw, etymology, &next)
        })
        .collect::<Vec<_>>();

    debug!(
        etymologies = blocks.len(),
        definitions = blocks.iter().map(|b| b.definitions.len()).sum::<usize>(),
        "Correlated sections"
    );
    WordDocument::new(blocks)
}

fn next_index<T>(items: &[Extracted<T>], position: usize) -> SectionIndex {
    items
        .get(position + 1)
        .map_or_else(SectionIndex::sentinel, |next| next.index.clone())
}

fn build_etymology(
    raw: &RawWordData,
    etymology: &Extracted<String>,
    next: &SectionIndex,
) -> EtymologyBlock {
    let mut block = EtymologyBlock::new(etymology.value.clone());

    for pronunciation in &raw.pronunciations {
        let same_depth = pronunciation.index.digit_count() == etymology.index.digit_count();
        if same_depth || pronunciation.index.in_range(&etymology.index, next) {
            block.pronunciations.clone_from(&pronunciation.value.texts);
            block.audio_links.clone_from(&pronunciation.value.audio);
        }
    }

    for (position, definition) in raw.definitions.iter().enumerate() {
        if definition.index.in_range(&etymology.index, next) {
            let next_definition = next_index(&raw.definitions, position);
            block
                .definitions
                .push(build_definition(raw, definition, &next_definition));
        }
    }
    block
}

fn build_definition(
    raw: &RawWordData,
    definition: &Extracted<Vec<String>>,
    next: &SectionIndex,
) -> DefinitionBlock {
    let mut block = DefinitionBlock::new(definition.label.clone(), definition.value.clone());

    for examples in raw
        .examples
        .iter()
        .filter(|e| e.index.starts_with(&definition.index))
    {
        block.example_uses.extend(examples.value.iter().cloned());
    }

    block.related_words = raw
        .related
        .iter()
        .filter(|r| r.index.starts_with(&definition.index))
        .map(|r| RelatedWordGroup::new(r.label.clone(), r.value.clone()))
        .collect();

    for translations in raw
        .translations
        .iter()
        .filter(|t| t.index.in_range(&definition.index, next))
    {
        block.translations.extend(translations.value.iter().cloned());
    }
    block
}
