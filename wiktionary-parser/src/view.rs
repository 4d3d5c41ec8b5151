//! A language-indexed view of a document's translations.
//!
//! Every translation of every sense is filed under its language key, as a
//! line `(abbr) sense: value`. Dialect maps are flattened into keys of the
//! form `language-dialect`.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::model::{TranslationValue, WordDocument};
use crate::profile::part_of_speech_abbreviation;

/// Read-only translation index built from a finished document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranslationView {
    texts: BTreeMap<String, String>,
    entries: BTreeMap<String, BTreeMap<String, String>>,
}

impl TranslationView {
    /// Indexes every translation of `document`.
    #[must_use]
    pub fn new(document: &WordDocument) -> Self {
        let mut lines: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut entries: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();

        for definition in document.definitions() {
            let abbreviation = part_of_speech_abbreviation(&definition.part_of_speech);
            for sense in &definition.translations {
                let heading = format!("({abbreviation}) {}", sense.sense);
                for (language, value) in &sense.translations {
                    for (key, text) in flatten(language, value) {
                        lines
                            .entry(key.clone())
                            .or_default()
                            .push(format!("{heading}: {text}"));
                        entries.entry(key).or_default().insert(heading.clone(), text);
                    }
                }
            }
        }

        let texts = lines
            .into_iter()
            .map(|(key, lines)| {
                let mut text = lines.join("\n");
                text.push('\n');
                (key, text)
            })
            .collect();
        Self { texts, entries }
    }

    /// Language keys in sorted order.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        self.texts.keys().map(String::as_str).collect()
    }

    /// True if the document had no translations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// All lines for a language key.
    #[must_use]
    pub fn text(&self, language: &str) -> Option<&str> {
        self.texts.get(language).map(String::as_str)
    }

    /// `(abbr) sense` to value, for a language key.
    #[must_use]
    pub fn entries(&self, language: &str) -> Option<&BTreeMap<String, String>> {
        self.entries.get(language)
    }

    /// Keys starting with any of `prefixes`, with their text.
    ///
    /// Matching is case-sensitive against the lowercase keys. An empty
    /// prefix list selects every key.
    #[must_use]
    pub fn lookup<S: AsRef<str>>(&self, prefixes: &[S]) -> Vec<(&str, &str)> {
        if prefixes.is_empty() {
            return self
                .texts
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
        }
        let mut found: Vec<(&str, &str)> = Vec::new();
        for prefix in prefixes {
            for (key, text) in &self.texts {
                if key.starts_with(prefix.as_ref()) && !found.iter().any(|(k, _)| *k == key.as_str()) {
                    found.push((key.as_str(), text.as_str()));
                }
            }
        }
        found
    }

    /// Formats [`lookup`](Self::lookup) results as `\t>> key` blocks.
    #[must_use]
    pub fn render<S: AsRef<str>>(&self, prefixes: &[S]) -> String {
        self.lookup(prefixes)
            .into_iter()
            .map(|(key, text)| format!("\t>> {key}\n{text}\n"))
            .collect()
    }
}

fn flatten(language: &str, value: &TranslationValue) -> Vec<(String, String)> {
    match value {
        TranslationValue::Dialects(dialects) => dialects
            .iter()
            .map(|(dialect, text)| {
                let dialect = dialect
                    .replace(&format!("{language} "), "")
                    .replace(&format!(" {language}"), "");
                (format!("{language}-{dialect}"), text.joined())
            })
            .collect(),
        leaf => leaf
            .as_text()
            .map(|text| vec![(language.to_string(), text.joined())])
            .unwrap_or_default(),
    }
}
