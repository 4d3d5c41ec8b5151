//! Heading-label translation between English and a site's language.

use std::collections::HashMap;
use std::fmt::Debug;

/// Maps English vocabulary terms to a site's heading labels and back.
pub trait LabelTranslator: Send + Sync + Debug {
    /// English term to site label. Unknown terms are returned unchanged.
    fn translate(&self, term: &str) -> String;

    /// Site label to English term. Unknown labels are returned unchanged.
    fn untranslate(&self, label: &str) -> String;

    /// Translates every term of a list.
    fn translate_list(&self, terms: &[String]) -> Vec<String> {
        terms.iter().map(|t| self.translate(t)).collect()
    }
}

/// Translator for sites whose headings are already English.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl LabelTranslator for IdentityTranslator {
    fn translate(&self, term: &str) -> String {
        term.to_string()
    }

    fn untranslate(&self, label: &str) -> String {
        label.to_string()
    }
}

/// Bidirectional dictionary lookup.
#[derive(Debug, Clone, Default)]
pub struct DictionaryTranslator {
    forward: HashMap<String, String>,
    backward: HashMap<String, String>,
}

impl DictionaryTranslator {
    /// Builds from `(english, site)` pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut forward = HashMap::with_capacity(pairs.len());
        let mut backward = HashMap::with_capacity(pairs.len());
        for (english, site) in pairs {
            forward.insert((*english).to_string(), (*site).to_string());
            backward.insert((*site).to_string(), (*english).to_string());
        }
        Self { forward, backward }
    }
}

impl LabelTranslator for DictionaryTranslator {
    fn translate(&self, term: &str) -> String {
        self.forward
            .get(term)
            .cloned()
            .unwrap_or_else(|| term.to_string())
    }

    fn untranslate(&self, label: &str) -> String {
        self.backward
            .get(label)
            .cloned()
            .unwrap_or_else(|| label.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_round_trip() {
        let t = DictionaryTranslator::from_pairs(&[("noun", "sustantivo"), ("verb", "verbo")]);
        assert_eq!(t.translate("noun"), "sustantivo");
        assert_eq!(t.untranslate("verbo"), "verb");
        assert_eq!(t.translate("adverb"), "adverb");
    }

    #[test]
    fn test_translate_list() {
        let t = DictionaryTranslator::from_pairs(&[("etymology", "etimología")]);
        let out = t.translate_list(&["etymology".to_string(), "noun".to_string()]);
        assert_eq!(out, vec!["etimología".to_string(), "noun".to_string()]);
    }

    #[test]
    fn test_identity() {
        assert_eq!(IdentityTranslator.translate("noun"), "noun");
        assert_eq!(IdentityTranslator.untranslate("noun"), "noun");
    }
}
