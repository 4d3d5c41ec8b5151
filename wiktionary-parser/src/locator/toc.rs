//! Table-of-contents scanning.

use scraper::ElementRef;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::html::{
    descendant_elements, has_class, parent_element, previous_element_sibling, text_of, Page,
};
use crate::index::SectionIndex;
use crate::profile::LabelMatch;

/// One table-of-contents line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Dotted index from `span.tocnumber`.
    pub index: SectionIndex,
    /// Visible label from `span.toctext`.
    pub label: String,
    /// Target of the entry's link, without `#`.
    pub anchor_id: String,
}

/// The headings of a page that belong to the target language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordContents {
    /// Nothing is scoped to the language: the page has no table of contents
    /// (single-section page), or the language's heading has no recognized
    /// heading under it. Sections are then found by anchor id.
    Unscoped,
    /// The page has a table of contents without the target language.
    LanguageMissing,
    /// Recognized headings nested under the target language.
    Scoped(Vec<TocEntry>),
}

impl WordContents {
    /// The scoped entries, or nothing.
    #[must_use]
    pub fn entries(&self) -> &[TocEntry] {
        match self {
            Self::Scoped(entries) => entries,
            Self::Unscoped | Self::LanguageMissing => &[],
        }
    }
}

/// Reads every `span.toctext` of the page with its number and link target.
///
/// Lines whose number is missing or not a dotted index are skipped.
#[must_use]
pub fn table_of_contents(page: &Page) -> Vec<TocEntry> {
    descendant_elements(page.root())
        .filter(|el| el.value().name() == "span" && has_class(*el, "toctext"))
        .filter_map(toc_entry)
        .collect()
}

fn toc_entry(text_span: ElementRef<'_>) -> Option<TocEntry> {
    let label = text_of(text_span);
    let number = previous_element_sibling(text_span)
        .filter(|prev| has_class(*prev, "tocnumber"))
        .map(text_of)
        .unwrap_or_default();
    let index = match SectionIndex::parse(&number) {
        Ok(index) => index,
        Err(e) => {
            debug!(label = %label, error = %e, "Skipping table of contents line");
            return None;
        }
    };
    let anchor_id = parent_element(text_span)
        .and_then(|link| link.value().attr("href"))
        .map(|href| href.replacen('#', "", 1))
        .unwrap_or_default();
    Some(TocEntry {
        index,
        label,
        anchor_id,
    })
}

/// Lowercases a heading label and strips its numerals.
#[must_use]
pub fn clean_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .collect::<String>()
        .trim()
        .to_lowercase()
}

/// Python-style title casing: upper-case the first letter of each word.
#[must_use]
pub fn title_case(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    let mut at_word_start = true;
    for c in term.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Keeps the entries nested under `language`'s heading whose label is in
/// `included`.
#[must_use]
pub fn scope_to_language(
    toc: Vec<TocEntry>,
    language: &str,
    included: &[String],
    label_match: LabelMatch,
) -> WordContents {
    if toc.is_empty() {
        return WordContents::Unscoped;
    }
    let language = language.to_lowercase();
    let Some(language_index) = toc
        .iter()
        .find(|entry| entry.label.trim().to_lowercase() == language)
        .map(|entry| entry.index.clone())
    else {
        return WordContents::LanguageMissing;
    };

    let entries: Vec<TocEntry> = toc
        .into_iter()
        .filter(|entry| entry.index.is_descendant_of(&language_index))
        .filter(|entry| label_match.find(&clean_label(&entry.label), included).is_some())
        .collect();
    if entries.is_empty() {
        WordContents::Unscoped
    } else {
        WordContents::Scoped(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TOC: &str = r##"<html><body><div id="toc"><ul>
<li class="toclevel-1"><a href="#English"><span class="tocnumber">1</span> <span class="toctext">English</span></a>
<ul>
<li class="toclevel-2"><a href="#Etymology_1"><span class="tocnumber">1.1</span> <span class="toctext">Etymology 1</span></a></li>
<li class="toclevel-3"><a href="#Noun"><span class="tocnumber">1.1.1</span> <span class="toctext">Noun</span></a></li>
<li class="toclevel-3"><a href="#Anagrams"><span class="tocnumber">1.1.2</span> <span class="toctext">Anagrams</span></a></li>
</ul></li>
<li class="toclevel-1"><a href="#German"><span class="tocnumber">2</span> <span class="toctext">German</span></a>
<ul><li class="toclevel-2"><a href="#Noun_2"><span class="tocnumber">2.1</span> <span class="toctext">Noun</span></a></li></ul></li>
</ul></div></body></html>"##;

    fn included() -> Vec<String> {
        ["etymology", "noun"].iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_table_of_contents() {
        let toc = table_of_contents(&Page::parse(TOC));
        assert_eq!(toc.len(), 6);
        assert_eq!(toc[1].index.as_str(), "1.1");
        assert_eq!(toc[1].label, "Etymology 1");
        assert_eq!(toc[1].anchor_id, "Etymology_1");
    }

    #[test]
    fn test_unnumbered_lines_are_skipped() {
        let body = r##"<html><body><div id="toc"><ul>
<li><a href="#English"><span class="tocnumber">1</span> <span class="toctext">English</span></a></li>
<li><a href="#Stray"><span class="toctext">Stray</span></a></li>
<li><a href="#Odd"><span class="tocnumber">1.x</span> <span class="toctext">Odd</span></a></li>
<li><a href="#Noun"><span class="tocnumber">1.1</span> <span class="toctext">Noun</span></a></li>
</ul></div></body></html>"##;
        let toc = table_of_contents(&Page::parse(body));
        let anchors: Vec<&str> = toc.iter().map(|e| e.anchor_id.as_str()).collect();
        assert_eq!(anchors, vec!["English", "Noun"]);
    }

    #[test]
    fn test_scope_to_language() {
        let toc = table_of_contents(&Page::parse(TOC));
        let contents = scope_to_language(toc, "English", &included(), LabelMatch::Exact);
        let anchors: Vec<&str> = contents.entries().iter().map(|e| e.anchor_id.as_str()).collect();
        assert_eq!(anchors, vec!["Etymology_1", "Noun"]);

        let toc = table_of_contents(&Page::parse(TOC));
        let contents = scope_to_language(toc, "german", &included(), LabelMatch::Exact);
        assert_eq!(contents.entries().len(), 1);
        assert_eq!(contents.entries()[0].anchor_id, "Noun_2");
    }

    #[test]
    fn test_missing_language_and_missing_toc() {
        let toc = table_of_contents(&Page::parse(TOC));
        assert_eq!(
            scope_to_language(toc, "french", &included(), LabelMatch::Exact),
            WordContents::LanguageMissing
        );
        assert_eq!(
            scope_to_language(Vec::new(), "english", &included(), LabelMatch::Exact),
            WordContents::Unscoped
        );
    }

    #[test]
    fn test_language_without_recognized_headings_is_unscoped() {
        let toc = table_of_contents(&Page::parse(TOC));
        let only_verbs = vec!["verb".to_string()];
        assert_eq!(
            scope_to_language(toc, "english", &only_verbs, LabelMatch::Exact),
            WordContents::Unscoped
        );
    }

    #[test]
    fn test_clean_label_and_title_case() {
        assert_eq!(clean_label(" Etymology 2 "), "etymology");
        assert_eq!(title_case("related terms"), "Related Terms");
        assert_eq!(title_case("noun"), "Noun");
    }
}
