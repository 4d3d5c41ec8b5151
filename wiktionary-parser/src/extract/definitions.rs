//! Gloss lines under part-of-speech headings.

use scraper::ElementRef;

use super::{non_empty, walk_section, Extracted};
use crate::html::{children_named, is_named, next_element_sibling, parent_element, render_text, text_of, TextRule};
use crate::locator::{FetchContext, LocatedSection};

/// Reads gloss lines under each part-of-speech heading.
///
/// Paragraphs and the direct items of lists are read in page order. Example
/// descriptions and nested lists inside an item are not part of its gloss.
#[must_use]
pub fn extract_definitions(
    ctx: &FetchContext,
    sections: &[LocatedSection],
) -> Vec<Extracted<Vec<String>>> {
    sections
        .iter()
        .map(|section| {
            let lines = ctx
                .page
                .anchor(&section.anchor_id)
                .map(read_glosses)
                .unwrap_or_default();
            let part_of_speech = if section.label == "definitions" {
                ""
            } else {
                section.label.as_str()
            };
            Extracted::new(section.index.clone(), part_of_speech, lines)
        })
        .collect()
}

fn read_glosses(anchor: ElementRef<'_>) -> Vec<String> {
    let mut lines = Vec::new();
    for node in walk_section(parent_element(anchor).and_then(next_element_sibling)) {
        match node.value().name() {
            "p" => lines.extend(non_empty(&text_of(node))),
            "ol" | "ul" => {
                for item in children_named(node, "li") {
                    lines.extend(non_empty(&gloss_text(item)));
                }
            }
            _ => {}
        }
    }
    lines
}

fn gloss_text(item: ElementRef<'_>) -> String {
    render_text(item, |child| {
        if is_named(child, &["dd", "ul", "ol"]) {
            TextRule::Skip
        } else {
            TextRule::Include
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::SectionIndex;
    use crate::locator::SectionLocator;
    use crate::profile::LanguageProfile;
    use pretty_assertions::assert_eq;

    const BODY: &str = r#"<html><body><h3><span id="Noun">Noun</span></h3>
<p><strong>table</strong> (plural tables)</p>
<ol><li>Item of furniture.<dl><dd>The book is on the table.</dd></dl></li>
<li>A matrix of data.<ul><li>quotation</li></ul></li></ol>
<h4>Synonyms</h4><ul><li>board</li></ul></body></html>"#;

    fn extract(anchor: &str, label: &str) -> Extracted<Vec<String>> {
        let locator = SectionLocator::new(&LanguageProfile::english());
        let ctx = locator.context("table", "english", BODY);
        let section = LocatedSection::new(SectionIndex::new("1.1"), anchor, label);
        extract_definitions(&ctx, &[section]).remove(0)
    }

    #[test]
    fn test_glosses_stop_at_heading() {
        let extracted = extract("Noun", "noun");
        assert_eq!(extracted.label, "noun");
        assert_eq!(
            extracted.value,
            vec![
                "table (plural tables)".to_string(),
                "Item of furniture.".to_string(),
                "A matrix of data.".to_string(),
            ]
        );
    }

    #[test]
    fn test_unmarked_heading_has_empty_part_of_speech() {
        let extracted = extract("Noun", "definitions");
        assert_eq!(extracted.label, "");
    }

    #[test]
    fn test_missing_anchor_yields_no_lines() {
        assert!(extract("Verb", "verb").value.is_empty());
    }
}
