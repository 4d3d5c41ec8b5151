//! Pronunciation lines and audio links.

use scraper::ElementRef;

use super::{non_empty, Extracted, PronunciationData};
use crate::html::{
    contains_tag_with_class, descendant_elements, descendants_named, first_descendant_named,
    has_class, is_named, next_element_sibling, parent_element, render_text, TextRule,
};
use crate::locator::{FetchContext, LocatedSection};

/// Containers that hold pronunciations without a plain list.
const STOP_CLASSES: &[&str] = &["mw-collapsible", "vsSwitcher"];

/// Reads pronunciation lines and audio links under each heading.
#[must_use]
pub fn extract_pronunciations(
    ctx: &FetchContext,
    sections: &[LocatedSection],
) -> Vec<Extracted<PronunciationData>> {
    sections
        .iter()
        .map(|section| {
            let data = ctx
                .page
                .anchor(&section.anchor_id)
                .map(read_pronunciation)
                .unwrap_or_default();
            Extracted::new(section.index.clone(), section.label.clone(), data)
        })
        .collect()
}

fn read_pronunciation(anchor: ElementRef<'_>) -> PronunciationData {
    let mut data = PronunciationData::default();
    let Some(mut node) = parent_element(anchor) else {
        return data;
    };

    while node.value().name() != "ul" {
        let Some(next) = next_element_sibling(node) else {
            return data;
        };
        node = next;
        if node.value().name() == "p" {
            data.texts.extend(non_empty(&pronunciation_text(node)));
            break;
        }
        if node.value().name() == "div" && STOP_CLASSES.iter().any(|c| has_class(node, c)) {
            break;
        }
    }

    for item in top_level_items(node) {
        for media in descendant_elements(item)
            .filter(|el| el.value().name() == "div" && has_class(*el, "mediaContainer"))
        {
            if let Some(src) = first_descendant_named(media, "source")
                .and_then(|source| source.value().attr("src"))
            {
                data.audio.push(src.to_string());
            }
        }
        if contains_tag_with_class(item, "table", "audiotable") {
            continue;
        }
        data.texts.extend(non_empty(&pronunciation_text(item)));
    }
    data
}

/// List items of `node` that are not inside another list item.
fn top_level_items(node: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    descendants_named(node, "li")
        .into_iter()
        .filter(|li| {
            li.ancestors()
                .filter_map(ElementRef::wrap)
                .take_while(|a| a.id() != node.id())
                .all(|a| a.value().name() != "li")
        })
        .collect()
}

fn pronunciation_text(el: ElementRef<'_>) -> String {
    render_text(el, |child| {
        if is_named(child, &["sup", "ul"])
            || (child.value().name() == "div" && has_class(child, "mediaContainer"))
        {
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

    fn read(body: &str) -> PronunciationData {
        let locator = SectionLocator::new(&LanguageProfile::english());
        let ctx = locator.context("w", "english", body);
        let section = LocatedSection::new(SectionIndex::new("1.1"), "Pronunciation", "pronunciation");
        extract_pronunciations(&ctx, &[section]).remove(0).value
    }

    #[test]
    fn test_list_with_audio_and_nested_list() {
        let data = read(
            r#"<html><body><h3><span id="Pronunciation">Pronunciation</span></h3>
<ul><li>IPA: /ˈteɪbəl/<sup>[key]</sup><ul><li>nested</li></ul></li>
<li><table class="audiotable"><tr><td>Audio (US)</td><td><div class="mediaContainer"><audio><source src="//upload.example/en-us-table.ogg"></audio></div></td></tr></table></li>
<li>Rhymes: -eɪbəl</li></ul></body></html>"#,
        );
        assert_eq!(data.texts, vec!["IPA: /ˈteɪbəl/", "Rhymes: -eɪbəl"]);
        assert_eq!(data.audio, vec!["//upload.example/en-us-table.ogg"]);
    }

    #[test]
    fn test_paragraph_stops_walk() {
        let data = read(
            r#"<html><body><h3><span id="Pronunciation">Pronunciation</span></h3>
<p>See the main entry.</p><ul><li>ignored</li></ul></body></html>"#,
        );
        assert_eq!(data.texts, vec!["See the main entry."]);
        assert!(data.audio.is_empty());
    }

    #[test]
    fn test_collapsible_container_is_read() {
        let data = read(
            r#"<html><body><h3><span id="Pronunciation">Pronunciation</span></h3>
<div class="vsSwitcher"><ul><li>IPA: /tɑ/</li></ul></div></body></html>"#,
        );
        assert_eq!(data.texts, vec!["IPA: /tɑ/"]);
    }

    #[test]
    fn test_missing_list_yields_nothing() {
        let data = read(
            r#"<html><body><h3><span id="Pronunciation">Pronunciation</span></h3><h4>Next</h4></body></html>"#,
        );
        assert_eq!(data, PronunciationData::default());
    }
}
