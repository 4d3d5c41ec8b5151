//! Usage examples nested in definition lists.

use regex::Regex;
use scraper::ElementRef;
use std::sync::LazyLock;

use super::{walk_from, walk_section, Extracted};
use crate::html::{descendants_named, next_element_sibling, parent_element, text_of};
use crate::locator::{FetchContext, LocatedSection};

/// A parenthesized aside such as a citation year.
static PAREN_ASIDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("aside pattern is a valid regex"));

/// Reads usage examples under each part-of-speech heading.
///
/// Yields one entry per ordered list: the first list after the heading
/// and every list directly following it.
#[must_use]
pub fn extract_examples(
    ctx: &FetchContext,
    sections: &[LocatedSection],
) -> Vec<Extracted<Vec<String>>> {
    let mut out = Vec::new();
    for section in sections {
        let Some(anchor) = ctx.page.anchor(&section.anchor_id) else {
            continue;
        };
        let first_list = walk_section(parent_element(anchor).and_then(next_element_sibling))
            .find(|el| el.value().name() == "ol");
        for list in walk_from(first_list).take_while(|el| el.value().name() == "ol") {
            out.push(Extracted::new(
                section.index.clone(),
                section.label.clone(),
                read_examples(list),
            ));
        }
    }
    out
}

fn read_examples(list: ElementRef<'_>) -> Vec<String> {
    descendants_named(list, "dd")
        .into_iter()
        .filter(|dd| !inside_other_description(*dd, list))
        .filter_map(|dd| {
            let text = strip_asides(text_of(dd).trim());
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        })
        .collect()
}

fn inside_other_description(dd: ElementRef<'_>, list: ElementRef<'_>) -> bool {
    dd.ancestors()
        .filter_map(ElementRef::wrap)
        .take_while(|a| a.id() != list.id())
        .any(|a| a.value().name() == "dd")
}

/// Removes every `(...)` group.
#[must_use]
pub fn strip_asides(text: &str) -> String {
    PAREN_ASIDE.replace_all(text, "").into_owned()
}
