//! Etymology prose.

use scraper::ElementRef;

use super::{walk_from, Extracted, HEADINGS};
use crate::html::{descendants_named, is_named, text_of};
use crate::locator::{FetchContext, LocatedSection};
use crate::profile::StartNodeFn;

/// Reads etymology prose under each heading.
///
/// `start` picks the first node of the walk from the heading's anchor; the
/// walk ends at the next heading or `div`.
#[must_use]
pub fn extract_etymologies(
    ctx: &FetchContext,
    sections: &[LocatedSection],
    start: StartNodeFn,
) -> Vec<Extracted<String>> {
    sections
        .iter()
        .map(|section| {
            let text = ctx
                .page
                .anchor(&section.anchor_id)
                .map(|anchor| read_etymology(anchor, start))
                .unwrap_or_default();
            Extracted::new(section.index.clone(), section.label.clone(), text)
        })
        .collect()
}

fn read_etymology(anchor: ElementRef<'_>, start: StartNodeFn) -> String {
    let mut text = String::new();
    for node in walk_from(start(anchor))
        .take_while(|el| !is_named(*el, HEADINGS) && el.value().name() != "div")
    {
        if node.value().name() == "p" {
            text.push_str(&text_of(node));
        } else {
            for item in descendants_named(node, "li") {
                text.push_str(&text_of(item));
                text.push('\n');
            }
        }
    }
    text
}
