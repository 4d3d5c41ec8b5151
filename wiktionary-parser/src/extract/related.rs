//! Related-word lists (synonyms, antonyms, derived terms, ...).

use super::{non_empty, walk_from, Extracted};
use crate::html::{descendants_named, parent_element, text_of};
use crate::locator::{FetchContext, LocatedSection};

/// Reads related words under each relation heading: the items of the first
/// sibling that has any.
#[must_use]
pub fn extract_related(
    ctx: &FetchContext,
    sections: &[LocatedSection],
) -> Vec<Extracted<Vec<String>>> {
    sections
        .iter()
        .map(|section| {
            let words = ctx
                .page
                .anchor(&section.anchor_id)
                .and_then(|anchor| {
                    walk_from(parent_element(anchor))
                        .find(|el| !descendants_named(*el, "li").is_empty())
                })
                .map(|list| {
                    descendants_named(list, "li")
                        .into_iter()
                        .filter_map(|li| non_empty(&text_of(li)))
                        .collect()
                })
                .unwrap_or_default();
            Extracted::new(section.index.clone(), section.label.clone(), words)
        })
        .collect()
}
