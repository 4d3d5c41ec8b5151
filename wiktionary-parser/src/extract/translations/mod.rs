//! Translation extraction.
//!
//! The node after a translations heading starts a run of sense groups,
//! each a collapsible box with a sense label and a language table. When
//! the run is a single box pointing at a `/translations` sub-page, the
//! tables have to be fetched from there.

mod table;

pub use table::{parse_item_text, parse_language_item, parse_sense, split_items};

use scraper::ElementRef;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{walk_section, ExtractOptions, Extracted};
use crate::errors::{ParseContext, TranslationParsingError};
use crate::html::{
    first_descendant_named, has_class, next_element_sibling, parent_element, text_of, Page,
};
use crate::locator::{FetchContext, LocatedSection};
use crate::model::{TranslationMap, TranslationSense};

/// Text marking a sense group that only links to a translations sub-page.
const SUBPAGE_MARKER: &str = "/translations";

/// A link to translations on another page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubpageLink {
    /// Page title, e.g. `table/translations`.
    pub page: String,
    /// Anchor id on that page.
    pub fragment: String,
}

impl SubpageLink {
    /// Parses an href of the form `/wiki/page#Fragment`.
    #[must_use]
    pub fn from_href(href: &str) -> Option<Self> {
        let target = href.replacen("/wiki/", "", 1);
        let (page, fragment) = target.split_once('#')?;
        if page.is_empty() || fragment.is_empty() {
            return None;
        }
        Some(Self {
            page: page.to_string(),
            fragment: fragment.to_string(),
        })
    }
}

/// What a translations heading yielded on the primary page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationSource {
    /// Senses read in place.
    Parsed(Vec<TranslationSense>),
    /// Senses that live on a sub-page.
    Subpage {
        /// Where to look.
        link: SubpageLink,
        /// Error context for the lookup.
        context: ParseContext,
    },
}

struct SenseGroup<'a> {
    label: String,
    element: ElementRef<'a>,
}

/// Reads the translation senses under each translations heading.
#[must_use]
pub fn extract_translations(
    ctx: &FetchContext,
    sections: &[LocatedSection],
    options: &ExtractOptions,
) -> Vec<Extracted<TranslationSource>> {
    sections
        .iter()
        .map(|section| {
            let source = read_section(ctx, section, options);
            Extracted::new(section.index.clone(), section.label.clone(), source)
        })
        .collect()
}

fn read_section(
    ctx: &FetchContext,
    section: &LocatedSection,
    options: &ExtractOptions,
) -> TranslationSource {
    let context = ParseContext::new(&ctx.word);
    let Some(anchor) = ctx.page.anchor(&section.anchor_id) else {
        log_parse_error(&TranslationParsingError::sense_location(
            context,
            format!("anchor {:?} not found", section.anchor_id),
        ));
        return TranslationSource::Parsed(Vec::new());
    };

    let start = parent_element(anchor).and_then(next_element_sibling);
    let groups = match sense_groups(start, options.sense_marker_class.as_deref(), &context) {
        Ok(groups) => groups,
        Err(err) => {
            log_parse_error(&err);
            return TranslationSource::Parsed(Vec::new());
        }
    };

    if let [group] = groups.as_slice() {
        if text_of(group.element).contains(SUBPAGE_MARKER) {
            let context = context.with_sense(&group.label).with_language(&ctx.language);
            let link = first_descendant_named(group.element, "a")
                .and_then(|a| a.value().attr("href"))
                .and_then(SubpageLink::from_href);
            return match link {
                Some(link) => TranslationSource::Subpage { link, context },
                None => {
                    log_parse_error(&TranslationParsingError::sense_location(
                        context,
                        "translations sub-page link is malformed",
                    ));
                    TranslationSource::Parsed(Vec::new())
                }
            };
        }
    }

    TranslationSource::Parsed(parse_groups(&groups, &ctx.word, options))
}

/// Reads translation senses from a fetched sub-page.
///
/// The senses start two siblings after the container of the linked anchor.
pub fn parse_subpage(
    body: &str,
    link: &SubpageLink,
    context: &ParseContext,
    options: &ExtractOptions,
) -> Result<Vec<TranslationSense>, TranslationParsingError> {
    let page = Page::parse(body);
    let anchor = page.anchor(&link.fragment).ok_or_else(|| {
        TranslationParsingError::sense_location(
            context.clone(),
            format!("anchor {:?} not found on {}", link.fragment, link.page),
        )
    })?;
    let start = parent_element(anchor)
        .and_then(next_element_sibling)
        .and_then(next_element_sibling);
    let groups = sense_groups(start, options.sense_marker_class.as_deref(), context)?;
    Ok(parse_groups(&groups, &context.word, options))
}

fn sense_groups<'a>(
    start: Option<ElementRef<'a>>,
    marker_class: Option<&str>,
    context: &ParseContext,
) -> Result<Vec<SenseGroup<'a>>, TranslationParsingError> {
    let mut groups = Vec::new();
    for element in walk_section(start) {
        if let Some(class) = marker_class {
            if !has_class(element, class) {
                if groups.is_empty() {
                    return Err(TranslationParsingError::sense_location(
                        context.clone(),
                        format!("expected a node with class {class:?}"),
                    ));
                }
                break;
            }
        }
        let label = first_descendant_named(element, "div")
            .map(|div| text_of(div).trim().to_string())
            .unwrap_or_default();
        groups.push(SenseGroup { label, element });
    }
    Ok(groups)
}

fn parse_groups(groups: &[SenseGroup<'_>], word: &str, options: &ExtractOptions) -> Vec<TranslationSense> {
    groups
        .iter()
        .map(|group| {
            let context = ParseContext::new(word).with_sense(&group.label);
            let translations = parse_sense(group.element, &context, options.allow_empty_senses)
                .unwrap_or_else(|err| {
                    log_parse_error(&err);
                    TranslationMap::new()
                });
            TranslationSense::new(group.label.clone(), translations)
        })
        .collect()
}

/// Logs a caught translation error with its context.
pub(crate) fn log_parse_error(err: &TranslationParsingError) {
    let context = err.context();
    warn!(
        kind = err.kind(),
        word = %context.word,
        sense = %context.sense,
        language = %context.language,
        "{err}"
    );
}
