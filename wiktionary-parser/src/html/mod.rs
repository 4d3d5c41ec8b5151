//! Markup navigation over a parsed Wiktionary page.
//!
//! Thin helpers over `scraper`: sibling and parent steps that skip text
//! nodes, tag and class lookups, and a text renderer that can leave out or
//! bracket sub-trees. The renderer is how extraction ignores footnotes,
//! audio widgets and nested lists without mutating the page.

mod text;

pub use text::{render_text, text_of, TextRule};

use scraper::{ElementRef, Html};

/// Classes whose nodes are dropped from a page before extraction.
pub const UNWANTED_CLASSES: &[&str] = &["sister-wikipedia", "thumb", "reference", "cited-source"];

/// A parsed and cleaned page.
#[derive(Debug)]
pub struct Page {
    html: Html,
}

impl Page {
    /// Parses a response body.
    ///
    /// `>\n<` is collapsed to `><` first so that layout newlines between tags
    /// do not become text nodes.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        let normalized = body.replace(">\n<", "><");
        let mut html = Html::parse_document(&normalized);
        remove_unwanted(&mut html);
        Self { html }
    }

    /// The root `<html>` element.
    #[must_use]
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// Looks up an anchor by id.
    #[must_use]
    pub fn anchor(&self, id: &str) -> Option<ElementRef<'_>> {
        find_by_id(&self.html, id)
    }
}

fn remove_unwanted(html: &mut Html) {
    let ids: Vec<_> = html
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| UNWANTED_CLASSES.iter().any(|class| has_class(*el, class)))
        .map(|el| el.id())
        .collect();
    for id in ids {
        if let Some(mut node) = html.tree.get_mut(id) {
            node.detach();
        }
    }
}

/// Finds the `span` carrying `id`, or failing that any element with it.
#[must_use]
pub fn find_by_id<'a>(html: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    let mut fallback = None;
    for el in html.root_element().descendants().filter_map(ElementRef::wrap) {
        if el.value().id() == Some(id) {
            if el.value().name() == "span" {
                return Some(el);
            }
            fallback = fallback.or(Some(el));
        }
    }
    fallback
}

/// The parent element, if the parent is an element.
#[must_use]
pub fn parent_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.parent().and_then(ElementRef::wrap)
}

/// The next sibling that is an element.
#[must_use]
pub fn next_element_sibling(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

/// The preceding sibling that is an element.
#[must_use]
pub fn previous_element_sibling(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.prev_siblings().find_map(ElementRef::wrap)
}

/// Descendant elements (excluding `el`) in document order.
pub fn descendant_elements(el: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    el.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// Descendant elements with the given tag name.
#[must_use]
pub fn descendants_named<'a>(el: ElementRef<'a>, name: &str) -> Vec<ElementRef<'a>> {
    descendant_elements(el)
        .filter(|d| d.value().name() == name)
        .collect()
}

/// The first descendant element with the given tag name.
#[must_use]
pub fn first_descendant_named<'a>(el: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    descendant_elements(el).find(|d| d.value().name() == name)
}

/// Direct child elements with the given tag name.
#[must_use]
pub fn children_named<'a>(el: ElementRef<'a>, name: &str) -> Vec<ElementRef<'a>> {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| c.value().name() == name)
        .collect()
}

/// True if the element's tag name is one of `names`.
#[must_use]
pub fn is_named(el: ElementRef<'_>, names: &[&str]) -> bool {
    names.contains(&el.value().name())
}

/// True if the element carries `class`.
#[must_use]
pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

/// True if any descendant element has tag `name` and carries `class`.
#[must_use]
pub fn contains_tag_with_class(el: ElementRef<'_>, name: &str, class: &str) -> bool {
    descendant_elements(el).any(|d| d.value().name() == name && has_class(d, class))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "<html><body>\n<div id=\"main\"><h3><span id=\"Noun\">Noun</span></h3>\n<p>a <sup class=\"reference\">[1]</sup>b</p><ol><li>one<ul><li>nested</li></ul></li><li>two</li></ol></div></body></html>";

    #[test]
    fn test_page_removes_unwanted_and_newlines() {
        let page = Page::parse(PAGE);
        let main = page.anchor("main").unwrap();
        let p = first_descendant_named(main, "p").unwrap();
        assert_eq!(text_of(p), "a b");

        // No whitespace text node between the heading and the paragraph.
        let heading = first_descendant_named(main, "h3").unwrap();
        assert_eq!(heading.next_sibling().and_then(ElementRef::wrap).unwrap().value().name(), "p");
    }

    #[test]
    fn test_anchor_prefers_span() {
        let page = Page::parse(PAGE);
        let anchor = page.anchor("Noun").unwrap();
        assert_eq!(anchor.value().name(), "span");
        assert_eq!(parent_element(anchor).unwrap().value().name(), "h3");
        assert!(page.anchor("Verb").is_none());
    }

    #[test]
    fn test_sibling_and_descendant_helpers() {
        let page = Page::parse(PAGE);
        let heading = parent_element(page.anchor("Noun").unwrap()).unwrap();
        let p = next_element_sibling(heading).unwrap();
        assert_eq!(p.value().name(), "p");

        let ol = next_element_sibling(p).unwrap();
        assert_eq!(children_named(ol, "li").len(), 2);
        assert_eq!(descendants_named(ol, "li").len(), 3);
        assert_eq!(previous_element_sibling(ol).unwrap().value().name(), "p");
        assert!(is_named(ol, &["ul", "ol"]));
    }
}
