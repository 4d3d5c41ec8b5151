//! Visible-text rendering.

use scraper::{ElementRef, Node};

/// What to do with an element while rendering text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRule {
    /// Render the element's text normally.
    Include,
    /// Leave the element and everything under it out.
    Skip,
    /// Render the element's full text wrapped in `[` `]`.
    Enclose,
}

/// All text under `el`, concatenated.
#[must_use]
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Text under `el`, with descendants filtered by `rule`.
///
/// `el` itself is always rendered; the rule is only asked about descendants.
#[must_use]
pub fn render_text<F>(el: ElementRef<'_>, rule: F) -> String
where
    F: Fn(ElementRef<'_>) -> TextRule,
{
    let mut out = String::new();
    render_into(el, &rule, &mut out);
    out
}

fn render_into<F>(el: ElementRef<'_>, rule: &F, out: &mut String)
where
    F: Fn(ElementRef<'_>) -> TextRule,
{
    for child in el.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                let Some(child_el) = ElementRef::wrap(child) else {
                    continue;
                };
                match rule(child_el) {
                    TextRule::Include => render_into(child_el, rule, out),
                    TextRule::Skip => {}
                    TextRule::Enclose => {
                        out.push('[');
                        out.push_str(&text_of(child_el));
                        out.push(']');
                    }
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::{first_descendant_named, has_class};
    use scraper::Html;

    #[test]
    fn test_render_skips_and_encloses() {
        let html = Html::parse_fragment(
            r#"<li>German: <span class="tpos">(de)</span><a>Tisch</a> <span class="gender">m</span></li>"#,
        );
        let li = first_descendant_named(html.root_element(), "li").unwrap();

        let text = render_text(li, |el| {
            if has_class(el, "tpos") {
                TextRule::Skip
            } else if has_class(el, "gender") {
                TextRule::Enclose
            } else {
                TextRule::Include
            }
        });
        assert_eq!(text, "German: Tisch [m]");
    }

    #[test]
    fn test_render_include_matches_text_of() {
        let html = Html::parse_fragment("<p>a <b>b <i>c</i></b></p>");
        let p = first_descendant_named(html.root_element(), "p").unwrap();
        assert_eq!(render_text(p, |_| TextRule::Include), text_of(p));
        assert_eq!(text_of(p), "a b c");
    }
}
