//! Per-sense translation tables.
//!
//! A sense holds one table whose header row has `translations-cell` cells.
//! Each cell has a list of language items such as `German: Tisch [m]`;
//! items with a nested description list carry dialect sub-entries.

use scraper::ElementRef;
use std::collections::BTreeMap;
use tracing::warn;

use super::log_parse_error;
use crate::errors::{ParseContext, TranslationParsingError};
use crate::html::{
    children_named, descendant_elements, descendants_named, first_descendant_named, has_class,
    render_text, TextRule,
};
use crate::model::{TranslationMap, TranslationText, TranslationValue};

/// Inline annotations dropped from language items.
const UNWANTED_CLASSES: &[&str] = &["tpos"];

/// Annotations rendered as `[text]`.
const ENCLOSED_CLASSES: &[&str] = &["gender"];

/// Class of the table cells holding language lists.
const TRANSLATION_CELL_CLASS: &str = "translations-cell";

/// Parses the language table of one sense group.
///
/// Malformed language items are logged and skipped.
pub fn parse_sense(
    sense: ElementRef<'_>,
    context: &ParseContext,
    allow_empty: bool,
) -> Result<TranslationMap, TranslationParsingError> {
    let items = language_items(sense, context)?;
    if items.is_empty() && !allow_empty {
        return Err(TranslationParsingError::EmptySense {
            context: context.clone(),
        });
    }

    let mut map = TranslationMap::new();
    for item in items {
        let parsed: Result<(String, TranslationValue), _> =
            if descendants_named(item, "dl").is_empty() {
                parse_language_item(item, context).map(|(key, text)| (key, text.into()))
            } else {
                Ok(parse_dialects(item, context))
            };
        match parsed {
            Ok((key, value)) => {
                map.insert(key, value);
            }
            Err(err) => log_parse_error(&err),
        }
    }
    Ok(map)
}

fn language_items<'a>(
    sense: ElementRef<'a>,
    context: &ParseContext,
) -> Result<Vec<ElementRef<'a>>, TranslationParsingError> {
    let tables = descendants_named(sense, "table");
    let Some(table) = tables.first().copied() else {
        return Err(TranslationParsingError::ZeroTables {
            context: context.clone(),
        });
    };
    if tables.len() > 1 {
        let err = TranslationParsingError::MultipleTables {
            context: context.clone(),
            count: tables.len(),
        };
        warn!(
            kind = err.kind(),
            word = %context.word,
            sense = %context.sense,
            "{err}; using the first"
        );
    }

    let bodies = descendants_named(table, "tbody");
    if bodies.len() > 1 {
        return Err(TranslationParsingError::MultipleTableBodies {
            context: context.clone(),
            count: bodies.len(),
        });
    }
    let body = bodies.first().copied().unwrap_or(table);

    let Some(row) = first_descendant_named(body, "tr") else {
        return Ok(Vec::new());
    };
    Ok(descendant_elements(row)
        .filter(|el| el.value().name() == "td" && has_class(*el, TRANSLATION_CELL_CLASS))
        .filter_map(|cell| first_descendant_named(cell, "ul"))
        .flat_map(|list| children_named(list, "li"))
        .collect())
}

/// Visible text of a language item, with annotations handled.
fn item_text(item: ElementRef<'_>, skip_descriptions: bool) -> String {
    render_text(item, |el| {
        if UNWANTED_CLASSES.iter().any(|c| has_class(el, c))
            || (skip_descriptions && el.value().name() == "dl")
        {
            TextRule::Skip
        } else if ENCLOSED_CLASSES.iter().any(|c| has_class(el, c)) {
            TextRule::Enclose
        } else {
            TextRule::Include
        }
    })
}

/// Parses one `language: items` element.
pub fn parse_language_item(
    item: ElementRef<'_>,
    context: &ParseContext,
) -> Result<(String, TranslationText), TranslationParsingError> {
    parse_item_text(&item_text(item, false), context)
}

/// Parses the text of a language item.
pub fn parse_item_text(
    text: &str,
    context: &ParseContext,
) -> Result<(String, TranslationText), TranslationParsingError> {
    let Some((key, value)) = text.split_once(':') else {
        return Err(TranslationParsingError::missing_colon(context.clone(), text.trim()));
    };
    let key = key.trim().to_lowercase();
    let context = context.clone().with_language(&key);
    TranslationText::from_items(split_items(value))
        .map(|text| (key, text))
        .ok_or_else(|| TranslationParsingError::zero_length_list(context, value.trim()))
}

/// Splits a value on `", "`, keeping commas inside parentheses.
///
/// `[[a|b]]` gender links are reduced to `b`. Pieces are trimmed and empty
/// ones dropped.
#[must_use]
pub fn split_items(value: &str) -> Vec<String> {
    let pieces: Vec<String> = value
        .split(", ")
        .map(|piece| {
            if piece.contains("[[") && piece.contains("]]") && piece.contains('|') {
                piece
                    .split('|')
                    .nth(1)
                    .unwrap_or(piece)
                    .replace("]]", "")
            } else {
                piece.to_string()
            }
        })
        .collect();

    let pieces = if value.contains(',') && value.contains('(') && value.contains(')') {
        join_parenthesized(pieces)
    } else {
        pieces
    };

    pieces
        .iter()
        .map(|piece| piece.trim())
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Re-joins pieces until opening and closing parentheses balance.
///
/// A trailing unbalanced chain is kept as one item.
fn join_parenthesized(pieces: Vec<String>) -> Vec<String> {
    let mut joined = Vec::new();
    let mut chain: Vec<String> = Vec::new();
    let (mut open, mut close) = (0usize, 0usize);
    for piece in pieces {
        open += piece.matches('(').count();
        close += piece.matches(')').count();
        chain.push(piece);
        if open == close {
            joined.push(chain.join(", "));
            chain.clear();
        }
    }
    if !chain.is_empty() {
        joined.push(chain.join(", "));
    }
    joined
}

/// Parses a language item with dialect descriptions into a dialect map.
fn parse_dialects(item: ElementRef<'_>, context: &ParseContext) -> (String, TranslationValue) {
    let full_text = item_text(item, false);
    let language = full_text
        .split(':')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase();
    let context = context.clone().with_language(&language);

    let mut dialects: BTreeMap<String, TranslationText> = BTreeMap::new();
    let mut last_key: Option<String> = None;

    let main_entry = item_text(item, true);
    let has_main_entry = main_entry
        .replace('\n', "")
        .split_once(':')
        .is_some_and(|(_, rest)| !rest.trim().is_empty());
    if has_main_entry {
        match parse_item_text(&main_entry, &context) {
            Ok((key, text)) => {
                dialects.insert(key.clone(), text);
                last_key = Some(key);
            }
            Err(err) => log_parse_error(&err),
        }
    }

    for description in descendants_named(item, "dd") {
        let text = item_text(description, true);
        if text.trim().is_empty() {
            continue;
        }
        match parse_item_text(&text, &context) {
            Ok((key, value)) => {
                dialects.insert(key.clone(), value);
                last_key = Some(key);
            }
            Err(err @ TranslationParsingError::MissingColon { .. }) => {
                match last_key.as_ref().and_then(|key| dialects.get_mut(key)) {
                    Some(previous) => previous.append_continuation(text.trim()),
                    None => log_parse_error(&err),
                }
            }
            Err(err) => log_parse_error(&err),
        }
    }

    (language, TranslationValue::Dialects(dialects))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::Page;
    use pretty_assertions::assert_eq;

    fn context() -> ParseContext {
        ParseContext::new("table").with_sense("furniture")
    }

    fn sense_page(cells: &str) -> Page {
        Page::parse(&format!(
            r#"<html><body><div id="sense" class="NavFrame"><div class="NavHead">furniture</div>
<div class="NavContent"><table class="translations"><tbody><tr>{cells}</tr></tbody></table></div></div></body></html>"#
        ))
    }

    fn parse(page: &Page) -> Result<TranslationMap, TranslationParsingError> {
        parse_sense(page.anchor("sense").unwrap(), &context(), false)
    }

    #[test]
    fn test_split_items() {
        assert_eq!(split_items(" masc (dated), fem"), vec!["masc (dated)", "fem"]);
        assert_eq!(split_items(" a (x, y), b"), vec!["a (x, y)", "b"]);
        assert_eq!(split_items(" hello, hi"), vec!["hello", "hi"]);
        assert_eq!(split_items(" [[Tisch|Tische]]"), vec!["Tische"]);
        assert_eq!(
            split_items(" x (a, b), c (d, e"),
            vec!["x (a, b)", "c (d, e"]
        );
        assert!(split_items("  ").is_empty());
    }

    #[test]
    fn test_parse_item_text() {
        let (key, text) = parse_item_text("En: hello, hi", &context()).unwrap();
        assert_eq!(key, "en");
        assert_eq!(
            text,
            TranslationText::Multiple(vec!["hello".to_string(), "hi".to_string()])
        );

        let (_, text) = parse_item_text("en: hello", &context()).unwrap();
        assert_eq!(text, TranslationText::Single("hello".to_string()));

        let err = parse_item_text("no separator", &context()).unwrap_err();
        assert_eq!(err.kind(), "MissingColonError");

        let err = parse_item_text("en: ", &context()).unwrap_err();
        assert_eq!(err.kind(), "ZeroLengthListError");
        assert_eq!(err.context().language, "en");
    }

    #[test]
    fn test_sense_table_with_annotations() {
        let page = sense_page(
            r#"<td class="translations-cell"><ul>
<li>German: <span class="Latn">Tisch</span> <span class="gender">m</span> <span class="tpos">(de)</span></li>
<li>French: table <span class="gender">f</span>, tablier</li>
<li>Broken entry</li>
</ul></td><td class="translations-cell"><ul><li>Spanish: mesa</li></ul></td>"#,
        );
        let map = parse(&page).unwrap();

        assert_eq!(map.len(), 3);
        assert_eq!(map["german"], TranslationValue::Single("Tisch [m]".to_string()));
        assert_eq!(
            map["french"],
            TranslationValue::Multiple(vec!["table [f]".to_string(), "tablier".to_string()])
        );
        assert_eq!(map["spanish"], TranslationValue::Single("mesa".to_string()));
    }

    #[test]
    fn test_dialects_with_continuation() {
        let page = sense_page(
            r#"<td class="translations-cell"><ul><li>Chinese:<dl>
<dd>Mandarin: 桌子 (zh) (zhuōzi), 檯子</dd>
<dd>and also 枱</dd>
<dd>Cantonese: 枱 (toi2)</dd>
</dl></li><li>Arabic: طاولة<dl><dd>Egyptian Arabic: ترابيزة</dd></dl></li></ul></td>"#,
        );
        let map = parse(&page).unwrap();

        let chinese = map["chinese"].dialects().unwrap();
        assert_eq!(chinese.len(), 2);
        assert_eq!(
            chinese["mandarin"],
            TranslationText::Multiple(vec![
                "桌子 (zh) (zhuōzi)".to_string(),
                "檯子; and also 枱".to_string()
            ])
        );
        assert_eq!(chinese["cantonese"], TranslationText::Single("枱 (toi2)".to_string()));

        let arabic = map["arabic"].dialects().unwrap();
        assert_eq!(arabic["arabic"], TranslationText::Single("طاولة".to_string()));
        assert_eq!(
            arabic["egyptian arabic"],
            TranslationText::Single("ترابيزة".to_string())
        );
    }

    #[test]
    fn test_empty_cell_is_an_error_unless_allowed() {
        let page = sense_page(r#"<td class="translations-cell"></td>"#);
        let err = parse(&page).unwrap_err();
        assert_eq!(err.kind(), "EmptySenseError");
        assert_eq!(err.context().sense, "furniture");

        let map = parse_sense(page.anchor("sense").unwrap(), &context(), true).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_table_count_rules() {
        let page = Page::parse(
            r#"<html><body><div id="sense"><div>sense</div><p>no table</p></div></body></html>"#,
        );
        let err = parse(&page).unwrap_err();
        assert_eq!(err.kind(), "ZeroTablesError");

        let page = Page::parse(
            r#"<html><body><div id="sense"><table><tbody><tr><td class="translations-cell"><ul><li>Dutch: tafel</li></ul></td></tr></tbody><tbody><tr><td></td></tr></tbody></table></div></body></html>"#,
        );
        let err = parse(&page).unwrap_err();
        assert_eq!(err.kind(), "MultipleTableBodiesError");

        let page = Page::parse(
            r#"<html><body><div id="sense"><table><tbody><tr><td class="translations-cell"><ul><li>Dutch: tafel</li></ul></td></tr></tbody></table><table><tbody><tr><td class="translations-cell"><ul><li>Welsh: bwrdd</li></ul></td></tr></tbody></table></div></body></html>"#,
        );
        let map = parse(&page).unwrap();
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("dutch"));
    }
}
