//! Recorded pages for the English entry "table".
//!
//! The primary page has two etymologies, a pronunciation with audio, a noun
//! with examples, synonyms and an in-page translation table, and a verb
//! whose translations live on the `table/translations` sub-page. A Spanish
//! section follows to check language scoping.

use super::StaticFetcher;
use crate::fetch::page_url;

/// Revision the fixture page is pinned to.
pub const TABLE_OLD_ID: &str = "62356373";

/// URL of the pinned primary page.
#[must_use]
pub fn table_url() -> String {
    page_url("en", "table", Some(TABLE_OLD_ID))
}

/// URL of the translations sub-page.
#[must_use]
pub fn table_translations_url() -> String {
    page_url("en", "table/translations", None)
}

/// A fetcher serving both fixture pages.
#[must_use]
pub fn table_fetcher() -> StaticFetcher {
    StaticFetcher::new()
        .with_page(table_url(), table_page())
        .with_page(table_translations_url(), translations_subpage())
}

/// The primary page.
#[must_use]
pub fn table_page() -> String {
    TABLE_PAGE.to_string()
}

/// The translations sub-page.
#[must_use]
pub fn translations_subpage() -> String {
    TRANSLATIONS_SUBPAGE.to_string()
}

/// A page with no table of contents and a single noun section.
#[must_use]
pub fn single_section_page() -> String {
    SINGLE_SECTION_PAGE.to_string()
}

const TABLE_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en"><head><title>table - Wiktionary</title></head>
<body><div id="mw-content-text"><div class="mw-parser-output">
<div class="sister-wikipedia sister-project"><span>table on Wikipedia</span></div>
<div id="toc" class="toc"><ul>
<li class="toclevel-1"><a href="#English"><span class="tocnumber">1</span> <span class="toctext">English</span></a>
<ul>
<li class="toclevel-2"><a href="#Etymology_1"><span class="tocnumber">1.1</span> <span class="toctext">Etymology 1</span></a>
<ul>
<li class="toclevel-3"><a href="#Pronunciation"><span class="tocnumber">1.1.1</span> <span class="toctext">Pronunciation</span></a></li>
<li class="toclevel-3"><a href="#Noun"><span class="tocnumber">1.1.2</span> <span class="toctext">Noun</span></a>
<ul>
<li class="toclevel-4"><a href="#Synonyms"><span class="tocnumber">1.1.2.1</span> <span class="toctext">Synonyms</span></a></li>
<li class="toclevel-4"><a href="#Translations"><span class="tocnumber">1.1.2.2</span> <span class="toctext">Translations</span></a></li>
</ul>
</li>
</ul>
</li>
<li class="toclevel-2"><a href="#Etymology_2"><span class="tocnumber">1.2</span> <span class="toctext">Etymology 2</span></a>
<ul>
<li class="toclevel-3"><a href="#Verb"><span class="tocnumber">1.2.1</span> <span class="toctext">Verb</span></a>
<ul>
<li class="toclevel-4"><a href="#Translations_2"><span class="tocnumber">1.2.1.1</span> <span class="toctext">Translations</span></a></li>
</ul>
</li>
</ul>
</li>
<li class="toclevel-2"><a href="#Anagrams"><span class="tocnumber">1.3</span> <span class="toctext">Anagrams</span></a></li>
</ul>
</li>
<li class="toclevel-1"><a href="#Spanish"><span class="tocnumber">2</span> <span class="toctext">Spanish</span></a>
<ul>
<li class="toclevel-2"><a href="#Noun_2"><span class="tocnumber">2.1</span> <span class="toctext">Noun</span></a></li>
</ul>
</li>
</ul></div>
<h2><span class="mw-headline" id="English">English</span></h2>
<h3><span class="mw-headline" id="Etymology_1">Etymology 1</span></h3>
<p>From Middle English <i>table</i>, from Old English <i>tabele</i>, from Latin <i>tabula</i>.<sup class="reference">[1]</sup></p>
<h4><span class="mw-headline" id="Pronunciation">Pronunciation</span></h4>
<ul>
<li>(<i>Received Pronunciation</i>) IPA: /ˈteɪbəl/<sup>[key]</sup></li>
<li><table class="audiotable"><tbody><tr><td>Audio (US)</td><td class="audiofile"><div class="mediaContainer"><audio><source src="//upload.wikimedia.org/wikipedia/commons/e/e5/En-us-table.ogg" type="audio/ogg"></audio></div></td></tr></tbody></table></li>
<li>Rhymes: -eɪbəl</li>
</ul>
<h4><span class="mw-headline" id="Noun">Noun</span></h4>
<p><strong class="Latn headword" lang="en">table</strong> (<i>plural</i> <b>tables</b>)</p>
<ol>
<li>Item of furniture with a flat top surface raised above the ground.<dl><dd>Put the dishes on the table. (2004)</dd></dl></li>
<li>A matrix or grid of data arranged in rows and columns.<ul><li>Quotations ▼</li></ul></li>
</ol>
<h5><span class="mw-headline" id="Synonyms">Synonyms</span></h5>
<ul>
<li>board</li>
<li>stand</li>
</ul>
<h5><span class="mw-headline" id="Translations">Translations</span></h5>
<div class="NavFrame">
<div class="NavHead">item of furniture</div>
<div class="NavContent"><table class="translations"><tbody><tr>
<td class="translations-cell"><ul>
<li>Chinese:<dl><dd>Cantonese: 檯 (toi4)</dd><dd>Mandarin: 桌子 (zhuōzi)</dd></dl></li>
<li>Esperanto tablo</li>
<li>French: table <span class="gender">f</span>, tablette <span class="gender">f</span></li>
</ul></td>
<td class="translations-cell"><ul>
<li>German: Tisch <span class="gender">m</span></li>
</ul></td>
</tr></tbody></table></div>
</div>
<div class="NavFrame">
<div class="NavHead">matrix or grid of data</div>
<div class="NavContent"><table class="translations"><tbody><tr>
<td class="translations-cell"></td>
</tr></tbody></table></div>
</div>
<h3><span class="mw-headline" id="Etymology_2">Etymology 2</span></h3>
<p>From the noun.</p>
<h4><span class="mw-headline" id="Verb">Verb</span></h4>
<p><strong class="Latn headword" lang="en">table</strong> (<i>third-person singular simple present</i> <b>tables</b>)</p>
<ol>
<li>To put on the table for discussion.<dl><dd>I would like to table the motion.</dd></dl></li>
</ol>
<h5><span class="mw-headline" id="Translations_2">Translations</span></h5>
<div class="pseudo NavFrame">
<div class="NavHead">to put on the table</div>
<div>See <a href="/wiki/table/translations#Verb" title="table/translations">table/translations</a>.</div>
</div>
<h3><span class="mw-headline" id="Anagrams">Anagrams</span></h3>
<ul><li>bleat</li></ul>
<hr>
<h2><span class="mw-headline" id="Spanish">Spanish</span></h2>
<h3><span class="mw-headline" id="Noun_2">Noun</span></h3>
<ol><li>board</li></ol>
</div></div></body></html>"##;

const TRANSLATIONS_SUBPAGE: &str = r##"<!DOCTYPE html>
<html lang="en"><head><title>table/translations - Wiktionary</title></head>
<body><div id="mw-content-text"><div class="mw-parser-output">
<h2><span class="mw-headline" id="English">English</span></h2>
<h3><span class="mw-headline" id="Noun">Noun</span></h3>
<p><strong class="Latn headword" lang="en">table</strong></p>
<div class="NavFrame">
<div class="NavHead">item of furniture</div>
<div class="NavContent"><table class="translations"><tbody><tr>
<td class="translations-cell"><ul><li>Dutch: tafel <span class="gender">m</span></li></ul></td>
</tr></tbody></table></div>
</div>
<h3><span class="mw-headline" id="Verb">Verb</span></h3>
<p><strong class="Latn headword" lang="en">table</strong></p>
<div class="NavFrame">
<div class="NavHead">to put on the table</div>
<div class="NavContent"><table class="translations"><tbody><tr>
<td class="translations-cell"><ul>
<li>German: auftischen</li>
<li>Spanish: presentar</li>
</ul></td>
</tr></tbody></table></div>
</div>
<div class="NavFrame">
<div class="NavHead">to postpone</div>
<div class="NavContent"><table class="translations"><tbody><tr>
<td class="translations-cell"><ul>
<li>French: ajourner, reporter</li>
<li>German: vertagen</li>
</ul></td>
</tr></tbody></table></div>
</div>
</div></div></body></html>"##;

const SINGLE_SECTION_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en"><body><div class="mw-parser-output">
<h2><span class="mw-headline" id="English">English</span></h2>
<h3><span class="mw-headline" id="Noun">Noun</span></h3>
<p><strong class="Latn headword" lang="en">tablet</strong></p>
<ol>
<li>A slab of stone bearing an inscription.</li>
</ol>
</div></body></html>"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        assert_eq!(
            table_url(),
            "https://en.wiktionary.org/wiki/table?printable=yes&oldid=62356373"
        );
        assert_eq!(
            table_translations_url(),
            "https://en.wiktionary.org/wiki/table/translations?printable=yes"
        );
    }

    #[test]
    fn test_pages_have_anchors() {
        assert!(table_page().contains(r#"id="Translations_2""#));
        assert!(translations_subpage().contains(r#"id="Verb""#));
        assert!(!single_section_page().contains("toctext"));
    }
}
