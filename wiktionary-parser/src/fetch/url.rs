//! Wiktionary URL templates.

/// URL of the printable rendering of `page` on a site.
///
/// Spaces become underscores, as in Wiktionary page titles. `old_id` pins
/// a revision.
#[must_use]
pub fn page_url(site_code: &str, page: &str, old_id: Option<&str>) -> String {
    let title = page.trim().replace(' ', "_");
    let mut url = format!("https://{site_code}.wiktionary.org/wiki/{title}?printable=yes");
    if let Some(id) = old_id.map(str::trim).filter(|id| !id.is_empty()) {
        url.push_str("&oldid=");
        url.push_str(id);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url() {
        assert_eq!(
            page_url("en", "table", None),
            "https://en.wiktionary.org/wiki/table?printable=yes"
        );
        assert_eq!(
            page_url("es", "mesa", Some("50291766")),
            "https://es.wiktionary.org/wiki/mesa?printable=yes&oldid=50291766"
        );
    }

    #[test]
    fn test_page_url_titles() {
        assert_eq!(
            page_url("en", "ice cream", Some(" ")),
            "https://en.wiktionary.org/wiki/ice_cream?printable=yes"
        );
        assert_eq!(
            page_url("en", "table/translations", None),
            "https://en.wiktionary.org/wiki/table/translations?printable=yes"
        );
    }
}
