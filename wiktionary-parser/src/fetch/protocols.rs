//! The fetcher seam.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::errors::WiktionaryError;

/// Result of a fetch operation.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResult {
    /// HTTP status code.
    pub status_code: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body as text.
    pub text: String,
    /// Final URL after redirects.
    pub final_url: String,
    /// Content type from headers.
    pub content_type: Option<String>,
    /// Time taken to fetch in milliseconds.
    pub duration_ms: f64,
}

impl FetchResult {
    /// A 200 HTML response with `text` as body.
    #[must_use]
    pub fn html(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            headers: HashMap::new(),
            text: text.into(),
            final_url: url.into(),
            content_type: Some("text/html; charset=UTF-8".to_string()),
            duration_ms: 0.0,
        }
    }

    /// Whether the response is HTML.
    #[must_use]
    pub fn is_html(&self) -> bool {
        self.content_type
            .as_ref()
            .is_some_and(|ct| ct.contains("text/html") || ct.contains("application/xhtml"))
    }

    /// Whether the fetch was successful (2xx status).
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Retrieves page bodies by URL.
///
/// Implementations own their retry policy. A returned `Ok` is always a
/// successful response.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches a URL and returns the result.
    async fn fetch(&self, url: &str) -> Result<FetchResult, WiktionaryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_result_flags() {
        let mut result = FetchResult::html("https://en.wiktionary.org/wiki/table", "<html/>");
        assert!(result.is_html());
        assert!(result.is_success());

        result.status_code = 404;
        result.content_type = Some("application/json".to_string());
        assert!(!result.is_html());
        assert!(!result.is_success());
    }

    #[tokio::test]
    async fn test_mock_fetcher() {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch()
            .withf(|url| url.ends_with("/table"))
            .returning(|url| Ok(FetchResult::html(url.to_string(), "body")));

        let result = fetcher
            .fetch("https://en.wiktionary.org/wiki/table")
            .await
            .unwrap();
        assert_eq!(result.text, "body");
    }
}
