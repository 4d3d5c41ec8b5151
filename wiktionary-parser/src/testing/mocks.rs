//! Fetchers that never touch the network.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;

use crate::errors::WiktionaryError;
use crate::fetch::{FetchResult, Fetcher};

/// Serves recorded pages by URL and remembers what was asked for.
///
/// Unknown URLs answer with a 404 status error.
#[derive(Debug, Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl StaticFetcher {
    /// Creates a fetcher with no pages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a page.
    #[must_use]
    pub fn with_page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), body.into());
        self
    }

    /// URLs requested so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    /// Number of requests so far.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Forgets recorded requests.
    pub fn reset(&self) {
        self.requests.lock().clear();
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResult, WiktionaryError> {
        self.requests.lock().push(url.to_string());
        self.pages
            .get(url)
            .map(|body| FetchResult::html(url, body.clone()))
            .ok_or_else(|| WiktionaryError::status(url, 404))
    }
}

/// A fetcher that fails every request with the same status.
#[derive(Debug)]
pub struct FailingFetcher {
    status: u16,
    call_count: Mutex<usize>,
}

impl FailingFetcher {
    /// Creates a fetcher answering `status` to everything.
    #[must_use]
    pub const fn new(status: u16) -> Self {
        Self {
            status,
            call_count: Mutex::new(0),
        }
    }

    /// Returns the number of times the fetcher was called.
    #[must_use]
    pub fn call_count(&self) -> usize {
        *self.call_count.lock()
    }
}

#[async_trait]
impl Fetcher for FailingFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResult, WiktionaryError> {
        *self.call_count.lock() += 1;
        Err(WiktionaryError::status(url, self.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_fetcher() {
        let fetcher = StaticFetcher::new().with_page("https://a", "<p>a</p>");

        let result = fetcher.fetch("https://a").await.unwrap();
        assert_eq!(result.text, "<p>a</p>");
        assert!(result.is_html());

        let err = fetcher.fetch("https://b").await.unwrap_err();
        assert!(matches!(err, WiktionaryError::Status { status: 404, .. }));
        assert_eq!(fetcher.requests(), vec!["https://a", "https://b"]);

        fetcher.reset();
        assert_eq!(fetcher.request_count(), 0);
    }

    #[tokio::test]
    async fn test_failing_fetcher() {
        let fetcher = FailingFetcher::new(503);
        assert!(fetcher.fetch("https://a").await.is_err());
        assert!(fetcher.fetch("https://a").await.is_err());
        assert_eq!(fetcher.call_count(), 2);
    }
}
