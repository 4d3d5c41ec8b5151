//! reqwest-backed fetcher with bounded retries.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, warn};

use super::protocols::{FetchResult, Fetcher};
use crate::config::{FetchConfig, RetryConfig};
use crate::errors::WiktionaryError;

/// Fetches pages over HTTP with a shared client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

impl HttpFetcher {
    /// Builds the client from `config`.
    pub fn new(config: FetchConfig) -> Result<Self, WiktionaryError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.clone())
            .default_headers(header_map(&config.headers)?)
            .build()
            .map_err(|e| WiktionaryError::config(format!("cannot build HTTP client: {e}")))?;
        Ok(Self::with_client(client, config))
    }

    /// Uses a prebuilt client. Only the retry policy of `config` applies;
    /// timeouts, redirects and headers are whatever `client` was built with.
    #[must_use]
    pub fn with_client(client: reqwest::Client, config: FetchConfig) -> Self {
        Self { client, config }
    }

    /// Gets the configuration.
    #[must_use]
    pub const fn config(&self) -> &FetchConfig {
        &self.config
    }

    async fn fetch_once(&self, url: &str) -> Result<FetchResult, WiktionaryError> {
        let start = Instant::now();
        let transport = |source| WiktionaryError::Http {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;
        let status_code = response.status().as_u16();
        let final_url = response.url().to_string();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let content_type = headers.get("content-type").cloned();
        let text = response.text().await.map_err(transport)?;

        Ok(FetchResult {
            status_code,
            headers,
            text,
            final_url,
            content_type,
            duration_ms: start.elapsed().as_secs_f64() * 1000.0,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResult, WiktionaryError> {
        let retry = &self.config.retry;
        let mut attempt = 0;
        loop {
            let outcome = self.fetch_once(url).await;
            if attempt >= retry.max_retries || !should_retry(retry, &outcome) {
                return finish(url, outcome);
            }

            let delay = retry.delay_for_attempt(attempt);
            match &outcome {
                Ok(result) => debug!(
                    url,
                    status = result.status_code,
                    attempt = attempt + 1,
                    ?delay,
                    "Retryable status, retrying"
                ),
                Err(e) => debug!(url, error = %e, attempt = attempt + 1, ?delay, "Fetch failed, retrying"),
            }
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}

fn should_retry(retry: &RetryConfig, outcome: &Result<FetchResult, WiktionaryError>) -> bool {
    match outcome {
        Ok(result) => !result.is_success() && retry.should_retry_status(result.status_code),
        Err(WiktionaryError::Http { .. }) => true,
        Err(_) => false,
    }
}

fn finish(
    url: &str,
    outcome: Result<FetchResult, WiktionaryError>,
) -> Result<FetchResult, WiktionaryError> {
    match outcome {
        Ok(result) if result.is_success() && !result.is_html() => {
            warn!(url, content_type = ?result.content_type, "Fetch returned a non-HTML body");
            Err(WiktionaryError::NotHtml {
                url: url.to_string(),
                content_type: result.content_type,
            })
        }
        Ok(result) if result.is_success() => {
            debug!(
                url,
                status = result.status_code,
                duration_ms = result.duration_ms,
                "Fetched page"
            );
            Ok(result)
        }
        Ok(result) => {
            warn!(url, status = result.status_code, "Fetch returned non-success status");
            Err(WiktionaryError::status(url, result.status_code))
        }
        Err(e) => {
            warn!(url, error = %e, "Fetch failed");
            Err(e)
        }
    }
}

fn header_map(headers: &HashMap<String, String>) -> Result<HeaderMap, WiktionaryError> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| WiktionaryError::config(format!("invalid header name {name:?}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| WiktionaryError::config(format!("invalid header value for {name}: {e}")))?;
        map.insert(name, value);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves `reply` to every connection, or drops the connection unread
    /// when `reply` is `None`. Returns the base URL and a connection counter.
    async fn serve(reply: Option<&'static str>) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/wiki/table", listener.local_addr().unwrap());
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                let Some(reply) = reply else {
                    drop(socket);
                    continue;
                };
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let _ = socket.write_all(reply.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        (url, hits)
    }

    fn local_fetcher() -> HttpFetcher {
        let retry = RetryConfig {
            retry_delay_seconds: 0.0,
            ..RetryConfig::default()
        }
        .with_jitter(false);
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        HttpFetcher::with_client(client, FetchConfig::new().with_retry(retry))
    }

    const UNAVAILABLE: &str =
        "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";
    const NOT_FOUND: &str =
        "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";
    const JSON: &str = "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{}";
    const PAGE: &str = "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=UTF-8\r\nContent-Length: 13\r\nConnection: close\r\n\r\n<p>table</p>\n";

    fn response(status: u16) -> FetchResult {
        let mut result = FetchResult::html("https://en.wiktionary.org/wiki/table", "");
        result.status_code = status;
        result
    }

    #[test]
    fn test_new_with_headers() {
        let config = FetchConfig::new().with_header("Accept-Language", "en");
        let fetcher = HttpFetcher::new(config).unwrap();
        assert_eq!(fetcher.config().headers.len(), 1);
    }

    #[test]
    fn test_invalid_header_is_config_error() {
        let config = FetchConfig::new().with_header("bad header", "x");
        let err = HttpFetcher::new(config).unwrap_err();
        assert!(matches!(err, WiktionaryError::Config(_)));
    }

    #[test]
    fn test_should_retry() {
        let retry = RetryConfig::default();
        assert!(should_retry(&retry, &Ok(response(503))));
        assert!(should_retry(&retry, &Ok(response(429))));
        assert!(!should_retry(&retry, &Ok(response(404))));
        assert!(!should_retry(&retry, &Ok(response(200))));
        assert!(!should_retry(
            &retry,
            &Err(WiktionaryError::config("not a transport error"))
        ));
    }

    #[test]
    fn test_finish_maps_status() {
        let err = finish("https://x", Ok(response(404))).unwrap_err();
        assert!(matches!(err, WiktionaryError::Status { status: 404, .. }));
        assert!(finish("https://x", Ok(response(200))).is_ok());
    }

    #[test]
    fn test_finish_rejects_non_html() {
        let mut json = response(200);
        json.content_type = Some("application/json".to_string());
        let err = finish("https://x", Ok(json)).unwrap_err();
        assert!(matches!(err, WiktionaryError::NotHtml { .. }));
    }

    #[tokio::test]
    async fn test_retryable_status_gives_up_after_max_retries() {
        let (url, hits) = serve(Some(UNAVAILABLE)).await;
        let err = local_fetcher().fetch(&url).await.unwrap_err();

        assert!(matches!(err, WiktionaryError::Status { status: 503, .. }));
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_transport_error_gives_up_after_max_retries() {
        let (url, hits) = serve(None).await;
        let err = local_fetcher().fetch(&url).await.unwrap_err();

        assert!(matches!(err, WiktionaryError::Http { .. }));
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_non_retryable_status_fails_at_once() {
        let (url, hits) = serve(Some(NOT_FOUND)).await;
        let err = local_fetcher().fetch(&url).await.unwrap_err();

        assert!(matches!(err, WiktionaryError::Status { status: 404, .. }));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fetch_page_and_reject_json() {
        let (url, _) = serve(Some(PAGE)).await;
        let page = local_fetcher().fetch(&url).await.unwrap();
        assert_eq!(page.text, "<p>table</p>\n");
        assert!(page.is_html());

        let (url, hits) = serve(Some(JSON)).await;
        let err = local_fetcher().fetch(&url).await.unwrap_err();
        assert!(matches!(err, WiktionaryError::NotHtml { .. }));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
