//! Page retrieval.

mod http;
mod protocols;
mod url;

pub use http::HttpFetcher;
pub use protocols::{FetchResult, Fetcher};
pub use url::page_url;

#[cfg(test)]
pub use protocols::MockFetcher;
