//! Configuration types.
//!
//! All configuration is plain serde data with defaults, so a parser can be
//! built from an empty JSON object.

mod fetch;
mod parser;

pub use fetch::{FetchConfig, RetryConfig};
pub use parser::ParserConfig;
