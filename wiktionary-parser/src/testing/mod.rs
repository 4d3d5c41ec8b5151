//! Testing utilities: offline fetchers and recorded pages.

pub mod fixtures;
mod mocks;

pub use mocks::{FailingFetcher, StaticFetcher};
