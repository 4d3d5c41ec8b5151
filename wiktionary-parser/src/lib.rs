//! # Wiktionary Parser
//!
//! Scrapes word entries from Wiktionary's printable HTML pages and
//! restructures them into typed documents.
//!
//! A fetch goes through these steps:
//!
//! - **Locate**: scope the table of contents to the target language and
//!   match heading labels against part-of-speech and relation checklists
//! - **Extract**: walk the page from each heading and collect etymologies,
//!   pronunciations, glosses, examples, related words and translations
//! - **Correlate**: attach everything to its etymology and definition by
//!   comparing dotted section indices
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wiktionary_parser::prelude::*;
//!
//! let parser = WiktionaryParser::new()?;
//! let document = parser.fetch("table", None, None).await?;
//! for meaning in document.meanings() {
//!     println!("{meaning:?}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod correlate;
pub mod errors;
pub mod extract;
pub mod fetch;
pub mod html;
pub mod index;
pub mod locator;
pub mod model;
pub mod parser;
pub mod profile;
pub mod testing;
pub mod view;


/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{FetchConfig, ParserConfig, RetryConfig};
    pub use crate::correlate::map_to_object;
    pub use crate::errors::{ParseContext, TranslationParsingError, WiktionaryError};
    pub use crate::fetch::{FetchResult, Fetcher, HttpFetcher};
    pub use crate::index::SectionIndex;
    pub use crate::model::{
        DefinitionBlock, EtymologyBlock, RelatedWordGroup, TranslationMap, TranslationSense,
        TranslationText, TranslationValue, WordDocument,
    };
    pub use crate::parser::{FetchOutput, FetchRequest, WiktionaryParser};
    pub use crate::profile::{LabelMatch, LanguageProfile, ProfileKind, Vocabulary};
    pub use crate::view::TranslationView;
}
