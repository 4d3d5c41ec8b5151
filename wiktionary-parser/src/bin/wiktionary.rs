//! Command-line front end: fetch a word and print its document.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wiktionary_parser::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "wiktionary")]
#[command(about = "Fetch a Wiktionary entry and print it as JSON")]
struct Args {
    /// Word to look up
    word: String,

    /// Target language (defaults to the site's own language)
    #[arg(short, long)]
    language: Option<String>,

    /// Wiktionary site: en, es or ru
    #[arg(short, long)]
    site: Option<String>,

    /// Revision id to pin
    #[arg(long)]
    old_id: Option<String>,

    /// JSON parser configuration file
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Print translations for language prefixes instead of the document;
    /// no prefix prints every language
    #[arg(short, long, num_args = 0..)]
    translations: Option<Vec<String>>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            ParserConfig::from_json_str(&json)?
        }
        None => ParserConfig::default(),
    };
    if let Some(site) = &args.site {
        config.profile =
            ProfileKind::from_code(site).ok_or_else(|| anyhow!("unknown site {site:?}"))?;
    }

    let parser = WiktionaryParser::from_config(&config)?;
    let document = parser
        .fetch(&args.word, args.language.as_deref(), args.old_id.as_deref())
        .await?;

    match &args.translations {
        Some(prefixes) => print!("{}", TranslationView::new(&document).render(prefixes.as_slice())),
        None => println!("{}", serde_json::to_string_pretty(&document)?),
    }
    Ok(())
}
