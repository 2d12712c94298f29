//! Command-line entry point: run one fetch cycle and print what is new.
//!
//! Feeds come from `RSS_FEEDS` or the config file named by `RSS_CONFIG`
//! (default `rss_config.json`); seen links persist in `seen_articles.json`
//! in the working directory. Each new article is printed to stdout as
//! `title - link`. Logs go to stderr and are controlled by `RUST_LOG`.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use rss_fetcher::{FeedSettings, Fetcher, RssParser, SeenStore, DEFAULT_SEEN_FILE};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = FeedSettings::from_env();
    let parser = RssParser::new().context("Failed to build HTTP client")?;
    let fetcher = Fetcher::new(parser, SeenStore::new(DEFAULT_SEEN_FILE), settings);

    let articles = fetcher
        .fetch_new_articles(None)
        .context("Fetch cycle failed")?;

    for article in &articles {
        println!("{article}");
    }

    Ok(())
}
