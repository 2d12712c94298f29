//! Feed parser abstraction layer.
//!
//! This module defines the [`FeedParser`] trait, the [`FeedEntry`] record it
//! produces, and the [`SourceError`] it fails with. The production parser
//! lives in [`rss`]; tests swap in closures or small structs.
//!
//! ## For contributors — adding a new feed format
//!
//! 1. Create a new file in this directory (e.g. `atom.rs`).
//! 2. Define a struct (e.g. `AtomParser`) and implement [`FeedParser`] for it.
//! 3. Add `mod atom;` below and re-export your struct in the `pub use` block.
//! 4. Hand an instance to [`Fetcher::new`](crate::Fetcher::new) in `main.rs`.
//!
//! The deduplication and persistence logic only ever sees [`FeedEntry`]
//! values, so it needs no changes.

mod entry;
pub mod rss;

pub use self::entry::FeedEntry;
pub use self::rss::RssParser;

use thiserror::Error;

/// Why a single feed could not be fetched or parsed.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not read feed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid RSS document: {0}")]
    Rss(#[from] ::rss::Error),

    #[error("unrecognised feed document: {0}")]
    Feed(#[from] feed_rs::parser::ParseFeedError),
}

/// Capability that turns a feed location into its entries.
///
/// The fetch pipeline is the only caller. It calls [`parse()`](FeedParser::parse)
/// once per configured feed, in order, and aborts the whole cycle on the first
/// error.
///
/// Any `Fn(&str) -> Result<Vec<FeedEntry>, SourceError>` is a parser, which is
/// handy for test doubles:
///
/// ```ignore
/// let parser = |_url: &str| Ok(vec![FeedEntry::new("Article 1", "http://article1")]);
/// let fetcher = Fetcher::new(parser, SeenStore::new("seen.json"), FeedSettings::default());
/// ```
pub trait FeedParser {
    /// Fetch and parse the feed at `url`.
    fn parse(&self, url: &str) -> Result<Vec<FeedEntry>, SourceError>;
}

impl<F> FeedParser for F
where
    F: Fn(&str) -> Result<Vec<FeedEntry>, SourceError>,
{
    fn parse(&self, url: &str) -> Result<Vec<FeedEntry>, SourceError> {
        self(url)
    }
}
