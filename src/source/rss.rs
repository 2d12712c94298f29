//! RSS feed parser implementation.
//!
//! Remote feeds (`http://` and `https://`) are downloaded with a blocking
//! [`reqwest`] client; anything else is treated as a path on the local
//! filesystem, with or without a `file://` prefix. Either way the body is
//! parsed as an RSS 2.0 channel with the [`rss`](::rss) crate. Documents whose
//! root is not `<rss>` (Atom, RSS 1.0, JSON Feed) go through [`feed_rs`]
//! instead.

use std::path::Path;

use reqwest::blocking::Client;

use super::{FeedEntry, FeedParser, SourceError};

const USER_AGENT: &str = concat!("rss-fetcher/", env!("CARGO_PKG_VERSION"));

/// The production [`FeedParser`].
///
/// Holds one HTTP client for the lifetime of the parser so every feed in a
/// cycle reuses the same connection pool.
pub struct RssParser {
    client: Client,
}

impl RssParser {
    pub fn new() -> Result<Self, SourceError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// Parse an already-fetched [`rss::Channel`](::rss::Channel) into
    /// [`FeedEntry`]s.
    ///
    /// This is a pure function (no I/O) so that tests can exercise the
    /// parsing logic without hitting the network.
    pub fn parse_channel(channel: &::rss::Channel) -> Vec<FeedEntry> {
        channel
            .items()
            .iter()
            .map(|item| FeedEntry {
                title: item.title().map(String::from),
                link: item.link().map(String::from),
            })
            .collect()
    }

    /// Parse a [`feed_rs`] model (Atom and friends) into [`FeedEntry`]s,
    /// taking the first link of each entry.
    pub fn parse_feed(feed: feed_rs::model::Feed) -> Vec<FeedEntry> {
        feed.entries
            .into_iter()
            .map(|entry| FeedEntry {
                title: entry.title.map(|t| t.content),
                link: entry.links.into_iter().next().map(|l| l.href),
            })
            .collect()
    }

    fn read_body(&self, url: &str) -> Result<Vec<u8>, SourceError> {
        if is_remote(url) {
            let body = self.client.get(url).send()?.error_for_status()?.bytes()?;
            return Ok(body.to_vec());
        }
        let path = Path::new(url.strip_prefix("file://").unwrap_or(url));
        Ok(std::fs::read(path)?)
    }
}

impl FeedParser for RssParser {
    fn parse(&self, url: &str) -> Result<Vec<FeedEntry>, SourceError> {
        let body = self.read_body(url)?;
        let entries = match ::rss::Channel::read_from(body.as_slice()) {
            Ok(channel) => Self::parse_channel(&channel),
            Err(::rss::Error::InvalidStartTag) => {
                Self::parse_feed(feed_rs::parser::parse(body.as_slice())?)
            }
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(url = %url, entries = entries.len(), "parsed feed");
        Ok(entries)
    }
}

fn is_remote(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
