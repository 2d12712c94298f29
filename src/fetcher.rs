//! The deduplicating fetch cycle.
//!
//! One call to [`Fetcher::fetch_new_articles`] resolves the feed list, loads
//! the seen-articles store, asks the [`FeedParser`] for every feed in order,
//! keeps only entries whose link has never been reported, and saves the
//! grown store if anything new turned up.
//!
//! ## For contributors
//!
//! The cycle is intentionally simple: feeds are fetched one at a time on the
//! calling thread, and the first failing feed aborts the cycle before the
//! store is touched. There are no retries and no per-feed isolation.

use std::path::Path;

use crate::article::Article;
use crate::config::{resolve_feed_urls, FeedSettings};
use crate::error::{Error, Result};
use crate::seen::{SeenSet, SeenStore};
use crate::source::{FeedEntry, FeedParser};

/// Runs fetch cycles against one parser and one seen-articles store.
pub struct Fetcher<P> {
    parser: P,
    store: SeenStore,
    settings: FeedSettings,
}

impl<P: FeedParser> Fetcher<P> {
    pub fn new(parser: P, store: SeenStore, settings: FeedSettings) -> Self {
        Self {
            parser,
            store,
            settings,
        }
    }

    pub fn store(&self) -> &SeenStore {
        &self.store
    }

    /// Run one full cycle and return the articles not seen before, in
    /// discovery order (feed order, then entry order within a feed).
    ///
    /// `config_path` is forwarded to [`resolve_feed_urls`].
    pub fn fetch_new_articles(&self, config_path: Option<&Path>) -> Result<Vec<Article>> {
        let urls = resolve_feed_urls(&self.settings, config_path)?;
        self.poll(&urls)
    }

    /// Run the cycle for an already-resolved feed list.
    ///
    /// The store is written only when at least one new article was found, so
    /// a quiet cycle leaves it byte-for-byte untouched.
    pub fn poll(&self, urls: &[String]) -> Result<Vec<Article>> {
        let mut seen = self.store.load()?;
        let mut new_articles = Vec::new();

        for url in urls {
            let entries = self.parser.parse(url).map_err(|source| Error::Fetch {
                url: url.clone(),
                source,
            })?;
            let before = new_articles.len();
            collect_new(&entries, &mut seen, &mut new_articles);
            tracing::debug!(
                url = %url,
                entries = entries.len(),
                new = new_articles.len() - before,
                "Checked feed"
            );
        }

        if !new_articles.is_empty() {
            self.store.save(&seen)?;
        }

        tracing::info!(
            feeds = urls.len(),
            new = new_articles.len(),
            seen = seen.len(),
            "Fetch cycle complete"
        );
        Ok(new_articles)
    }
}

/// Append every entry whose link is not in `seen`, marking it seen as we go so
/// a link repeated later in the same cycle is only reported once. Entries
/// without a link are skipped and leave `seen` unchanged.
fn collect_new(entries: &[FeedEntry], seen: &mut SeenSet, out: &mut Vec<Article>) {
    for entry in entries {
        let Some(link) = entry.link() else {
            continue;
        };
        if seen.insert(link) {
            out.push(Article::new(entry.title(), link));
        }
    }
}
