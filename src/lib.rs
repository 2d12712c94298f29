//! rss-fetcher — poll RSS feeds and report only the articles not seen before.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌───────────┐ URLs  ┌────────────┐ parse(url) ┌───────────┐
//! │ config.rs │ ────► │ fetcher.rs │ ─────────► │  source/  │
//! │ (resolve) │       │  (cycle)   │ ◄───────── │ (parser)  │
//! └───────────┘       └────────────┘  entries   └───────────┘
//!                       │        ▲
//!                  save │        │ load
//!                       ▼        │
//!                     ┌────────────┐
//!                     │  seen.rs   │
//!                     │  (store)   │
//!                     └────────────┘
//! ```
//!
//! * **`config`** — decides which feeds to poll, from `RSS_FEEDS` or a JSON
//!   config file.
//! * **`source/`** — the `FeedParser` trait and the RSS implementation.
//! * **`seen`** — the set of already-reported links and its JSON file store.
//! * **`fetcher`** — one deduplicating fetch cycle over all feeds.
//! * **`loader`** — maps new articles to generic documents for downstream use.
//! * **`main`** — the CLI: runs one cycle and prints `title - link` lines.

pub mod article;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod loader;
pub mod seen;
pub mod source;

pub use article::Article;
pub use config::{resolve_feed_urls, FeedSettings};
pub use error::{Error, Result};
pub use fetcher::Fetcher;
pub use loader::{Document, DocumentLoader};
pub use seen::{SeenSet, SeenStore, DEFAULT_SEEN_FILE};
pub use source::{FeedEntry, FeedParser, RssParser, SourceError};
