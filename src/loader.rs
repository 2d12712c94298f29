//! Adapter that hands new articles to document-oriented consumers.
//!
//! Each [`Article`] becomes a [`Document`] whose content is the title and
//! whose `source` metadata is the link. The mapping is pure; all I/O happens
//! in the wrapped [`Fetcher`].

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::article::Article;
use crate::error::Result;
use crate::fetcher::Fetcher;
use crate::source::FeedParser;

/// Metadata key holding the article link.
pub const SOURCE_KEY: &str = "source";

/// A generic text document with string metadata.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub page_content: String,
    pub metadata: BTreeMap<String, String>,
}

impl From<Article> for Document {
    fn from(article: Article) -> Self {
        Self {
            page_content: article.title,
            metadata: BTreeMap::from([(SOURCE_KEY.to_string(), article.link)]),
        }
    }
}

/// Loads the articles of one fetch cycle as [`Document`]s.
pub struct DocumentLoader<P> {
    fetcher: Fetcher<P>,
    config_path: Option<PathBuf>,
}

impl<P: FeedParser> DocumentLoader<P> {
    /// `config_path` is handed to [`Fetcher::fetch_new_articles`] on every load.
    pub fn new(fetcher: Fetcher<P>, config_path: Option<PathBuf>) -> Self {
        Self {
            fetcher,
            config_path,
        }
    }

    /// Run one fetch cycle and convert each new article.
    pub fn load(&self) -> Result<Vec<Document>> {
        let articles = self.fetcher.fetch_new_articles(self.config_path.as_deref())?;
        Ok(articles.into_iter().map(Document::from).collect())
    }
}
