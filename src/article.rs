use std::fmt;

use serde::{Deserialize, Serialize};

/// A newly discovered article: what the fetch pipeline hands back to callers.
///
/// Only the `link` outlives the cycle, as an entry in the seen-articles store.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Headline; empty when the feed entry had none.
    pub title: String,
    pub link: String,
}

impl Article {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}

/// `"{title} - {link}"`, the line the CLI prints for each article.
impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.title, self.link)
    }
}
