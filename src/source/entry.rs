//! The raw record a [`FeedParser`](super::FeedParser) yields for each item in
//! a feed.
//!
//! Parsers copy whatever the feed provides and leave the rest as `None`.
//! Deciding what an absent field means (skip the entry, default the title)
//! is the fetch pipeline's job, not the parser's.

/// One entry from a parsed feed.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct FeedEntry {
    /// Headline, if the feed gave one.
    pub title: Option<String>,

    /// Link to the article. Used as the entry's identity when deduplicating.
    pub link: Option<String>,
}

impl FeedEntry {
    /// Shorthand for an entry that carries both fields.
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            link: Some(link.into()),
        }
    }

    /// The link, treating an empty string the same as a missing one.
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref().filter(|l| !l.is_empty())
    }

    /// The title, or `""` when the feed omitted it.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }
}
