//! Feed source resolution.
//!
//! The list of feeds to poll comes from, in strict priority order:
//!
//! 1. `RSS_FEEDS`: comma-separated URLs. Wins over everything, including an
//!    explicit config path.
//! 2. A JSON config file: the explicit path if given, else `RSS_CONFIG`, else
//!    `rss_config.json`. A missing file means no feeds, not an error.
//!
//! Environment variables are read once, at the boundary, into a
//! [`FeedSettings`] value. Resolution itself only looks at that value and the
//! filesystem.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

pub const FEEDS_ENV_VAR: &str = "RSS_FEEDS";
pub const CONFIG_ENV_VAR: &str = "RSS_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "rss_config.json";

/// Feed configuration taken from the environment.
///
/// Empty values are normalised to `None`, so an exported-but-blank variable
/// behaves as if it were unset.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct FeedSettings {
    /// Raw value of `RSS_FEEDS`.
    pub inline_feeds: Option<String>,
    /// Value of `RSS_CONFIG`.
    pub config_path: Option<PathBuf>,
}

impl FeedSettings {
    /// Read `RSS_FEEDS` and `RSS_CONFIG` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            inline_feeds: non_empty(FEEDS_ENV_VAR),
            config_path: non_empty(CONFIG_ENV_VAR).map(PathBuf::from),
        }
    }
}

/// The two accepted config file shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ConfigFile {
    /// `["https://…", "https://…"]`
    List(Vec<String>),
    /// `{"feeds": ["https://…"]}`; a missing `feeds` key means no feeds.
    Keyed {
        #[serde(default)]
        feeds: Vec<String>,
    },
}

impl ConfigFile {
    fn into_feeds(self) -> Vec<String> {
        match self {
            Self::List(feeds) | Self::Keyed { feeds } => feeds,
        }
    }
}

/// Resolve the ordered list of feed URLs to poll.
///
/// - `RSS_FEEDS` set → its comma-split, trimmed, non-empty pieces
/// - Config file present → its feed list
/// - Config file absent → `Ok(vec![])`
/// - Config file unreadable → [`Error::Io`]
/// - Config file malformed or the wrong shape → [`Error::Config`]
pub fn resolve_feed_urls(
    settings: &FeedSettings,
    explicit_path: Option<&Path>,
) -> Result<Vec<String>> {
    if let Some(inline) = settings.inline_feeds.as_deref().filter(|v| !v.is_empty()) {
        let feeds = split_feed_list(inline);
        tracing::debug!(count = feeds.len(), "Using feeds from {FEEDS_ENV_VAR}");
        return Ok(feeds);
    }

    let path = config_file_path(settings, explicit_path);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No feed config file found, nothing to poll");
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ConfigFile = serde_json::from_str(&content).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })?;

    let feeds = config.into_feeds();
    tracing::debug!(path = %path.display(), count = feeds.len(), "Loaded feeds from config file");
    Ok(feeds)
}

/// Explicit path, else `RSS_CONFIG`, else [`DEFAULT_CONFIG_FILE`].
fn config_file_path<'a>(settings: &'a FeedSettings, explicit_path: Option<&'a Path>) -> &'a Path {
    explicit_path
        .filter(|p| !p.as_os_str().is_empty())
        .or(settings.config_path.as_deref())
        .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE))
}

fn split_feed_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScratchDir;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn inline(feeds: &str) -> FeedSettings {
        FeedSettings {
            inline_feeds: Some(feeds.to_string()),
            config_path: None,
        }
    }

    fn write_config(dir: &ScratchDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.json");
        std::fs::write(&path, content).unwrap();
        path
    }

    // -- settings ------------------------------------------------------------

    #[test]
    fn from_lookup_reads_both_variables() {
        let env: HashMap<&str, &str> =
            HashMap::from([(FEEDS_ENV_VAR, "http://a"), (CONFIG_ENV_VAR, "feeds.json")]);
        let settings = FeedSettings::from_lookup(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(settings.inline_feeds.as_deref(), Some("http://a"));
        assert_eq!(settings.config_path, Some(PathBuf::from("feeds.json")));
    }

    #[test]
    fn from_lookup_treats_empty_as_unset() {
        let settings = FeedSettings::from_lookup(|_| Some(String::new()));
        assert_eq!(settings, FeedSettings::default());
    }

    // -- inline feeds --------------------------------------------------------

    #[test]
    fn inline_feeds_are_split_and_trimmed() {
        let feeds = resolve_feed_urls(&inline("http://env1.com, http://env2.com"), None).unwrap();
        assert_eq!(feeds, vec!["http://env1.com", "http://env2.com"]);
    }

    #[test]
    fn inline_feeds_drop_empty_pieces() {
        let feeds = resolve_feed_urls(&inline(" ,http://a,, http://b ,"), None).unwrap();
        assert_eq!(feeds, vec!["http://a", "http://b"]);
    }

    #[test]
    fn inline_feeds_of_only_separators_resolve_to_nothing() {
        let dir = ScratchDir::new("config_inline_blank");
        let path = write_config(&dir, r#"["http://file"]"#);

        let feeds = resolve_feed_urls(&inline(" , "), Some(&path)).unwrap();
        assert!(feeds.is_empty());
    }

    #[test]
    fn inline_feeds_override_explicit_config() {
        let dir = ScratchDir::new("config_inline_wins");
        let path = write_config(&dir, r#"["http://example.com/feed"]"#);

        let settings = FeedSettings {
            inline_feeds: Some("http://env1.com, http://env2.com".into()),
            config_path: Some(path.clone()),
        };
        let feeds = resolve_feed_urls(&settings, Some(&path)).unwrap();
        assert_eq!(feeds, vec!["http://env1.com", "http://env2.com"]);
    }

    // -- config file ---------------------------------------------------------

    #[test]
    fn config_list_form() {
        let dir = ScratchDir::new("config_list");
        let path = write_config(&dir, r#"["A", "B"]"#);

        let feeds = resolve_feed_urls(&FeedSettings::default(), Some(&path)).unwrap();
        assert_eq!(feeds, vec!["A", "B"]);
    }

    #[test]
    fn config_keyed_form() {
        let dir = ScratchDir::new("config_keyed");
        let path = write_config(&dir, r#"{"feeds": ["A", "B"], "comment": "ignored"}"#);

        let feeds = resolve_feed_urls(&FeedSettings::default(), Some(&path)).unwrap();
        assert_eq!(feeds, vec!["A", "B"]);
    }

    #[test]
    fn config_keyed_form_without_feeds_is_empty() {
        let dir = ScratchDir::new("config_keyed_empty");
        let path = write_config(&dir, "{}");

        let feeds = resolve_feed_urls(&FeedSettings::default(), Some(&path)).unwrap();
        assert!(feeds.is_empty());
    }

    #[test]
    fn config_path_from_settings_is_used_without_explicit_path() {
        let dir = ScratchDir::new("config_from_env");
        let path = write_config(&dir, r#"["http://from-env"]"#);

        let settings = FeedSettings {
            inline_feeds: None,
            config_path: Some(path),
        };
        let feeds = resolve_feed_urls(&settings, None).unwrap();
        assert_eq!(feeds, vec!["http://from-env"]);
    }

    #[test]
    fn explicit_path_beats_settings_path() {
        let dir = ScratchDir::new("config_explicit_wins");
        let explicit = write_config(&dir, r#"["http://explicit"]"#);
        let other = dir.path().join("other.json");
        std::fs::write(&other, r#"["http://other"]"#).unwrap();

        let settings = FeedSettings {
            inline_feeds: None,
            config_path: Some(other),
        };
        let feeds = resolve_feed_urls(&settings, Some(&explicit)).unwrap();
        assert_eq!(feeds, vec!["http://explicit"]);
    }

    #[test]
    fn empty_explicit_path_falls_through() {
        let dir = ScratchDir::new("config_empty_explicit");
        let path = write_config(&dir, r#"["http://from-env"]"#);

        let settings = FeedSettings {
            inline_feeds: None,
            config_path: Some(path),
        };
        let feeds = resolve_feed_urls(&settings, Some(Path::new(""))).unwrap();
        assert_eq!(feeds, vec!["http://from-env"]);
    }

    #[test]
    fn missing_config_file_is_empty() {
        let dir = ScratchDir::new("config_missing");
        let path = dir.path().join("absent.json");

        let feeds = resolve_feed_urls(&FeedSettings::default(), Some(&path)).unwrap();
        assert!(feeds.is_empty());
    }

    #[test]
    fn default_config_file_is_used_without_explicit_or_settings_path() {
        let settings = FeedSettings::default();
        let path = config_file_path(&settings, None);
        assert_eq!(path, Path::new(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn blank_explicit_path_without_settings_uses_default_file() {
        let settings = FeedSettings::default();
        let path = config_file_path(&settings, Some(Path::new("")));
        assert_eq!(path, Path::new(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = ScratchDir::new("config_malformed");
        let path = write_config(&dir, "[\"http://a\",");

        let err = resolve_feed_urls(&FeedSettings::default(), Some(&path)).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn wrong_shape_is_an_error() {
        let dir = ScratchDir::new("config_wrong_shape");
        let path = write_config(&dir, "\"http://a\"");

        let err = resolve_feed_urls(&FeedSettings::default(), Some(&path)).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
