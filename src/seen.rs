//! Persistent record of every link already reported as new.
//!
//! The store is a JSON array of link strings, sorted so that successive
//! writes produce minimal diffs. It is read once at the start of a fetch
//! cycle and written at most once at the end.
//!
//! There is no locking: two overlapping cycles can both read the same state,
//! and whichever saves last wins. Links recorded only by the other cycle are
//! lost and will be reported again later.

use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default location of the store, relative to the working directory.
pub const DEFAULT_SEEN_FILE: &str = "seen_articles.json";

/// The set of links already returned as new.
///
/// Backed by an ordered set, so iteration and serialization are always
/// lexicographically sorted.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeenSet {
    links: BTreeSet<String>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, link: &str) -> bool {
        self.links.contains(link)
    }

    /// Record `link`. Returns `true` if it was not already present.
    pub fn insert(&mut self, link: impl Into<String>) -> bool {
        self.links.insert(link.into())
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.links.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SeenSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            links: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// File-backed storage for a [`SeenSet`].
#[derive(Debug, Clone)]
pub struct SeenStore {
    path: PathBuf,
}

impl SeenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the set from disk.
    ///
    /// - Missing file → empty set
    /// - Unreadable file → [`Error::Io`]
    /// - Anything but a JSON list of strings → [`Error::SeenState`]
    pub fn load(&self) -> Result<SeenSet> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(
                    path = %self.path.display(),
                    "No seen-articles store yet, starting empty"
                );
                return Ok(SeenSet::new());
            }
            Err(source) => {
                return Err(Error::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let seen: SeenSet = serde_json::from_str(&content).map_err(|source| Error::SeenState {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(
            path = %self.path.display(),
            links = seen.len(),
            "Loaded seen-articles store"
        );
        Ok(seen)
    }

    /// Write the set to disk as a pretty-printed, sorted JSON array.
    ///
    /// The content goes to a temporary file next to the store, is synced, then
    /// renamed over the store, so a crash mid-write never leaves a truncated
    /// file behind.
    pub fn save(&self, seen: &SeenSet) -> Result<()> {
        let content = serde_json::to_string_pretty(seen).map_err(|source| Error::SeenState {
            path: self.path.clone(),
            source,
        })?;

        let random_suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let temp_path = self.path.with_extension(format!("tmp.{:016x}", random_suffix));

        let io_err = |path: &Path, source: std::io::Error| Error::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)
            .map_err(|e| io_err(&temp_path, e))?;

        let written = file
            .write_all(content.as_bytes())
            .and_then(|()| file.sync_all());
        drop(file);
        if let Err(e) = written {
            let _ = std::fs::remove_file(&temp_path);
            return Err(io_err(&temp_path, e));
        }

        if let Err(e) = std::fs::rename(&temp_path, &self.path) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(io_err(&self.path, e));
        }

        tracing::debug!(
            path = %self.path.display(),
            links = seen.len(),
            "Saved seen-articles store"
        );
        Ok(())
    }
}
