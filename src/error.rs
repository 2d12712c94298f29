//! Error types for the fetch pipeline.
//!
//! Nothing in the core recovers from these: every failure is returned to the
//! caller with the file or feed it concerns attached.

use std::path::PathBuf;

use thiserror::Error;

use crate::source::SourceError;

#[derive(Debug, Error)]
pub enum Error {
    /// The feed config file is not valid JSON, or not one of the two
    /// accepted shapes (a list of URLs, or an object with a `feeds` list).
    #[error("invalid feed config in {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seen-articles store exists but does not hold a JSON list of links.
    #[error("corrupt seen-articles store {}: {source}", .path.display())]
    SeenState {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to fetch feed {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: SourceError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
