//! Error types for loading word resources and running rounds

use std::io;
use std::path::Path;
use thiserror::Error;

/// Failure to load a word pool or dictionary
///
/// Both variants are fatal at startup: without a word pool there is no game.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("Could not locate word resource '{resource}'")]
    Missing { resource: String },

    #[error("Could not read word resource '{resource}' as text: {reason}")]
    Unreadable { resource: String, reason: String },
}

impl ResourceError {
    /// Classify an I/O failure for the resource at `path`
    ///
    /// A missing file is `Missing`; anything else (bad encoding, permissions,
    /// a directory in place of a file) is `Unreadable`.
    #[must_use]
    pub fn from_io(path: &Path, err: &io::Error) -> Self {
        let resource = path.display().to_string();

        if err.kind() == io::ErrorKind::NotFound {
            Self::Missing { resource }
        } else {
            Self::Unreadable {
                resource,
                reason: err.to_string(),
            }
        }
    }
}

/// Recoverable errors from the game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Word pool is empty, no root word can be chosen")]
    EmptyPool,

    #[error("No round in progress, start a round first")]
    RoundNotStarted,
}
