//! Error types for soiree-storage

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for soiree-storage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in soiree-storage
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The collection file could not be read or written.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// File the operation was targeting.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The collection file does not hold a valid JSON array of records.
    #[error("Invalid collection data at {}: {source}", .path.display())]
    Parse {
        /// File whose contents failed to parse or serialize.
        path: PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Creates an I/O error for the given file.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a parse error for the given file.
    pub fn parse(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Error::Parse {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns `true` when the error is a missing-file I/O error.
    ///
    /// Used to distinguish first-use (no file yet) from real failures.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
