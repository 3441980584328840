//! Error types for soiree-cli

use thiserror::Error;

/// Result type alias for soiree-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in soiree-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from soiree-storage
    #[error("Storage error: {0}")]
    Storage(#[from] soiree_storage::Error),

    /// Error from soiree-api
    #[error("Server error: {0}")]
    Server(#[from] soiree_api::Error),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
