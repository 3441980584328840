//! Error types for soiree-core

use thiserror::Error;

/// Result type alias for soiree-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in soiree-core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// One or more required fields were absent or empty in a submission.
    ///
    /// `missing` holds the field names in the order they were declared
    /// required, so callers can report them deterministically.
    #[error("Missing required fields: {}", .missing.join(", "))]
    Validation {
        /// Required field names with no usable value, in declaration order.
        missing: Vec<String>,
    },
}

impl Error {
    /// Creates a validation error from the ordered list of missing fields.
    pub fn validation<I, S>(missing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Error::Validation {
            missing: missing.into_iter().map(Into::into).collect(),
        }
    }
}
