//! Error types for soiree-api
//!
//! Two layers: [`Error`] for server lifecycle failures (bind, serve), and
//! [`ApiError`] for request handling. `ApiError`'s [`IntoResponse`] impl is
//! the centralized handler: the one place an error is turned into a status
//! code and a plaintext body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Result type alias for server-level operations
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for request handlers
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Server-level errors
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Serving failed after startup.
    #[error("Server error: {0}")]
    Server(String),

    /// I/O error during startup (binding, opening the access log).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Collection bootstrap failed.
    #[error("Storage error: {0}")]
    Storage(#[from] soiree_storage::Error),
}

/// Request-level errors
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ApiError {
    /// A collection could not be read, parsed, or written.
    #[error(transparent)]
    Storage(#[from] soiree_storage::Error),

    /// A submission was missing required fields.
    #[error(transparent)]
    Validation(#[from] soiree_core::Error),

    /// A view file could not be loaded.
    #[error("Cannot render view '{name}': {source}")]
    View {
        /// View name as routed (`index`, `dashboard`, ...).
        name: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The request body could not be decoded into a record.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No route matched and the path has no file extension.
    #[error("Page Not Found")]
    NotFound,

    /// No route matched and the path looks like a static asset.
    ///
    /// Responds 404 with an empty body and is never logged; missing
    /// images and scripts are not application errors.
    #[error("asset not found")]
    AssetMiss,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Storage(_) | ApiError::View { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound | ApiError::AssetMiss => StatusCode::NOT_FOUND,
        };

        if status.is_server_error() {
            log::error!("Error: {self}");
        }

        let body = match &self {
            ApiError::AssetMiss => String::new(),
            other => other.to_string(),
        };

        (status, body).into_response()
    }
}
