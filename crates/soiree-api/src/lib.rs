//! # soiree-api
//!
//! HTTP layer for the Soiree site.
//!
//! Maps incoming requests onto the record store and the view renderer:
//! server-rendered pages, three flat-file-backed form endpoints, a filtered
//! events listing, static assets, and an access log. All request-level
//! errors funnel through [`error::ApiError`], the single place where an
//! error becomes a status code and a body.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod access_log;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;
pub mod views;

pub use error::{ApiError, ApiResult, Error, Result};
pub use router::create_router;
pub use server::Server;
pub use state::AppState;
