//! Record extraction from request bodies.
//!
//! Submissions arrive either as JSON (`application/json`) or as an
//! urlencoded form; both are accepted, mirroring the site's forms and its
//! API clients. Everything decodes into the open-map [`Record`]; a body
//! that cannot be decoded rejects as a 400.

use crate::error::ApiError;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use soiree_core::{Record, record_from_pairs};

/// Extractor decoding the request body into a [`Record`].
///
/// JSON bodies must be objects and keep their value types (numbers stay
/// numbers). Form bodies decode every field as a string.
#[derive(Debug)]
pub struct RecordPayload(pub Record);

impl<S> FromRequest<S> for RecordPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.trim_start().starts_with("application/json"));

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|err| ApiError::BadRequest(err.to_string()))?;

        let record = if is_json {
            serde_json::from_slice::<Record>(&bytes)
                .map_err(|err| ApiError::BadRequest(format!("Invalid JSON body: {err}")))?
        } else {
            let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(&bytes)
                .map_err(|err| ApiError::BadRequest(format!("Invalid form body: {err}")))?;
            record_from_pairs(pairs)
        };

        Ok(RecordPayload(record))
    }
}
