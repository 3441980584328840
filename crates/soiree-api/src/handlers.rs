//! Request handlers.
//!
//! Each handler is a thin mapping from a route onto the record store or
//! the view renderer; errors propagate to [`crate::error::ApiError`]'s
//! response mapping instead of being handled per route.

use crate::error::{ApiError, ApiResult};
use crate::extract::RecordPayload;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Query, State};
use axum::http::Uri;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use serde_json::Value;
use soiree_core::{Record, filter_exact, validate_required};

/// Fields every event booking must carry, in reporting order.
pub const REQUIRED_EVENT_FIELDS: [&str; 4] = ["eventPurpose", "guests", "date", "budget"];

/// `GET /dashboard`: render the dashboard with all stored entries.
pub async fn dashboard_page(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let entries = state.dashboard.load().await?;
    state.views.render_dashboard(&entries).await
}

/// `GET /events`: the stored events, filtered by every non-empty query
/// parameter as an exact case-insensitive match.
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<Record>>> {
    let events = state.events.load().await?;
    Ok(Json(filter_exact(events, &params)))
}

/// `POST /contactone`: store a contact request.
pub async fn submit_contact(
    State(state): State<AppState>,
    RecordPayload(record): RecordPayload,
) -> ApiResult<&'static str> {
    log::info!("New contact submission: {}", Value::Object(record.clone()));
    state.contacts.append(record).await?;
    Ok("Contact Data Saved Successfully!")
}

/// `POST /formdata`: validate and store an event booking.
pub async fn submit_event(
    State(state): State<AppState>,
    RecordPayload(record): RecordPayload,
) -> ApiResult<&'static str> {
    validate_required(&record, &REQUIRED_EVENT_FIELDS)?;
    log::info!("New event submission: {}", Value::Object(record.clone()));
    state.events.append(record).await?;
    Ok("Event Data Saved Successfully!")
}

/// `POST /dashboard-submit`: store a dashboard entry, then send the
/// browser back to the dashboard (302, as submitted by a plain form).
pub async fn submit_dashboard(
    State(state): State<AppState>,
    RecordPayload(record): RecordPayload,
) -> ApiResult<Response> {
    log::info!("New dashboard entry: {}", Value::Object(record.clone()));
    state.dashboard.append(record).await?;
    Ok((StatusCode::FOUND, [(header::LOCATION, "/dashboard")]).into_response())
}

/// Fallback for paths no route and no static file matched.
///
/// A path with a file extension is a missing asset (404, empty body, not
/// logged); anything else is a missing page (404, `"Page Not Found"`).
pub async fn handle_miss(uri: Uri) -> ApiError {
    if crate::access_log::has_extension(uri.path()) {
        ApiError::AssetMiss
    } else {
        ApiError::NotFound
    }
}
