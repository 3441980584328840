//! Router configuration

use crate::access_log;
use crate::handlers;
use crate::state::AppState;
use axum::Router;
use axum::extract::State;
use axum::handler::HandlerWithoutStateExt;
use axum::middleware;
use axum::routing::{MethodRouter, get, post};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

/// Pages rendered from a named view with no dynamic data.
const PAGES: &[(&str, &str)] = &[
    ("/", "index"),
    ("/contact", "contact"),
    ("/about", "about"),
    ("/portfolio", "portfolio"),
    ("/celebration", "celebration"),
    ("/ceremonie", "ceremonie"),
    ("/reception", "reception"),
    ("/mitzvhans", "mitzvhans"),
    ("/corporate1", "corporate1"),
    ("/services", "services"),
];

/// Create the site router.
///
/// Unmatched paths fall through to the static file service rooted at
/// `public_dir`; a miss there hits the extension-sensitive 404 handler.
pub fn create_router(state: AppState, public_dir: impl AsRef<Path>) -> Router {
    let mut router = Router::new();
    for &(path, view) in PAGES {
        router = router.route(path, page(view));
    }

    let static_files =
        ServeDir::new(public_dir.as_ref()).not_found_service(handlers::handle_miss.into_service());

    router
        .route("/dashboard", get(handlers::dashboard_page))
        .route("/events", get(handlers::list_events))
        .route("/contactone", post(handlers::submit_contact))
        .route("/formdata", post(handlers::submit_event))
        .route(
            "/dashboard-submit",
            post(handlers::submit_dashboard)
                .layer(middleware::from_fn(access_log::record_dashboard_submit)),
        )
        .fallback_service(static_files)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            access_log::record_access,
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Method router rendering one named static view.
fn page(view: &'static str) -> MethodRouter<AppState> {
    get(move |State(state): State<AppState>| async move { state.views.render(view).await })
}
