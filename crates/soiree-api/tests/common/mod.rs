//! Common test harness for Soiree HTTP integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use soiree_api::access_log::AccessLog;
use soiree_api::views::ViewEngine;
use soiree_api::{AppState, create_router};
use soiree_storage::Collection;
use std::path::PathBuf;
use tempfile::TempDir;
use tower::ServiceExt;

/// The static page views the router expects to exist.
pub const PAGE_VIEWS: [&str; 10] = [
    "index",
    "contact",
    "about",
    "portfolio",
    "celebration",
    "ceremonie",
    "reception",
    "mitzvhans",
    "corporate1",
    "services",
];

/// A complete site rooted in a temp directory: views, public assets,
/// bootstrapped collections, and the assembled router.
pub struct TestSite {
    pub router: Router,
    pub data_dir: PathBuf,
    _dir: TempDir,
}

impl TestSite {
    /// Builds a fresh site with minimal views and one static asset.
    pub async fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let views_dir = dir.path().join("views");
        let public_dir = dir.path().join("public");
        let data_dir = dir.path().join("data");
        std::fs::create_dir_all(&views_dir).unwrap();
        std::fs::create_dir_all(&public_dir).unwrap();

        for name in PAGE_VIEWS {
            std::fs::write(
                views_dir.join(format!("{name}.html")),
                format!("<h1>{name}</h1>"),
            )
            .unwrap();
        }
        std::fs::write(
            views_dir.join("dashboard.html"),
            "<main>{{entries}}</main>",
        )
        .unwrap();
        std::fs::write(public_dir.join("style.css"), "body { margin: 0 }").unwrap();

        let state = AppState::new(
            Collection::new("contacts", data_dir.join("contacts.json")),
            Collection::new("events", data_dir.join("events.json")),
            Collection::new("dashboard", data_dir.join("dashboard.json")),
            ViewEngine::new(&views_dir),
            AccessLog::open(data_dir.join("access.log")).unwrap(),
        );
        state.bootstrap().await.unwrap();

        let router = create_router(state, &public_dir);
        Self {
            router,
            data_dir,
            _dir: dir,
        }
    }

    /// Issues a GET request against the router.
    pub async fn get(&self, path: &str) -> Response {
        self.router
            .clone()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    /// Issues a POST with a JSON body.
    pub async fn post_json(&self, path: &str, body: serde_json::Value) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(path)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Issues a POST with an urlencoded form body.
    pub async fn post_form(&self, path: &str, body: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(path)
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Reads one collection file straight off disk.
    pub fn stored(&self, file: &str) -> serde_json::Value {
        let raw = std::fs::read_to_string(self.data_dir.join(file)).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    /// Reads the access log contents.
    pub fn access_log(&self) -> String {
        std::fs::read_to_string(self.data_dir.join("access.log")).unwrap()
    }
}

/// Collects a response body as a UTF-8 string.
pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
