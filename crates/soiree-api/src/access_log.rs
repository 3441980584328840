//! Request access logging.
//!
//! One combined-log-format line is appended to the access log for every
//! completed request whose path has no file extension; static asset
//! traffic (and static asset 404s) would drown the log and is skipped.
//! Dashboard submissions additionally emit a short timing line through the
//! process logger.
//!
//! Logging never fails a request: write errors are warned and dropped.

use crate::state::AppState;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::HeaderMap;
use axum::http::header::{CONTENT_LENGTH, REFERER, USER_AGENT};
use axum::middleware::Next;
use axum::response::Response;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

/// Append-only access log file.
#[derive(Debug)]
pub struct AccessLog {
    path: PathBuf,
    file: Mutex<File>,
}

impl AccessLog {
    /// Opens (or creates) the log file in append mode.
    ///
    /// Parent directories are created as needed.
    pub fn open(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().append(true).create(true).open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one line. Failures are warned, never propagated.
    pub fn write_line(&self, line: &str) {
        let mut file = match self.file.lock() {
            Ok(file) => file,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(err) = writeln!(file, "{line}") {
            log::warn!(
                "Cannot write access log line to {}: {err}",
                self.path.display()
            );
        }
    }
}

/// Middleware appending a combined-format line per non-static request.
pub async fn record_access(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let version = req.version();
    let remote = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip().to_string());
    let referrer = header_text(req.headers(), REFERER.as_str());
    let user_agent = header_text(req.headers(), USER_AGENT.as_str());

    let response = next.run(req).await;

    if !has_extension(uri.path()) {
        let line = combined_line(
            remote.as_deref().unwrap_or("-"),
            &chrono::Local::now().format("%d/%b/%Y:%H:%M:%S %z").to_string(),
            method.as_str(),
            &uri.to_string(),
            &format!("{version:?}"),
            response.status().as_u16(),
            content_length(&response).as_deref().unwrap_or("-"),
            referrer.as_deref().unwrap_or("-"),
            user_agent.as_deref().unwrap_or("-"),
        );
        state.access_log.write_line(&line);
    }

    response
}

/// Middleware emitting the dashboard submission timing line.
///
/// Layered on `/dashboard-submit` only: method, path, status, content
/// length, response time in milliseconds.
pub async fn record_dashboard_submit(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let millis = started.elapsed().as_secs_f64() * 1000.0;
    log::info!(
        "{} {} {} {} - {:.3} ms",
        method,
        uri,
        response.status().as_u16(),
        content_length(&response).as_deref().unwrap_or("-"),
        millis,
    );

    response
}

/// Whether a request path names a static asset (has a file extension).
pub fn has_extension(path: &str) -> bool {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| !name.starts_with('.') && name.contains('.'))
}

fn header_text(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

fn content_length(response: &Response) -> Option<String> {
    response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Formats one combined-log-format line.
#[allow(clippy::too_many_arguments)]
fn combined_line(
    remote: &str,
    timestamp: &str,
    method: &str,
    uri: &str,
    version: &str,
    status: u16,
    length: &str,
    referrer: &str,
    user_agent: &str,
) -> String {
    format!(
        "{remote} - - [{timestamp}] \"{method} {uri} {version}\" {status} {length} \"{referrer}\" \"{user_agent}\""
    )
}
