//! View loading and the dashboard entry table.
//!
//! The site's pages are plain HTML files in a views directory, looked up by
//! name. The one dynamic page is the dashboard, whose view carries an
//! `{{entries}}` slot that gets the stored entries injected as an escaped
//! HTML table. Anything fancier belongs in a real template engine, which
//! this site does not need.

use crate::error::{ApiError, ApiResult};
use axum::response::Html;
use serde_json::Value;
use soiree_core::Record;
use std::path::PathBuf;

/// Slot in the dashboard view replaced with the rendered entries.
const ENTRIES_SLOT: &str = "{{entries}}";

/// Loads named views from a directory and renders them to HTML responses.
#[derive(Debug, Clone)]
pub struct ViewEngine {
    dir: PathBuf,
}

impl ViewEngine {
    /// Creates a view engine rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Renders a static view by name (`index` → `<dir>/index.html`).
    pub async fn render(&self, name: &str) -> ApiResult<Html<String>> {
        Ok(Html(self.read_view(name).await?))
    }

    /// Renders the dashboard view with the stored entries injected.
    pub async fn render_dashboard(&self, entries: &[Record]) -> ApiResult<Html<String>> {
        let template = self.read_view("dashboard").await?;
        Ok(Html(template.replace(ENTRIES_SLOT, &entries_table(entries))))
    }

    async fn read_view(&self, name: &str) -> ApiResult<String> {
        let path = self.dir.join(format!("{name}.html"));
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| ApiError::View {
                name: name.to_string(),
                source,
            })
    }
}

/// Renders dashboard entries as an HTML table, one row per entry.
///
/// Field names and values are escaped; an entry's fields render in their
/// stored order.
fn entries_table(entries: &[Record]) -> String {
    if entries.is_empty() {
        return "<p>No entries yet.</p>".to_string();
    }

    let mut html = String::from("<table class=\"entries\">\n");
    for entry in entries {
        html.push_str("  <tr>");
        for (field, value) in entry {
            html.push_str("<td>");
            html.push_str(&escape_html(field));
            html.push_str(": ");
            html.push_str(&escape_html(&display_text(value)));
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>");
    html
}

fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
