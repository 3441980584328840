//! Application state for request handlers

use crate::access_log::AccessLog;
use crate::views::ViewEngine;
use soiree_storage::Collection;
use std::sync::Arc;

/// Shared application state
///
/// Cheap to clone (Arc internals). One [`Collection`] per form-backed
/// collection; each owns its file path and nothing else.
#[derive(Clone)]
pub struct AppState {
    /// Contact form submissions
    pub contacts: Arc<Collection>,

    /// Event booking submissions
    pub events: Arc<Collection>,

    /// Dashboard entries
    pub dashboard: Arc<Collection>,

    /// View renderer
    pub views: Arc<ViewEngine>,

    /// Access log sink
    pub access_log: Arc<AccessLog>,
}

impl AppState {
    /// Create new application state
    pub fn new(
        contacts: Collection,
        events: Collection,
        dashboard: Collection,
        views: ViewEngine,
        access_log: AccessLog,
    ) -> Self {
        Self {
            contacts: Arc::new(contacts),
            events: Arc::new(events),
            dashboard: Arc::new(dashboard),
            views: Arc::new(views),
            access_log: Arc::new(access_log),
        }
    }

    /// Bootstrap every collection file (create as `[]` when absent).
    pub async fn bootstrap(&self) -> soiree_storage::Result<()> {
        self.contacts.bootstrap().await?;
        self.events.bootstrap().await?;
        self.dashboard.bootstrap().await?;
        Ok(())
    }
}
