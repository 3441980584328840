//! One JSON-array file per record collection.
//!
//! A [`Collection`] is configured with a name (for logs) and a file path,
//! and has no lifecycle beyond the process. The file always holds a
//! syntactically valid JSON array: [`Collection::bootstrap`] initializes it
//! to `[]` when absent, and [`Collection::append`] rewrites the whole array
//! through a temp-file rename so a failed write never leaves a partially
//! written file behind.
//!
//! # Usage
//!
//! ```no_run
//! use serde_json::json;
//! use soiree_storage::Collection;
//!
//! # async fn demo() -> soiree_storage::Result<()> {
//! let contacts = Collection::new("contacts", "data/contacts.json");
//! contacts.bootstrap().await?;
//! contacts
//!     .append(json!({"name": "Dana"}).as_object().unwrap().clone())
//!     .await?;
//! assert_eq!(contacts.load().await?.len(), 1);
//! # Ok(())
//! # }
//! ```

use crate::{Error, Result};
use soiree_core::Record;
use std::path::{Path, PathBuf};

/// Append-and-load access to one JSON-array collection file.
#[derive(Debug, Clone)]
pub struct Collection {
    name: String,
    path: PathBuf,
}

impl Collection {
    /// Creates a collection handle for the given file.
    ///
    /// No I/O happens here; call [`bootstrap`](Self::bootstrap) once at
    /// startup to make sure the file exists.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// The collection's name, used in log lines.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the backing file containing `[]` if it does not exist yet.
    ///
    /// Parent directories are created as needed. An existing file is left
    /// untouched, whatever it contains.
    pub async fn bootstrap(&self) -> Result<()> {
        match tokio::fs::try_exists(&self.path).await {
            Ok(true) => return Ok(()),
            Ok(false) => {}
            Err(source) => return Err(Error::io(&self.path, source)),
        }

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| Error::io(parent, source))?;
        }

        tokio::fs::write(&self.path, "[]")
            .await
            .map_err(|source| Error::io(&self.path, source))?;

        log::info!(
            "Initialized collection '{}' at {}",
            self.name,
            self.path.display()
        );
        Ok(())
    }

    /// Reads and parses the whole collection.
    ///
    /// Fails with [`Error::Io`] when the file cannot be read and with
    /// [`Error::Parse`] when its contents are not a valid JSON array,
    /// never an empty sequence on error. An empty file reads as an empty
    /// collection.
    pub async fn load(&self) -> Result<Vec<Record>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| Error::io(&self.path, source))?;

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|source| Error::parse(&self.path, source))
    }

    /// Appends one record, preserving all prior records and their order.
    ///
    /// Loads the current array, pushes `record`, and rewrites the file in
    /// full. A missing file is treated as empty only here, at first use;
    /// after [`bootstrap`](Self::bootstrap) the file always exists.
    ///
    /// The load-then-write pair is not transactional: two concurrent
    /// appends to the same collection can interleave and the later write
    /// wins, dropping the earlier record. Accepted for contact-form load;
    /// callers needing stronger guarantees must serialize appends
    /// per collection themselves.
    pub async fn append(&self, record: Record) -> Result<()> {
        let mut records = match self.load().await {
            Ok(records) => records,
            Err(err) if err.is_not_found() => Vec::new(),
            Err(err) => return Err(err),
        };

        records.push(record);
        self.write_all(&records).await?;

        log::debug!(
            "Appended record to collection '{}' ({} total)",
            self.name,
            records.len()
        );
        Ok(())
    }

    /// Serializes `records` next to the target file, then renames over it.
    ///
    /// Readers observe either the old array or the new one, never a
    /// half-written file.
    async fn write_all(&self, records: &[Record]) -> Result<()> {
        let serialized = serde_json::to_string_pretty(records)
            .map_err(|source| Error::parse(&self.path, source))?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, serialized)
            .await
            .map_err(|source| Error::io(&tmp, source))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|source| Error::io(&self.path, source))
    }
}
