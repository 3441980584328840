//! Site configuration.
//!
//! A single TOML file configures the server address and the directories the
//! site reads and writes. Every field has a default, so a missing config
//! file just means "run with defaults from the current directory".

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Configuration for the Soiree site server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Address the HTTP server binds to.
    pub listen_addr: SocketAddr,

    /// Directory holding the collection files and the access log.
    pub data_dir: PathBuf,

    /// Directory holding the HTML views.
    pub views_dir: PathBuf,

    /// Directory served as static assets.
    pub public_dir: PathBuf,

    /// Access log file.
    pub access_log: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            listen_addr: ([127, 0, 0, 1], 3000).into(),
            data_dir: PathBuf::from("data"),
            views_dir: PathBuf::from("site/views"),
            public_dir: PathBuf::from("site/public"),
            access_log: PathBuf::from("data/access.log"),
        }
    }
}

impl SiteConfig {
    /// Load configuration from the resolved path, or defaults when no
    /// config file exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(&path)?;
                toml::from_str(&content).map_err(|err| {
                    Error::config(format!("Failed to parse {}: {err}", path.display()))
                })
            }
            _ => Ok(Self::default()),
        }
    }

    /// The config path: explicit if given, else the platform default.
    pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_config_path(),
        }
    }

    /// Platform default config location (`<config dir>/soiree/config.toml`).
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("soiree").join("config.toml"))
    }

    /// Serialize as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|err| Error::config(err.to_string()))
    }

    /// Contact collection file.
    pub fn contacts_path(&self) -> PathBuf {
        self.data_dir.join("contacts.json")
    }

    /// Event collection file.
    pub fn events_path(&self) -> PathBuf {
        self.data_dir.join("events.json")
    }

    /// Dashboard collection file.
    pub fn dashboard_path(&self) -> PathBuf {
        self.data_dir.join("dashboard.json")
    }
}
