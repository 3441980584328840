//! Handler functions for CLI commands.

use crate::config::SiteConfig;
use crate::{Error, Result};
use soiree_api::access_log::AccessLog;
use soiree_api::views::ViewEngine;
use soiree_api::{AppState, Server};
use soiree_storage::Collection;
use std::path::Path;

/// Run the site server with the resolved configuration.
pub async fn cmd_serve(config_path: Option<&Path>) -> Result<()> {
    let config = SiteConfig::load(config_path)?;

    let state = AppState::new(
        Collection::new("contacts", config.contacts_path()),
        Collection::new("events", config.events_path()),
        Collection::new("dashboard", config.dashboard_path()),
        ViewEngine::new(&config.views_dir),
        AccessLog::open(&config.access_log)?,
    );
    state.bootstrap().await?;

    Server::new(config.listen_addr, state, &config.public_dir)
        .run()
        .await?;
    Ok(())
}

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&Path>) -> Result<()> {
    match SiteConfig::resolve_config_path(config_path) {
        Some(path) => {
            let exists = path.exists();
            println!("{}", path.display());
            if !exists {
                eprintln!("(file does not exist — run `soiree config init` to create it)");
            }
            Ok(())
        }
        None => Err(Error::config(
            "Could not determine config directory for this platform",
        )),
    }
}

/// Create a default configuration file.
pub fn cmd_config_init(file: Option<&Path>, force: bool) -> Result<()> {
    let path = match file {
        Some(path) => path.to_path_buf(),
        None => SiteConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let config = SiteConfig::default();
    std::fs::write(&path, config.to_toml_string()?)?;

    println!("Config file created at {}", path.display());
    Ok(())
}
