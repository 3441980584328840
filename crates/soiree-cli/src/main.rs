//! Soiree CLI
//!
//! Command-line entry point for the Soiree site server.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use soiree_cli::cli::{Cli, Command, ConfigAction};
use soiree_cli::commands;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    match args.command {
        Command::Serve => commands::cmd_serve(args.config.as_deref()).await?,
        Command::Config { action } => match action {
            ConfigAction::Path => commands::cmd_config_path(args.config.as_deref())?,
            ConfigAction::Init { file, force } => {
                commands::cmd_config_init(file.as_deref(), force)?
            }
        },
    }

    Ok(())
}
