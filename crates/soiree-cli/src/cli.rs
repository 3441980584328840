//! Command-line interface definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Soiree - event-studio site server
#[derive(Parser, Debug)]
#[command(name = "soiree")]
#[command(about = "Soiree event-studio site server", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the site server
    Serve,

    /// Configuration file operations
    Config {
        /// Config subcommand
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Create a default configuration file
    Init {
        /// Write to this file instead of the default location
        #[arg(long)]
        file: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
