//! # soiree-cli
//!
//! Command-line tools for the Soiree site:
//! - `soiree serve`: run the site server
//! - `soiree config`: create and inspect the TOML configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use error::{Error, Result};
