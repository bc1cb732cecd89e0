//! Command-line interface, parsed with clap.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// movies-api - REST catalog of movies, genres and actors
#[derive(Parser)]
#[command(name = "movies-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of searching the default locations
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Load the demo catalog into an empty database
    Seed,

    /// Validate the configuration and print the effective values
    #[command(alias = "check")]
    CheckConfig,
}

pub use commands::*;
