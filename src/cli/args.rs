//! CLI argument definitions using clap
//!
//! Commands:
//! - gridstats init --config <path>
//! - gridstats start --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gridstats - a record-management service for football player statistics
#[derive(Parser, Debug)]
#[command(name = "gridstats")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file and create the data directory
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./gridstats.json")]
        config: PathBuf,
    },

    /// Start the gridstats server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./gridstats.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
