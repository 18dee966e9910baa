//! CLI module for gridstats
//!
//! Provides command-line interface for:
//! - init: Create config file and data directory
//! - start: Boot the store and serve HTTP

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, start, ServiceConfig};
pub use errors::{CliError, CliResult};
