//! CLI command implementations
//!
//! `init` writes a default configuration file and creates the data
//! directory; `start` loads configuration, opens the store once, and
//! serves HTTP until the process is stopped.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::store::PlayerStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Service configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// HTTP server settings
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Player collection data file
    #[serde(default = "default_data_path")]
    pub data_path: String,
}

fn default_data_path() -> String {
    "./gridstats-data/players.json".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            http: HttpServerConfig::default(),
            data_path: default_data_path(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from file
    ///
    /// A missing file yields the defaults; a malformed one is fatal.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: ServiceConfig = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        Ok(config)
    }

    /// Get the data file path
    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_path)
    }
}

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Execute a single CLI command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config } => init(&config),
        Command::Start { config } => start(&config),
    }
}

/// Write a default config file and create the data directory
pub fn init(config_path: &PathBuf) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::already_initialized());
    }

    let config = ServiceConfig::default();
    let content = serde_json::to_string_pretty(&config)?;
    fs::write(config_path, content)?;

    if let Some(parent) = config.data_path().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    println!("Initialized gridstats config at {}", config_path.display());
    Ok(())
}

/// Boot the store and serve HTTP until shutdown
pub fn start(config_path: &PathBuf) -> CliResult<()> {
    let config = ServiceConfig::load(config_path)?;

    // Open the store once; handlers share it for the process lifetime.
    let store = Arc::new(PlayerStore::open(config.data_path())?);

    let server = HttpServer::with_config(config.http, store);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to start runtime: {}", e)))?;

    runtime
        .block_on(server.start())
        .map_err(|e| CliError::boot_failed(format!("Server error: {}", e)))
}
