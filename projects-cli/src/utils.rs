//! Utility functions for CLI operations.
//!
//! This module provides configuration loading and database setup shared by
//! the entry point and the tests.

use std::path::PathBuf;

use projects::config::load_config;
use projects::database::{resolve_data_dir, DATABASE_FILE_NAME};
use projects::{Config, Database, DatabaseConfig};

use crate::cli::Cli;
use crate::error::CliError;

/// Global CLI options.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress diagnostic output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u64>,
}

impl From<Cli> for GlobalOptions {
    fn from(cli: Cli) -> Self {
        Self {
            verbose: cli.verbose,
            quiet: cli.quiet,
            data_dir: cli.data_dir,
            busy_timeout: cli.busy_timeout,
        }
    }
}

/// Resolve the data directory: `--data-dir`, then `PROJECTS_DATA_DIR`,
/// then `~/.projects`.
pub fn data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    resolve_data_dir(global.data_dir.as_deref()).map_err(|e| CliError::Config(e.to_string()))
}

/// Load configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. `config.yaml` in the data directory
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let dir = data_dir(global)?;
    let mut config = load_config(&dir).map_err(|e| CliError::Config(e.to_string()))?;

    config.merge(&Config {
        busy_timeout_seconds: global.busy_timeout,
        log_mode: None,
    });

    Ok(config)
}

/// Open the database in the data directory, creating it if needed.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = data_dir(global)?.join(DATABASE_FILE_NAME);

    let mut db_config = DatabaseConfig::new(db_path);
    if let Some(timeout) = config.busy_timeout() {
        db_config = db_config.with_busy_timeout(timeout);
    }

    log::debug!(
        "opening {} (busy timeout {:?})",
        db_config.path.display(),
        db_config.busy_timeout
    );
    Database::open(db_config).map_err(CliError::from)
}
