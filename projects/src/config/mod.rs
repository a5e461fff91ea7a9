//! Configuration for the projects console.
//!
//! Settings come from, highest precedence first:
//!
//! 1. Environment variables (`PROJECTS_*`)
//! 2. `config.yaml` in the data directory
//! 3. Built-in defaults
//!
//! Command-line flags sit above all of these and are applied by the CLI.
//!
//! # Examples
//!
//! ```no_run
//! use projects::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("/home/me/.projects")).unwrap();
//! println!("log mode: {:?}", config.log_mode);
//! ```

pub mod environment;
pub mod loader;
pub mod schema;

use std::path::Path;

pub use environment::{EnvironmentConfig, BUSY_TIMEOUT_ENV, LOG_MODE_ENV};
pub use loader::{ConfigLoader, CONFIG_FILE_NAME};
pub use schema::Config;

use crate::error::Result;

/// Loads the configuration file for `data_dir` and applies environment
/// overrides.
///
/// # Errors
///
/// Returns an error if the file is unreadable or invalid, or an environment
/// variable holds an invalid value.
pub fn load_config(data_dir: &Path) -> Result<Config> {
    let mut config = ConfigLoader::load(data_dir)?;
    EnvironmentConfig::apply_overrides(&mut config)?;
    Ok(config)
}
