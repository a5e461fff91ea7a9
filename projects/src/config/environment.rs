//! Environment variable overrides.
//!
//! `PROJECTS_BUSY_TIMEOUT` and `PROJECTS_LOG_MODE` take precedence over the
//! configuration file.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::LogLevel;

/// Overrides `busy_timeout_seconds`.
pub const BUSY_TIMEOUT_ENV: &str = "PROJECTS_BUSY_TIMEOUT";

/// Overrides `log_mode`.
pub const LOG_MODE_ENV: &str = "PROJECTS_LOG_MODE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use projects::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a variable is set to a value that
    /// cannot be parsed.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(seconds) = env::var(BUSY_TIMEOUT_ENV) {
            config.busy_timeout_seconds = Some(Self::parse_seconds(BUSY_TIMEOUT_ENV, &seconds)?);
        }

        if let Ok(mode) = env::var(LOG_MODE_ENV) {
            config.log_mode = Some(LogLevel::parse(&mode).map_err(|_| Error::Validation {
                field: LOG_MODE_ENV.into(),
                message: format!("Invalid log mode: '{mode}' (expected quiet/normal/verbose)"),
            })?);
        }

        Ok(())
    }

    fn parse_seconds(field: &str, s: &str) -> Result<u64> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Must be a non-negative integer, got '{s}'"),
        })
    }
}
