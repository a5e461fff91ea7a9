//! Configuration file schema.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Settings read from `config.yaml` in the data directory.
///
/// Every field is optional; unset fields fall back to built-in defaults.
///
/// # Examples
///
/// ```
/// use projects::config::Config;
/// use projects::LogLevel;
///
/// let config: Config = serde_yaml::from_str("busy_timeout_seconds: 10\nlog_mode: verbose\n").unwrap();
/// assert_eq!(config.busy_timeout_seconds, Some(10));
/// assert_eq!(config.log_mode, Some(LogLevel::Verbose));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How long a connection waits on a locked database (seconds).
    pub busy_timeout_seconds: Option<u64>,

    /// Diagnostic verbosity when no CLI flag is given.
    pub log_mode: Option<LogLevel>,
}

impl Config {
    /// The configured busy timeout, if any.
    #[must_use]
    pub fn busy_timeout(&self) -> Option<Duration> {
        self.busy_timeout_seconds.map(Duration::from_secs)
    }

    /// Overlays every field set in `other` onto `self`.
    pub fn merge(&mut self, other: &Self) {
        if other.busy_timeout_seconds.is_some() {
            self.busy_timeout_seconds = other.busy_timeout_seconds;
        }
        if other.log_mode.is_some() {
            self.log_mode = other.log_mode;
        }
    }
}
