//! Stderr logging for the projects library and console.
//!
//! [`Logger`] is the backend for the `log` facade macros used throughout the
//! library once [`Logger::install`] has been called.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use projects::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Suppress all diagnostics.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Errors, warnings, info, and debug messages.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses "quiet", "normal" or "verbose", ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use projects::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(Error::Parse {
                input: s.to_string(),
                expected: "log level".to_string(),
            }),
        }
    }

    /// The most detailed `log` level shown at this verbosity.
    #[must_use]
    pub const fn filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Off,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Debug,
        }
    }
}

/// A simple stderr-based logger.
///
/// # Examples
///
/// ```
/// use log::Log;
/// use projects::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// let debug = log::Metadata::builder().level(log::Level::Debug).build();
/// assert!(!logger.enabled(&debug));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Registers this logger as the global `log` backend.
    ///
    /// Returns `false` if another logger was already installed; the existing
    /// one stays in place.
    pub fn install(self) -> bool {
        let filter = self.level.filter();
        if log::set_logger(Box::leak(Box::new(self))).is_err() {
            return false;
        }
        log::set_max_level(filter);
        true
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{}: {}",
                record.level().as_str().to_uppercase(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// Chooses the log level from CLI flags and configuration.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet)
/// 2. The configured level (`log_mode` or `PROJECTS_LOG_MODE`)
/// 3. Default (Normal)
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
///
/// # Examples
///
/// ```
/// use projects::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(false, false, None).level(), LogLevel::Normal);
/// assert_eq!(init_logger(false, true, Some(LogLevel::Verbose)).level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool, configured: Option<LogLevel>) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }
    Logger::new(configured.unwrap_or(LogLevel::Normal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
        assert_eq!(LogLevel::parse("Normal").unwrap(), LogLevel::Normal);
        assert_eq!(LogLevel::parse(" verbose ").unwrap(), LogLevel::Verbose);

        let err = LogLevel::parse("chatty").unwrap_err();
        assert_eq!(err.to_string(), "chatty is not a valid log level");
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevel::Quiet.to_string(), "quiet");
        assert_eq!(LogLevel::Normal.to_string(), "normal");
        assert_eq!(LogLevel::Verbose.to_string(), "verbose");
    }

    #[test]
    fn test_log_level_deserialize() {
        let level: LogLevel = serde_yaml::from_str("verbose").unwrap();
        assert_eq!(level, LogLevel::Verbose);
        assert!(serde_yaml::from_str::<LogLevel>("Loud").is_err());
    }

    #[test]
    fn test_filters() {
        assert_eq!(LogLevel::Quiet.filter(), log::LevelFilter::Off);
        assert_eq!(LogLevel::Normal.filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Verbose.filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_enabled_respects_level() {
        let normal = Logger::new(LogLevel::Normal);
        let warn = log::Metadata::builder().level(log::Level::Warn).build();
        let debug = log::Metadata::builder().level(log::Level::Debug).build();
        assert!(normal.enabled(&warn));
        assert!(!normal.enabled(&debug));

        let quiet = Logger::new(LogLevel::Quiet);
        let error = log::Metadata::builder().level(log::Level::Error).build();
        assert!(!quiet.enabled(&error));

        assert!(Logger::new(LogLevel::Verbose).enabled(&debug));
    }

    #[test]
    fn test_install_sets_global_backend_once() {
        assert!(Logger::new(LogLevel::Verbose).install());
        assert_eq!(log::max_level(), log::LevelFilter::Debug);

        assert!(!Logger::new(LogLevel::Quiet).install());
        assert_eq!(log::max_level(), log::LevelFilter::Debug);
        let debug = log::Metadata::builder().level(log::Level::Debug).build();
        assert!(log::logger().enabled(&debug));
    }

    #[test]
    fn test_logger_default() {
        assert_eq!(Logger::default().level(), LogLevel::Normal);
    }

    #[test]
    fn test_init_logger_precedence() {
        assert_eq!(init_logger(false, false, None).level(), LogLevel::Normal);
        assert_eq!(
            init_logger(false, false, Some(LogLevel::Quiet)).level(),
            LogLevel::Quiet
        );
        assert_eq!(
            init_logger(true, false, Some(LogLevel::Quiet)).level(),
            LogLevel::Verbose
        );
        assert_eq!(
            init_logger(false, true, Some(LogLevel::Verbose)).level(),
            LogLevel::Quiet
        );
        assert_eq!(init_logger(true, true, None).level(), LogLevel::Verbose);
    }
}
