//! Configuration file loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::Result;

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Loads configuration from the data directory.
///
/// # Examples
///
/// ```no_run
/// use projects::config::ConfigLoader;
/// use std::path::Path;
///
/// let config = ConfigLoader::load(Path::new("/home/me/.projects")).unwrap();
/// println!("busy timeout: {:?}", config.busy_timeout());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Path of the configuration file for `data_dir`.
    #[must_use]
    pub fn config_path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE_NAME)
    }

    /// Loads `{data_dir}/config.yaml`, or the defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(data_dir: &Path) -> Result<Config> {
        let path = Self::config_path(data_dir);
        if !path.exists() {
            log::debug!("no configuration file at {}", path.display());
            return Ok(Config::default());
        }
        Self::load_file(&path)
    }

    /// Loads and parses a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&contents)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::LogLevel;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConfigLoader::load(temp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            ConfigLoader::config_path(temp_dir.path()),
            "busy_timeout_seconds: 12\nlog_mode: quiet\n",
        )
        .unwrap();

        let config = ConfigLoader::load(temp_dir.path()).unwrap();
        assert_eq!(config.busy_timeout_seconds, Some(12));
        assert_eq!(config.log_mode, Some(LogLevel::Quiet));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.yaml");
        fs::write(&path, "invalid: yaml: syntax:").unwrap();

        let err = ConfigLoader::load_file(&path).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let err = ConfigLoader::load_file(Path::new("/nonexistent/path/config.yaml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
