//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the quadro application.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::persistence::{find_config_file, read_config_file, write_config_file};
use crate::refresh::RefreshConfig;
use crate::server::ServerConfig;

/// Environment variable that overrides the configured server base URL.
const SERVER_ENV_VAR: &str = "QUADRO_SERVER";

/// The main configuration struct for the quadro application.
///
/// # Examples
///
/// ```
/// use quadro_config::{Config, RefreshConfig, ServerConfig};
///
/// // Default config talks to the local reference service
/// let config = Config::default();
/// assert_eq!(config.server.base_url, "http://localhost:5000");
///
/// // Custom config
/// let config = Config {
///     server: ServerConfig::new("https://tasks.example.com"),
///     refresh: RefreshConfig::every(60),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where to reach the task service.
    #[serde(default)]
    pub server: ServerConfig,

    /// Automatic board reload settings.
    #[serde(default)]
    pub refresh: RefreshConfig,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./quadro.json5` or `./quadro.json`
    /// 2. User: `~/.config/quadro/config.json5` or `~/.config/quadro/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    /// The `QUADRO_SERVER` environment variable, when set, overrides the
    /// server base URL from any source.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use quadro_config::Config;
    ///
    /// # fn example() -> quadro_config::Result<()> {
    /// let config = Config::load()?;
    /// println!("Task service at {}", config.server.base_url);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        let mut config = match find_config_file() {
            Some(path) => read_config_file(&path)?,
            None => Self::default(),
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file.
    ///
    /// Environment overrides are not applied; the file contents win.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Applies environment variable overrides.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(SERVER_ENV_VAR)
            && !url.trim().is_empty()
        {
            self.server.base_url = url;
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any section fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_config::{Config, ServerConfig};
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.server = ServerConfig::new("not a url");
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.refresh.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.server.base_url, "http://localhost:5000");
        assert!(config.refresh.interval().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn new_equals_default() {
        assert_eq!(Config::new(), Config::default());
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn deserialize_partial() {
        let json = r#"{"server": {"base_url": "http://10.0.0.2:8080"}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.server.base_url, "http://10.0.0.2:8080");
        assert!(config.refresh.interval().is_none());
    }

    #[test]
    fn validate_rejects_bad_server_url() {
        let config = Config {
            server: ServerConfig::new("tasks.example.com"),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_refresh_interval() {
        let config = Config {
            refresh: RefreshConfig::every(1),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn serialize_deserialize_roundtrip() {
        let config = Config {
            server: ServerConfig::new("https://tasks.example.com"),
            refresh: RefreshConfig::every(120),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn load_from_json5_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quadro.json5");
        std::fs::write(
            &path,
            r#"
            {
                server: { base_url: "http://192.168.0.10:5000" },
                refresh: { auto_interval_secs: 30 },
            }
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.server.base_url, "http://192.168.0.10:5000");
        assert_eq!(config.refresh.auto_interval_secs, Some(30));
    }

    #[test]
    fn load_from_invalid_config_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quadro.json");
        std::fs::write(&path, r#"{"server": {"base_url": "nope"}}"#).unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let original = Config {
            server: ServerConfig::new("http://example.com"),
            refresh: RefreshConfig::every(60),
        };

        original.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(original, loaded);
    }
}
