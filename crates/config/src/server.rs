//! Task service address configuration.
//!
//! This module holds the one piece of configuration the client cannot
//! run without: where the task service lives.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default base URL, matching the reference service's bind address.
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Where to reach the task service.
///
/// # Examples
///
/// ```
/// use quadro_config::ServerConfig;
///
/// let server = ServerConfig::default();
/// assert_eq!(server.base_url, "http://localhost:5000");
/// assert!(server.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the task service. The `/api/tasks` paths are appended
    /// by the API client.
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Creates a server configuration for the given base URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_config::ServerConfig;
    ///
    /// let server = ServerConfig::new("https://tasks.example.com");
    /// assert_eq!(server.base_url, "https://tasks.example.com");
    /// ```
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Validates the server URL.
    ///
    /// Only the scheme and non-emptiness are checked here; whether the
    /// service actually answers is a runtime concern.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is empty or does not use http/https.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_config::ServerConfig;
    ///
    /// assert!(ServerConfig::new("http://localhost:5000").validate().is_ok());
    /// assert!(ServerConfig::new("ftp://example.com").validate().is_err());
    /// assert!(ServerConfig::new("").validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidServerUrl {
                reason: "URL is empty".to_string(),
            });
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::InvalidServerUrl {
                reason: format!("expected an http(s) URL, got {:?}", self.base_url),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_localhost() {
        let server = ServerConfig::default();
        assert_eq!(server.base_url, "http://localhost:5000");
        assert!(server.validate().is_ok());
    }

    #[test]
    fn validate_accepts_https() {
        assert!(ServerConfig::new("https://tasks.example.com").validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_url() {
        let err = ServerConfig::new("  ").validate().unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn validate_rejects_other_schemes() {
        assert!(ServerConfig::new("ftp://example.com").validate().is_err());
        assert!(ServerConfig::new("localhost:5000").validate().is_err());
    }

    #[test]
    fn serialization_roundtrip() {
        let server = ServerConfig::new("http://10.0.0.2:8080");
        let json = serde_json::to_string(&server).unwrap();
        let parsed: ServerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(server, parsed);
    }
}
