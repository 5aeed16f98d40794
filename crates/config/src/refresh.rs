//! Board refresh configuration.
//!
//! The client reloads the board after every mutation. Optionally it can
//! also reload on a timer; this module holds that setting.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Minimum allowed auto-refresh interval, in seconds.
///
/// Anything faster would hammer the service for a board that only
/// changes on user action.
const MIN_INTERVAL_SECS: u64 = 5;

/// Automatic board reload configuration.
///
/// By default no timer runs: the board reloads only at startup and after
/// mutations, matching the reference client's behavior.
///
/// # Examples
///
/// ```
/// use quadro_config::RefreshConfig;
///
/// let refresh = RefreshConfig::default();
/// assert!(refresh.interval().is_none());
///
/// let refresh = RefreshConfig::every(30);
/// assert_eq!(refresh.interval().unwrap().as_secs(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RefreshConfig {
    /// Seconds between automatic reloads; `None` disables the timer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_interval_secs: Option<u64>,
}

impl RefreshConfig {
    /// Creates a configuration that reloads every `secs` seconds.
    #[must_use]
    pub const fn every(secs: u64) -> Self {
        Self {
            auto_interval_secs: Some(secs),
        }
    }

    /// Returns the auto-refresh interval as a [`Duration`], if enabled.
    #[must_use]
    pub fn interval(&self) -> Option<Duration> {
        self.auto_interval_secs.map(Duration::from_secs)
    }

    /// Validates the refresh interval.
    ///
    /// # Errors
    ///
    /// Returns an error if an interval is set below the minimum.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_config::RefreshConfig;
    ///
    /// assert!(RefreshConfig::default().validate().is_ok());
    /// assert!(RefreshConfig::every(30).validate().is_ok());
    /// assert!(RefreshConfig::every(1).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if let Some(secs) = self.auto_interval_secs
            && secs < MIN_INTERVAL_SECS
        {
            return Err(ConfigError::InvalidRefreshInterval {
                reason: format!("{secs}s is below the minimum of {MIN_INTERVAL_SECS}s"),
            });
        }
        Ok(())
    }
}
