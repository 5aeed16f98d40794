//! Configuration management for the quadro application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from files and environment variables.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`server`]: Task service address configuration
//! - [`refresh`]: Automatic board reload configuration
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Configuration is loaded from multiple sources with the following
//! priority (highest to lowest):
//!
//! 1. Environment variable (`QUADRO_SERVER`)
//! 2. Local config (`./quadro.json5` or `./quadro.json`)
//! 3. User config (`~/.config/quadro/config.json5` or `~/.config/quadro/config.json`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use quadro_config::Config;
//!
//! # fn example() -> quadro_config::Result<()> {
//! let config = Config::load()?;
//! println!("Task service at {}", config.server.base_url);
//! if let Some(interval) = config.refresh.interval() {
//!     println!("Auto-reload every {}s", interval.as_secs());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod persistence;
pub mod refresh;
pub mod server;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use refresh::RefreshConfig;
pub use server::ServerConfig;
