//! Terminal UI for the quadro application.
//!
//! This crate provides a Ratatui-based terminal interface for the task
//! board: three status columns, a popup creation form, and card movement
//! between columns backed by the task service.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct, message handling, and run loop
//! - [`state`]: Application state management
//! - [`form_state`]: New-task form state management
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`widgets`]: Rendering functions for the board, form, and overlays
//!
//! # Example
//!
//! ```no_run
//! use quadro_api::ApiClient;
//! use quadro_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let api = ApiClient::new("http://localhost:5000");
//!     let mut app = App::new(api, None);
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod form_state;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::{App, Effect, NetOp, NetOutcome};
pub use form_state::{FormField, FormState};
pub use state::{AppState, Focus};
