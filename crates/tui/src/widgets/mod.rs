//! Widget rendering functions for the quadro TUI.
//!
//! Each widget is a plain rendering function that draws into a
//! [`ratatui::buffer::Buffer`], which keeps them testable without a
//! terminal.

pub mod board;
pub mod column;
pub mod form;
pub mod help;
pub mod status_bar;
pub mod task_card;

pub use board::render_board;
pub use column::{ColumnPosition, render_column};
pub use form::render_form;
pub use help::render_help_overlay;
pub use status_bar::render_status_bar;
pub use task_card::{render_task_card, status_color};
