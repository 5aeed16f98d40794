//! Shared protocol types for the quadro application.
//!
//! This crate defines the core types used across all quadro components:
//! the task record as the task service serves it, the three-column board
//! structure, the request payloads, and the TUI message enum.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`task`]: Task identifiers, the `Task` record, and request payloads
//! - [`board`]: Task statuses, board columns, and the `Board` struct
//! - [`message`]: TUI event messages
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! Rebuilding the board from a fetched task collection:
//!
//! ```
//! use quadro_protocol::{Board, Task, TaskStatus};
//!
//! let tasks = vec![
//!     Task::new("1", "Ana", "Acme", "Fix bug", "2024-05-01T09:00", TaskStatus::Pending),
//!     Task::new("2", "Bia", "Globex", "Ship it", "2024-05-02T10:00", TaskStatus::Done),
//! ];
//!
//! let board = Board::from_tasks(tasks);
//! assert_eq!(board.column(TaskStatus::Pending).len(), 1);
//! assert_eq!(board.column(TaskStatus::Done).len(), 1);
//! ```

pub mod board;
pub mod error;
pub mod message;
pub mod task;

// Re-export primary types at crate root for convenience
pub use board::{Board, Column, TaskStatus};
pub use error::{ProtocolError, Result};
pub use message::Message;
pub use task::{NewTask, StatusUpdate, Task, TaskId};
