//! REST client for the quadro task service.
//!
//! This crate wraps the three endpoints the client uses:
//!
//! - `GET /api/tasks` - the full task collection
//! - `POST /api/tasks` - create a task
//! - `PUT /api/tasks/{id}` - partial status update
//!
//! # Error policy
//!
//! Every operation returns a [`Result`] classifying the failure as
//! transport, non-success status, or malformed body. The client itself
//! never retries and never panics; whether a failure is surfaced or
//! swallowed is the caller's decision (the TUI logs and continues).
//!
//! # Examples
//!
//! ```no_run
//! use quadro_api::ApiClient;
//! use quadro_protocol::{NewTask, TaskStatus};
//!
//! # async fn example() -> quadro_api::Result<()> {
//! let client = ApiClient::new("http://localhost:5000");
//!
//! // Create a task, then reload the board.
//! let payload = NewTask::new("Ana", "Acme", "Fix bug", "2024-05-01", "09:00");
//! client.create_task(&payload).await?;
//! let tasks = client.list_tasks().await?;
//!
//! // Move the first task to Done.
//! if let Some(task) = tasks.first() {
//!     client.update_status(&task.id, TaskStatus::Done).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::{Error, Result};
