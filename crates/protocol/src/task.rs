//! Task-related types for the Kanban board.
//!
//! This module defines the task record as the task service serves it,
//! plus the request payloads the client sends back: the creation payload
//! and the partial status update.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::board::TaskStatus;

/// Accepted wire formats for the due timestamp, in priority order.
///
/// The creation form produces the first format (`date` + `"T"` + `time`);
/// the others tolerate servers that add seconds or store SQL-style
/// timestamps.
const DUE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Display format for due timestamps on task cards.
const DUE_DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Opaque identifier for a task, assigned by the task service.
///
/// The client never mints or interprets identifiers; it only echoes them
/// back when addressing the per-task update endpoint. Deployments differ
/// on the JSON representation (integer row ids vs. string ids), so the
/// identifier deserializes from either and is treated as text from then on.
///
/// # Examples
///
/// ```
/// use quadro_protocol::TaskId;
///
/// let id: TaskId = serde_json::from_str("42").unwrap();
/// assert_eq!(id.as_str(), "42");
///
/// let id: TaskId = serde_json::from_str(r#""t1""#).unwrap();
/// assert_eq!(id.as_str(), "t1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TaskId(String);

impl TaskId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct IdVisitor;

        impl serde::de::Visitor<'_> for IdVisitor {
            type Value = TaskId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer task identifier")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<TaskId, E> {
                Ok(TaskId(v.to_owned()))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<TaskId, E> {
                Ok(TaskId(v.to_string()))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<TaskId, E> {
                Ok(TaskId(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// A task on the Kanban board, as served by the task service.
///
/// Field names on the wire follow the service's schema (`responsavel`,
/// `cliente`, `descricao`, `data_entrega`); extra server-side fields such
/// as `created_at` are ignored on deserialize. The status is the only
/// field the client ever mutates after creation.
///
/// # Examples
///
/// ```
/// use quadro_protocol::{Task, TaskStatus};
///
/// let json = r#"{
///     "id": 1,
///     "responsavel": "Ana",
///     "cliente": "Acme",
///     "descricao": "Fix bug",
///     "data_entrega": "2024-05-01T09:00",
///     "status": "pending"
/// }"#;
/// let task: Task = serde_json::from_str(json).unwrap();
/// assert_eq!(task.client, "Acme");
/// assert_eq!(task.status, TaskStatus::Pending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the service and immutable.
    #[serde(alias = "_id")]
    pub id: TaskId,
    /// Person responsible for the task.
    #[serde(rename = "responsavel")]
    pub assignee: String,
    /// Client the task is for.
    #[serde(rename = "cliente")]
    pub client: String,
    /// Free-text description of the work.
    #[serde(rename = "descricao")]
    pub description: String,
    /// Due timestamp, kept as the raw ISO-like string the service stores.
    #[serde(rename = "data_entrega")]
    pub due: String,
    /// Which board column the task currently belongs to.
    pub status: TaskStatus,
}

impl Task {
    /// Creates a task record with the given identity and fields.
    ///
    /// Used by tests and by callers that rebuild records from responses;
    /// the service is the only source of identifiers in normal operation.
    #[must_use]
    pub fn new(
        id: impl Into<TaskId>,
        assignee: impl Into<String>,
        client: impl Into<String>,
        description: impl Into<String>,
        due: impl Into<String>,
        status: TaskStatus,
    ) -> Self {
        Self {
            id: id.into(),
            assignee: assignee.into(),
            client: client.into(),
            description: description.into(),
            due: due.into(),
            status,
        }
    }

    /// Parses the due timestamp, tolerating the known wire formats.
    ///
    /// Returns `None` when the stored value matches none of them.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_protocol::{Task, TaskStatus};
    ///
    /// let task = Task::new("1", "Ana", "Acme", "Fix bug", "2024-05-01T09:00", TaskStatus::Pending);
    /// assert!(task.due_local().is_some());
    /// ```
    #[must_use]
    pub fn due_local(&self) -> Option<NaiveDateTime> {
        DUE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(&self.due, fmt).ok())
    }

    /// Returns the due timestamp formatted for display.
    ///
    /// Falls back to the raw stored string when the value does not parse,
    /// so a malformed timestamp still shows up on the card instead of
    /// hiding the task.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_protocol::{Task, TaskStatus};
    ///
    /// let task = Task::new("1", "Ana", "Acme", "Fix bug", "2024-05-01T09:00", TaskStatus::Pending);
    /// assert_eq!(task.due_display(), "01/05/2024 09:00");
    /// ```
    #[must_use]
    pub fn due_display(&self) -> String {
        match self.due_local() {
            Some(dt) => dt.format(DUE_DISPLAY_FORMAT).to_string(),
            None => self.due.clone(),
        }
    }
}

/// Payload for creating a task.
///
/// The status is deliberately absent: the service assigns new tasks to
/// the first column on its own.
///
/// # Examples
///
/// ```
/// use quadro_protocol::NewTask;
///
/// let payload = NewTask::new("Ana", "Acme", "Fix bug", "2024-05-01", "09:00");
/// assert_eq!(payload.due, "2024-05-01T09:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    /// Person responsible for the task.
    #[serde(rename = "responsavel")]
    pub assignee: String,
    /// Client the task is for.
    #[serde(rename = "cliente")]
    pub client: String,
    /// Free-text description of the work.
    #[serde(rename = "descricao")]
    pub description: String,
    /// Combined due timestamp (`"{date}T{time}"`).
    #[serde(rename = "data_entrega")]
    pub due: String,
}

impl NewTask {
    /// Builds a creation payload, combining the separate date and time
    /// inputs into the single due-timestamp string the service expects.
    #[must_use]
    pub fn new(
        assignee: impl Into<String>,
        client: impl Into<String>,
        description: impl Into<String>,
        date: &str,
        time: &str,
    ) -> Self {
        Self {
            assignee: assignee.into(),
            client: client.into(),
            description: description.into(),
            due: format!("{date}T{time}"),
        }
    }
}

/// Payload for the partial status update sent when a card moves.
///
/// # Examples
///
/// ```
/// use quadro_protocol::{StatusUpdate, TaskStatus};
///
/// let update = StatusUpdate::new(TaskStatus::Done);
/// let json = serde_json::to_string(&update).unwrap();
/// assert_eq!(json, r#"{"status":"done"}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    /// The new status for the task.
    pub status: TaskStatus,
}

impl StatusUpdate {
    /// Creates a status update payload.
    #[must_use]
    pub const fn new(status: TaskStatus) -> Self {
        Self { status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task::new(
            "1",
            "Ana",
            "Acme",
            "Fix bug",
            "2024-05-01T09:00",
            TaskStatus::Pending,
        )
    }

    #[test]
    fn task_id_from_integer() {
        let id: TaskId = serde_json::from_str("42").expect("deserialize");
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn task_id_from_string() {
        let id: TaskId = serde_json::from_str(r#""662f1a""#).expect("deserialize");
        assert_eq!(id.as_str(), "662f1a");
    }

    #[test]
    fn task_id_serializes_as_string() {
        let id = TaskId::from("7");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, r#""7""#);
    }

    #[test]
    fn task_deserializes_wire_field_names() {
        let json = r#"{
            "id": 3,
            "responsavel": "Bruno",
            "cliente": "Globex",
            "descricao": "Install rack",
            "data_entrega": "2024-06-10T14:30",
            "status": "in_progress",
            "created_at": "2024-06-01 08:00:00",
            "updated_at": "2024-06-02 08:00:00"
        }"#;

        let task: Task = serde_json::from_str(json).expect("deserialize");
        assert_eq!(task.id.as_str(), "3");
        assert_eq!(task.assignee, "Bruno");
        assert_eq!(task.client, "Globex");
        assert_eq!(task.status, TaskStatus::InProgress);
    }

    #[test]
    fn task_accepts_underscore_id_alias() {
        let json = r#"{
            "_id": "abc",
            "responsavel": "Ana",
            "cliente": "Acme",
            "descricao": "Fix bug",
            "data_entrega": "2024-05-01T09:00",
            "status": "pending"
        }"#;

        let task: Task = serde_json::from_str(json).expect("deserialize");
        assert_eq!(task.id.as_str(), "abc");
    }

    #[test]
    fn task_rejects_unknown_status() {
        let json = r#"{
            "id": 1,
            "responsavel": "Ana",
            "cliente": "Acme",
            "descricao": "Fix bug",
            "data_entrega": "2024-05-01T09:00",
            "status": "archived"
        }"#;

        assert!(serde_json::from_str::<Task>(json).is_err());
    }

    #[test]
    fn due_local_parses_minute_precision() {
        let task = sample_task();
        let dt = task.due_local().expect("should parse");
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2024-05-01 09:00");
    }

    #[test]
    fn due_local_parses_with_seconds() {
        let mut task = sample_task();
        task.due = "2024-05-01T09:00:30".to_string();
        assert!(task.due_local().is_some());

        task.due = "2024-05-01 09:00:30".to_string();
        assert!(task.due_local().is_some());
    }

    #[test]
    fn due_display_formats_localized() {
        let task = sample_task();
        assert_eq!(task.due_display(), "01/05/2024 09:00");
    }

    #[test]
    fn due_display_falls_back_to_raw_value() {
        let mut task = sample_task();
        task.due = "soon".to_string();
        assert_eq!(task.due_display(), "soon");
    }

    #[test]
    fn new_task_combines_date_and_time() {
        let payload = NewTask::new("Ana", "Acme", "Fix bug", "2024-05-01", "09:00");
        assert_eq!(payload.due, "2024-05-01T09:00");
    }

    #[test]
    fn new_task_wire_format() {
        let payload = NewTask::new("Ana", "Acme", "Fix bug", "2024-05-01", "09:00");
        let json = serde_json::to_value(&payload).expect("serialize");

        assert_eq!(json["responsavel"], "Ana");
        assert_eq!(json["cliente"], "Acme");
        assert_eq!(json["descricao"], "Fix bug");
        assert_eq!(json["data_entrega"], "2024-05-01T09:00");
        assert!(json.get("status").is_none());
    }

    #[test]
    fn status_update_wire_format() {
        let update = StatusUpdate::new(TaskStatus::Done);
        let json = serde_json::to_string(&update).expect("serialize");
        assert_eq!(json, r#"{"status":"done"}"#);
    }

    #[test]
    fn task_serialization_roundtrip() {
        let task = sample_task();
        let json = serde_json::to_string(&task).expect("serialize");
        let parsed: Task = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(task, parsed);
    }
}
