//! Task service client implementation.
//!
//! This module provides the [`ApiClient`] struct for talking to the
//! REST task service: listing the task collection, creating tasks, and
//! sending partial status updates.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use quadro_protocol::{NewTask, StatusUpdate, Task, TaskId, TaskStatus};
use tracing::{debug, instrument, warn};

use crate::error::{Error, Result};

/// Characters that must be escaped when a task id is used as a URL path
/// segment. Identifiers are opaque, so nothing about their content can
/// be assumed.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?');

/// Client for the REST task service.
///
/// The client is cheap to clone (the underlying connection pool is
/// shared), which lets UI handlers fire requests from spawned tasks
/// without coordination.
///
/// # Examples
///
/// ```no_run
/// use quadro_api::ApiClient;
///
/// # async fn example() -> quadro_api::Result<()> {
/// let client = ApiClient::new("http://localhost:5000");
/// let tasks = client.list_tasks().await?;
/// println!("{} tasks on the board", tasks.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// The underlying reqwest client.
    http: reqwest::Client,
    /// Base URL of the task service, without a trailing slash.
    base_url: String,
}

impl ApiClient {
    /// Creates a new client for the service at `base_url`.
    ///
    /// A trailing slash on the base URL is tolerated and stripped.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_api::ApiClient;
    ///
    /// let client = ApiClient::new("http://localhost:5000/");
    /// assert_eq!(client.base_url(), "http://localhost:5000");
    /// ```
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Returns the base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the task collection endpoint.
    fn collection_url(&self) -> String {
        format!("{}/api/tasks", self.base_url)
    }

    /// URL of the per-task endpoint for the given identifier.
    fn task_url(&self, id: &TaskId) -> String {
        format!(
            "{}/api/tasks/{}",
            self.base_url,
            utf8_percent_encode(id.as_str(), PATH_SEGMENT)
        )
    }

    /// Fetches the full task collection.
    ///
    /// Records are decoded individually: a record that is malformed or
    /// carries an unknown status is dropped with a warning instead of
    /// failing the whole load, so one bad row cannot blank the board.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the service answers with a
    /// non-success status, or the body is not a JSON array.
    #[instrument(skip(self))]
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        debug!(url = %self.collection_url(), "fetching task collection");
        let response = self.http.get(self.collection_url()).send().await?;
        let response = expect_success(response)?;

        let body = response.text().await?;
        let records: Vec<serde_json::Value> = serde_json::from_str(&body)?;

        let tasks = decode_records(records);
        debug!(count = tasks.len(), "fetched tasks");
        Ok(tasks)
    }

    /// Creates a task from the given payload.
    ///
    /// The service assigns the identifier and the initial status. The
    /// created record is returned when the response body parses; callers
    /// that only need success/failure can ignore it (the board is
    /// reloaded afterwards either way).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service answers with
    /// a non-success status.
    #[instrument(skip(self, new_task), fields(client = %new_task.client))]
    pub async fn create_task(&self, new_task: &NewTask) -> Result<Option<Task>> {
        debug!(url = %self.collection_url(), "creating task");
        let response = self
            .http
            .post(self.collection_url())
            .json(new_task)
            .send()
            .await?;
        let response = expect_success(response)?;

        let body = response.text().await?;
        Ok(decode_task_body(&body))
    }

    /// Updates a task's status via the per-task endpoint.
    ///
    /// This is a partial update: the body carries only the new status.
    /// No same-status guard is applied; moving a card onto its current
    /// column is a valid (no-op) transition and is sent as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service answers with
    /// a non-success status (including 404 for an unknown identifier).
    #[instrument(skip(self), fields(id = %id, status = ?status))]
    pub async fn update_status(&self, id: &TaskId, status: TaskStatus) -> Result<Option<Task>> {
        debug!(url = %self.task_url(id), "updating task status");
        let response = self
            .http
            .put(self.task_url(id))
            .json(&StatusUpdate::new(status))
            .send()
            .await?;
        let response = expect_success(response)?;

        let body = response.text().await?;
        Ok(decode_task_body(&body))
    }
}

/// Maps a non-success response to [`Error::Status`].
fn expect_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(Error::Status {
            status: status.as_u16(),
        })
    }
}

/// Decodes task records one by one, dropping the ones that fail.
fn decode_records(records: Vec<serde_json::Value>) -> Vec<Task> {
    records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<Task>(record) {
            Ok(task) => Some(task),
            Err(e) => {
                warn!(error = %e, "dropping undecodable task record");
                None
            }
        })
        .collect()
}

/// Decodes a single task from a mutation response body, if it parses.
fn decode_task_body(body: &str) -> Option<Task> {
    match serde_json::from_str::<Task>(body) {
        Ok(task) => Some(task),
        Err(e) => {
            warn!(error = %e, "response body did not contain a task record");
            None
        }
    }
}
