//! Kanban board types and structures.
//!
//! This module defines the three board columns, the status enum that
//! doubles as the column identifier, and the board structure rebuilt from
//! each fetch of the task collection.

use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskId};

/// The status of a task, which is also the identifier of the column
/// that renders it.
///
/// The three wire names (`pending`, `in_progress`, `done`) are the only
/// valid column identifiers; the status value is used directly as the
/// lookup key when placing a card.
///
/// # Examples
///
/// ```
/// use quadro_protocol::TaskStatus;
///
/// let status = TaskStatus::InProgress;
/// assert_eq!(status.display_name(), "In Progress");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Newly created tasks, waiting to be started.
    #[default]
    Pending,
    /// Tasks currently being worked on.
    InProgress,
    /// Completed tasks.
    Done,
}

impl TaskStatus {
    /// Returns all statuses in board order.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_protocol::TaskStatus;
    ///
    /// let statuses = TaskStatus::all();
    /// assert_eq!(statuses.len(), 3);
    /// assert_eq!(statuses[0], TaskStatus::Pending);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Pending, Self::InProgress, Self::Done]
    }

    /// Returns a human-readable display name for the column header.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Pending.display_name(), "Pending");
    /// assert_eq!(TaskStatus::Done.display_name(), "Done");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Returns the index of this status in the board (0-2).
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Pending.index(), 0);
    /// assert_eq!(TaskStatus::Done.index(), 2);
    /// ```
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Pending => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// Creates a `TaskStatus` from its column index.
    ///
    /// Returns `None` if the index is out of range (>= 3).
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::from_index(0), Some(TaskStatus::Pending));
    /// assert_eq!(TaskStatus::from_index(3), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Pending),
            1 => Some(Self::InProgress),
            2 => Some(Self::Done),
            _ => None,
        }
    }

    /// Returns the next status in board order, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Pending.next(), Some(TaskStatus::InProgress));
    /// assert_eq!(TaskStatus::Done.next(), None);
    /// ```
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Returns the previous status in board order, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::InProgress.previous(), Some(TaskStatus::Pending));
    /// assert_eq!(TaskStatus::Pending.previous(), None);
    /// ```
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self.index().checked_sub(1) {
            Some(idx) => Self::from_index(idx),
            None => None,
        }
    }
}

/// A single column on the Kanban board.
///
/// Contains the tasks whose status matches the column, in the order the
/// service returned them.
///
/// # Examples
///
/// ```
/// use quadro_protocol::{Column, TaskStatus};
///
/// let column = Column::new(TaskStatus::Pending);
/// assert!(column.is_empty());
/// assert_eq!(column.status, TaskStatus::Pending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// The status this column renders.
    pub status: TaskStatus,
    /// Tasks currently in this column, in server order.
    pub tasks: Vec<Task>,
}

impl Column {
    /// Creates a new empty column for the given status.
    #[must_use]
    pub const fn new(status: TaskStatus) -> Self {
        Self {
            status,
            tasks: Vec::new(),
        }
    }

    /// Returns the number of tasks in this column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the column has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends a task to the end of this column.
    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Returns a reference to a task by ID, if present in this column.
    #[must_use]
    pub fn get_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }
}

/// The Kanban board: three fixed columns derived entirely from the
/// server's task collection.
///
/// The board is never patched in place. Each reload rebuilds it from
/// scratch with [`Board::from_tasks`], which is what makes repeated
/// reloads idempotent.
///
/// # Examples
///
/// ```
/// use quadro_protocol::{Board, Task, TaskStatus};
///
/// let tasks = vec![
///     Task::new("1", "Ana", "Acme", "Fix bug", "2024-05-01T09:00", TaskStatus::Pending),
///     Task::new("2", "Bia", "Globex", "Ship it", "2024-05-02T10:00", TaskStatus::Done),
/// ];
/// let board = Board::from_tasks(tasks);
/// assert_eq!(board.column(TaskStatus::Pending).len(), 1);
/// assert_eq!(board.column(TaskStatus::Done).len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// The three columns of the board, indexed by [`TaskStatus::index`].
    pub columns: [Column; 3],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a new empty board with three columns.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_protocol::Board;
    ///
    /// let board = Board::new();
    /// assert_eq!(board.columns.len(), 3);
    /// assert_eq!(board.task_count(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: [
                Column::new(TaskStatus::Pending),
                Column::new(TaskStatus::InProgress),
                Column::new(TaskStatus::Done),
            ],
        }
    }

    /// Builds a board from a task collection, placing each task in the
    /// column matching its status.
    ///
    /// This is the full clear-and-rebuild used on every reload: starting
    /// from empty columns makes repeated loads idempotent and rules out
    /// duplicated cards.
    #[must_use]
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut board = Self::new();
        for task in tasks {
            board.add_task(task);
        }
        board
    }

    /// Returns a reference to the column for the given status.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &Column {
        &self.columns[status.index()]
    }

    /// Returns a mutable reference to the column for the given status.
    #[must_use]
    pub fn column_mut(&mut self, status: TaskStatus) -> &mut Column {
        &mut self.columns[status.index()]
    }

    /// Adds a task to the column matching its status.
    pub fn add_task(&mut self, task: Task) {
        let status = task.status;
        self.column_mut(status).push(task);
    }

    /// Finds a task by ID across all columns.
    #[must_use]
    pub fn get_task(&self, id: &TaskId) -> Option<&Task> {
        self.columns.iter().find_map(|column| column.get_task(id))
    }

    /// Returns the total number of tasks on the board.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, status: TaskStatus) -> Task {
        Task::new(id, "Ana", "Acme", "Work", "2024-05-01T09:00", status)
    }

    #[test]
    fn status_default_is_pending() {
        assert_eq!(TaskStatus::default(), TaskStatus::Pending);
    }

    #[test]
    fn status_wire_names() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::Pending).unwrap(),
            r#""pending""#
        );
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            r#""in_progress""#
        );
        assert_eq!(
            serde_json::to_string(&TaskStatus::Done).unwrap(),
            r#""done""#
        );
    }

    #[test]
    fn status_index_roundtrip() {
        for status in TaskStatus::all() {
            assert_eq!(TaskStatus::from_index(status.index()), Some(status));
        }
        assert_eq!(TaskStatus::from_index(3), None);
    }

    #[test]
    fn status_next_previous_walk_the_board() {
        assert_eq!(TaskStatus::Pending.next(), Some(TaskStatus::InProgress));
        assert_eq!(TaskStatus::InProgress.next(), Some(TaskStatus::Done));
        assert_eq!(TaskStatus::Done.next(), None);

        assert_eq!(TaskStatus::Done.previous(), Some(TaskStatus::InProgress));
        assert_eq!(TaskStatus::InProgress.previous(), Some(TaskStatus::Pending));
        assert_eq!(TaskStatus::Pending.previous(), None);
    }

    #[test]
    fn from_tasks_places_each_task_by_status() {
        let board = Board::from_tasks(vec![
            task("1", TaskStatus::Pending),
            task("2", TaskStatus::InProgress),
            task("3", TaskStatus::Done),
            task("4", TaskStatus::Pending),
        ]);

        assert_eq!(board.column(TaskStatus::Pending).len(), 2);
        assert_eq!(board.column(TaskStatus::InProgress).len(), 1);
        assert_eq!(board.column(TaskStatus::Done).len(), 1);
        assert_eq!(board.task_count(), 4);
    }

    #[test]
    fn from_tasks_preserves_server_order_within_columns() {
        let board = Board::from_tasks(vec![
            task("a", TaskStatus::Pending),
            task("b", TaskStatus::Done),
            task("c", TaskStatus::Pending),
        ]);

        let pending = board.column(TaskStatus::Pending);
        assert_eq!(pending.tasks[0].id.as_str(), "a");
        assert_eq!(pending.tasks[1].id.as_str(), "c");
    }

    #[test]
    fn from_tasks_is_idempotent() {
        let tasks = vec![
            task("1", TaskStatus::Pending),
            task("2", TaskStatus::InProgress),
        ];

        let first = Board::from_tasks(tasks.clone());
        let second = Board::from_tasks(tasks);
        assert_eq!(first, second);
    }

    #[test]
    fn get_task_searches_all_columns() {
        let board = Board::from_tasks(vec![
            task("1", TaskStatus::Pending),
            task("2", TaskStatus::Done),
        ]);

        let found = board.get_task(&"2".into()).expect("should find task");
        assert_eq!(found.status, TaskStatus::Done);
        assert!(board.get_task(&"missing".into()).is_none());
    }

    #[test]
    fn empty_board_has_three_empty_columns() {
        let board = Board::new();
        for status in TaskStatus::all() {
            assert!(board.column(status).is_empty());
        }
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn arb_task()(
            id in "[a-z0-9]{1,8}",
            status in any::<TaskStatus>(),
        ) -> Task {
            Task::new(id, "Ana", "Acme", "Work", "2024-05-01T09:00", status)
        }
    }

    proptest! {
        /// Every task lands in the column matching its status, and none
        /// are lost or duplicated.
        #[test]
        fn from_tasks_places_all_tasks(tasks in proptest::collection::vec(arb_task(), 0..30)) {
            let board = Board::from_tasks(tasks.clone());

            prop_assert_eq!(board.task_count(), tasks.len());
            for column in &board.columns {
                for task in &column.tasks {
                    prop_assert_eq!(task.status, column.status);
                }
            }
        }

        /// Rebuilding from the same collection yields an identical board.
        #[test]
        fn from_tasks_is_idempotent(tasks in proptest::collection::vec(arb_task(), 0..30)) {
            let first = Board::from_tasks(tasks.clone());
            let second = Board::from_tasks(tasks);
            prop_assert_eq!(first, second);
        }
    }
}
