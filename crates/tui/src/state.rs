//! Application state management.
//!
//! This module defines the core state structures for the TUI application,
//! including focus management and selection tracking.

use quadro_protocol::{Board, Column, Task, TaskStatus};

/// The current focus area in the UI.
///
/// Determines which UI component receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Focus is on the board columns.
    #[default]
    Board,
    /// Focus is on the new-task form; the modal is visible exactly when
    /// this is the focus.
    Form,
}

/// The application state.
///
/// Contains all mutable UI state: the board data, focus, selection
/// tracking, and the transient status-bar notice. The board itself is
/// only ever replaced wholesale by [`AppState::replace_board`] after a
/// reload; no other path mutates it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The board being displayed.
    pub board: Board,
    /// Current focus area.
    pub focus: Focus,
    /// Index of the currently selected column (0-2).
    pub selected_column: usize,
    /// Index of the selected task within the current column, if any.
    pub selected_task: Option<usize>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Transient one-line notice for the status bar.
    pub notice: Option<String>,
    /// Number of network requests currently in flight.
    pub pending_requests: usize,
}

impl AppState {
    /// Creates a new application state with the given board.
    ///
    /// Initializes with focus on the board, selecting the first column.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_protocol::Board;
    /// use quadro_tui::AppState;
    ///
    /// let state = AppState::new(Board::new());
    /// assert_eq!(state.selected_column, 0);
    /// ```
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            focus: Focus::default(),
            selected_column: 0,
            selected_task: None,
            help_visible: false,
            notice: None,
            pending_requests: 0,
        }
    }

    /// Returns a reference to the currently selected column.
    ///
    /// # Panics
    ///
    /// Panics if `selected_column` is out of bounds. This should never
    /// occur if navigation methods are used correctly, as they maintain
    /// the invariant that `selected_column` is always in `0..3`.
    fn selected_column_ref(&self) -> &Column {
        self.board
            .columns
            .get(self.selected_column)
            .expect("selected_column should always be in bounds (0..3)")
    }

    /// Returns the status of the currently selected column.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_protocol::{Board, TaskStatus};
    /// use quadro_tui::AppState;
    ///
    /// let state = AppState::new(Board::new());
    /// assert_eq!(state.selected_status(), TaskStatus::Pending);
    /// ```
    #[must_use]
    pub fn selected_status(&self) -> TaskStatus {
        self.selected_column_ref().status
    }

    /// Returns a reference to the currently selected task, if any.
    ///
    /// Returns `None` if no task is selected or if the selection is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_protocol::{Board, Task, TaskStatus};
    /// use quadro_tui::AppState;
    ///
    /// let task = Task::new("1", "Ana", "Acme", "Fix bug", "2024-05-01T09:00", TaskStatus::Pending);
    /// let mut state = AppState::new(Board::from_tasks(vec![task]));
    /// assert!(state.selected_task().is_none());
    ///
    /// state.navigate_down();
    /// assert!(state.selected_task().is_some());
    /// ```
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        let task_idx = self.selected_task?;
        self.selected_column_ref().tasks.get(task_idx)
    }

    /// Moves the column selection to the left, wrapping around if needed.
    pub fn navigate_left(&mut self) {
        if self.selected_column > 0 {
            self.selected_column -= 1;
        } else {
            self.selected_column = 2; // Wrap to last column
        }
        self.clamp_task_selection();
    }

    /// Moves the column selection to the right, wrapping around if needed.
    pub fn navigate_right(&mut self) {
        if self.selected_column < 2 {
            self.selected_column += 1;
        } else {
            self.selected_column = 0; // Wrap to first column
        }
        self.clamp_task_selection();
    }

    /// Moves the task selection up within the current column.
    pub fn navigate_up(&mut self) {
        let column = self.selected_column_ref();
        if column.is_empty() {
            self.selected_task = None;
            return;
        }

        match self.selected_task {
            Some(idx) if idx > 0 => {
                self.selected_task = Some(idx - 1);
            }
            Some(_) => {
                // Wrap to bottom
                self.selected_task = Some(column.len().saturating_sub(1));
            }
            None => {
                // Select first task
                self.selected_task = Some(0);
            }
        }
    }

    /// Moves the task selection down within the current column.
    pub fn navigate_down(&mut self) {
        let column = self.selected_column_ref();
        if column.is_empty() {
            self.selected_task = None;
            return;
        }

        let max_idx = column.len().saturating_sub(1);
        match self.selected_task {
            Some(idx) if idx < max_idx => {
                self.selected_task = Some(idx + 1);
            }
            Some(_) => {
                // Wrap to top
                self.selected_task = Some(0);
            }
            None => {
                // Select first task
                self.selected_task = Some(0);
            }
        }
    }

    /// Replaces the board after a reload.
    ///
    /// The previous board is discarded wholesale; the selection is
    /// clamped so it stays valid against the new column sizes.
    pub fn replace_board(&mut self, board: Board) {
        self.board = board;
        self.clamp_task_selection();
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        if self.help_visible {
            self.help_visible = false;
            true
        } else {
            false
        }
    }

    /// Clears the current task selection.
    pub fn clear_selection(&mut self) {
        self.selected_task = None;
    }

    /// Sets the transient status-bar notice.
    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    /// Clears the status-bar notice.
    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Returns `true` if the new-task form is visible.
    #[must_use]
    pub fn form_visible(&self) -> bool {
        self.focus == Focus::Form
    }

    /// Ensures the task selection is valid for the current column.
    fn clamp_task_selection(&mut self) {
        let column = self.selected_column_ref();
        if column.is_empty() {
            self.selected_task = None;
        } else if let Some(idx) = self.selected_task
            && idx >= column.len()
        {
            self.selected_task = Some(column.len().saturating_sub(1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadro_protocol::Task;

    fn task(id: &str, status: TaskStatus) -> Task {
        Task::new(id, "Ana", "Acme", "Work", "2024-05-01T09:00", status)
    }

    #[test]
    fn new_state_has_correct_defaults() {
        let state = AppState::new(Board::new());

        assert_eq!(state.focus, Focus::Board);
        assert_eq!(state.selected_column, 0);
        assert_eq!(state.selected_task, None);
        assert!(!state.help_visible);
        assert!(state.notice.is_none());
        assert_eq!(state.pending_requests, 0);
    }

    #[test]
    fn navigate_left_wraps_around() {
        let mut state = AppState::new(Board::new());

        state.navigate_left();
        assert_eq!(state.selected_column, 2);

        state.navigate_left();
        assert_eq!(state.selected_column, 1);
    }

    #[test]
    fn navigate_right_wraps_around() {
        let mut state = AppState::new(Board::new());

        state.selected_column = 2;
        state.navigate_right();
        assert_eq!(state.selected_column, 0);
    }

    #[test]
    fn navigate_up_down_in_empty_column() {
        let mut state = AppState::new(Board::new());

        state.navigate_up();
        assert_eq!(state.selected_task, None);

        state.navigate_down();
        assert_eq!(state.selected_task, None);
    }

    #[test]
    fn navigate_up_down_with_tasks() {
        let board = Board::from_tasks(vec![
            task("1", TaskStatus::Pending),
            task("2", TaskStatus::Pending),
            task("3", TaskStatus::Pending),
        ]);
        let mut state = AppState::new(board);

        state.navigate_down();
        assert_eq!(state.selected_task, Some(0));

        state.navigate_down();
        assert_eq!(state.selected_task, Some(1));

        state.navigate_down();
        assert_eq!(state.selected_task, Some(2));

        // Wrap around
        state.navigate_down();
        assert_eq!(state.selected_task, Some(0));

        // Navigate up from top wraps to bottom
        state.navigate_up();
        assert_eq!(state.selected_task, Some(2));
    }

    #[test]
    fn column_change_clamps_selection() {
        let board = Board::from_tasks(vec![
            task("1", TaskStatus::Pending),
            task("2", TaskStatus::Pending),
            task("3", TaskStatus::Pending),
            task("4", TaskStatus::InProgress),
        ]);
        let mut state = AppState::new(board);

        state.navigate_down();
        state.navigate_down();
        state.navigate_down();
        assert_eq!(state.selected_task, Some(2));

        // Moving to the one-task column clamps the index
        state.navigate_right();
        assert_eq!(state.selected_task, Some(0));

        // Moving to the empty Done column clears it
        state.navigate_right();
        assert_eq!(state.selected_task, None);
    }

    #[test]
    fn selected_status_follows_column() {
        let mut state = AppState::new(Board::new());
        assert_eq!(state.selected_status(), TaskStatus::Pending);

        state.navigate_right();
        assert_eq!(state.selected_status(), TaskStatus::InProgress);

        state.navigate_right();
        assert_eq!(state.selected_status(), TaskStatus::Done);
    }

    #[test]
    fn selected_task_returns_task_when_selected() {
        let board = Board::from_tasks(vec![
            task("1", TaskStatus::Pending),
            task("2", TaskStatus::Pending),
        ]);
        let mut state = AppState::new(board);
        state.navigate_down();

        let selected = state.selected_task().expect("should have selected task");
        assert_eq!(selected.id.as_str(), "1");
    }

    #[test]
    fn selected_task_returns_none_for_invalid_selection() {
        let mut state = AppState::new(Board::new());
        state.selected_task = Some(0); // Manually set invalid selection
        assert!(state.selected_task().is_none());
    }

    #[test]
    fn replace_board_clamps_selection() {
        let board = Board::from_tasks(vec![
            task("1", TaskStatus::Pending),
            task("2", TaskStatus::Pending),
        ]);
        let mut state = AppState::new(board);
        state.navigate_down();
        state.navigate_down();
        assert_eq!(state.selected_task, Some(1));

        // The reload shrank the column
        state.replace_board(Board::from_tasks(vec![task("1", TaskStatus::Pending)]));
        assert_eq!(state.selected_task, Some(0));

        // The reload emptied the board
        state.replace_board(Board::new());
        assert_eq!(state.selected_task, None);
    }

    #[test]
    fn toggle_and_dismiss_help() {
        let mut state = AppState::new(Board::new());

        state.toggle_help();
        assert!(state.help_visible);

        assert!(state.dismiss_help());
        assert!(!state.help_visible);
        assert!(!state.dismiss_help());
    }

    #[test]
    fn notice_set_and_clear() {
        let mut state = AppState::new(Board::new());

        state.set_notice("Task created");
        assert_eq!(state.notice.as_deref(), Some("Task created"));

        state.clear_notice();
        assert!(state.notice.is_none());
    }

    #[test]
    fn form_visible_follows_focus() {
        let mut state = AppState::new(Board::new());
        assert!(!state.form_visible());

        state.focus = Focus::Form;
        assert!(state.form_visible());
    }
}
