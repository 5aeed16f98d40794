//! Board rendering widget.
//!
//! This module provides functions for rendering the complete board
//! with its three columns arranged horizontally.

use quadro_protocol::{Board, TaskStatus};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
};

use super::column::{ColumnPosition, render_column};

/// Renders the complete board to the buffer.
///
/// The board displays three columns (Pending, In Progress, Done)
/// arranged horizontally with equal widths. Each column shows its tasks
/// with the selected column and task highlighted.
///
/// # Arguments
///
/// * `board` - The board containing all tasks
/// * `selected_column` - Index of the currently focused column (0-2)
/// * `selected_task` - Index of the selected task within the focused column, if any
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
///
/// # Layout
///
/// ```text
/// +-------------+-------------+-------------+
/// | Pending     | In Progress | Done        |
/// +-------------+-------------+-------------+
/// | Task 1      | Task 3      | Task 4      |
/// | Task 2      |             |             |
/// +-------------+-------------+-------------+
/// ```
///
/// # Examples
///
/// ```
/// use quadro_protocol::{Board, Task, TaskStatus};
/// use quadro_tui::widgets::render_board;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let task = Task::new("1", "Ana", "Acme", "Fix bug", "2024-05-01T09:00", TaskStatus::Pending);
/// let board = Board::from_tasks(vec![task]);
///
/// let area = Rect::new(0, 0, 90, 20);
/// let mut buf = Buffer::empty(area);
///
/// render_board(&board, 0, Some(0), area, &mut buf);
/// ```
pub fn render_board(
    board: &Board,
    selected_column: usize,
    selected_task: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
) {
    // Split into 3 equal columns
    let column_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    // Render each column
    let column_count = TaskStatus::all().len();
    for (i, status) in TaskStatus::all().iter().enumerate() {
        let column = board.column(*status);
        let is_focused = selected_column == i;

        // Only show task selection in focused column
        let task_selection = if is_focused { selected_task } else { None };

        // Determine column position for border rendering
        let position = if i == 0 {
            ColumnPosition::First
        } else if i == column_count - 1 {
            ColumnPosition::Last
        } else {
            ColumnPosition::Middle
        };

        // Check if the previous column is focused (for shared border coloring)
        let prev_focused = i > 0 && selected_column == i - 1;

        render_column(
            column,
            is_focused,
            task_selection,
            column_areas[i],
            buf,
            position,
            prev_focused,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use quadro_protocol::Task;

    fn task(id: &str, status: TaskStatus) -> Task {
        Task::new(id, "Ana", "Acme", "Work item", "2024-05-01T09:00", status)
    }

    #[test]
    fn render_empty_board() {
        let board = Board::new();
        let area = Rect::new(0, 0, 90, 20);
        let mut buf = Buffer::empty(area);

        render_board(&board, 0, None, area, &mut buf);

        let content = buffer_to_string(&buf);
        // All three columns should be rendered
        assert!(content.contains("Pending"));
        assert!(content.contains("In Progress"));
        assert!(content.contains("Done"));
    }

    #[test]
    fn render_board_with_tasks() {
        let board = Board::from_tasks(vec![
            task("1", TaskStatus::Pending),
            task("2", TaskStatus::Pending),
            task("3", TaskStatus::Done),
        ]);

        let area = Rect::new(0, 0, 90, 20);
        let mut buf = Buffer::empty(area);

        render_board(&board, 0, Some(0), area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Pending (2)"));
        assert!(content.contains("Done (1)"));
    }

    #[test]
    fn render_board_narrow_terminal() {
        let board = Board::new();
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);

        // Should not panic with narrow area
        render_board(&board, 0, None, area, &mut buf);
    }
}
