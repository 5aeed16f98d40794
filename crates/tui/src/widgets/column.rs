//! Column rendering widget.
//!
//! This module provides functions for rendering individual board columns
//! with their headers and task lists.

use quadro_protocol::Column;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::task_card::render_task_card;

/// Position of a column in the horizontal layout.
///
/// Used to determine which borders to render for each column, enabling
/// collapsed borders between adjacent columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPosition {
    /// First (leftmost) column - has left border with rounded corners.
    First,
    /// Middle column - has left border with T-connectors.
    Middle,
    /// Last (rightmost) column - has both borders, rounded on right.
    Last,
}

/// Border set for the first (leftmost) column: rounded corners on left, no right border.
const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─", // No corner, just continues the line
    bottom_left: "╰",
    bottom_right: "─", // No corner, just continues the line
    vertical_left: "│",
    vertical_right: " ", // No right border
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for middle columns: T-connectors on left, no right border.
const BORDER_SET_MIDDLE: border::Set = border::Set {
    top_left: "┬",     // T-connector joining from previous column
    top_right: "─",    // No corner, just continues the line
    bottom_left: "┴",  // T-connector joining from previous column
    bottom_right: "─", // No corner, just continues the line
    vertical_left: "│",
    vertical_right: " ", // No right border
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for the last (rightmost) column: T-connectors on left, rounded on right.
const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",     // T-connector joining from previous column
    top_right: "╮",    // Rounded corner on outer edge
    bottom_left: "┴",  // T-connector joining from previous column
    bottom_right: "╯", // Rounded corner on outer edge
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Height of each task card in rows.
const TASK_CARD_HEIGHT: u16 = 6;

/// Renders a single column to the buffer.
///
/// A column displays its header (name and task count) followed by a
/// vertical list of task cards. Empty columns show a "No tasks"
/// placeholder message.
///
/// # Arguments
///
/// * `column` - The column to render
/// * `is_focused` - Whether this column currently has focus
/// * `selected_idx` - Index of the selected task within this column, if any
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
/// * `position` - The column's position in the horizontal layout
/// * `prev_focused` - Whether the previous (left) column is focused, for
///   coloring shared borders
///
/// # Examples
///
/// ```
/// use quadro_protocol::{Column, Task, TaskStatus};
/// use quadro_tui::widgets::{ColumnPosition, render_column};
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let mut column = Column::new(TaskStatus::Pending);
/// column.push(Task::new("1", "Ana", "Acme", "Fix bug", "2024-05-01T09:00", TaskStatus::Pending));
///
/// let area = Rect::new(0, 0, 30, 20);
/// let mut buf = Buffer::empty(area);
///
/// render_column(&column, true, Some(0), area, &mut buf, ColumnPosition::First, false);
/// ```
pub fn render_column(
    column: &Column,
    is_focused: bool,
    selected_idx: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
    position: ColumnPosition,
    prev_focused: bool,
) {
    // Determine border style based on focus.
    // For the left border (shared with previous column), highlight if either is focused.
    let left_border_highlighted = is_focused || prev_focused;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Create the column header
    let title = format!("{} ({})", column.status.display_name(), column.len());
    let title_style = if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    // Collapse borders between adjacent columns to avoid double-borders:
    // only the last column renders its own right border.
    let borders = match position {
        ColumnPosition::First | ColumnPosition::Middle => {
            Borders::TOP | Borders::BOTTOM | Borders::LEFT
        }
        ColumnPosition::Last => Borders::ALL,
    };

    let border_set = match position {
        ColumnPosition::First => BORDER_SET_FIRST,
        ColumnPosition::Middle => BORDER_SET_MIDDLE,
        ColumnPosition::Last => BORDER_SET_LAST,
    };

    let block = Block::default()
        .title(Span::styled(title, title_style))
        .borders(borders)
        .border_set(border_set)
        .border_style(border_style);

    // Render the outer block
    let inner_area = block.inner(area);
    block.render(area, buf);

    // If the left border should be highlighted (prev column is focused) but this
    // one isn't, recolor the left border since the block was rendered with gray.
    if left_border_highlighted && !is_focused && area.width > 0 {
        let highlight_style = Style::default().fg(Color::Cyan);
        let x = area.x;
        for y in area.y..area.y.saturating_add(area.height) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(highlight_style);
            }
        }
    }

    // Handle empty columns
    if column.is_empty() {
        render_empty_placeholder(inner_area, buf);
        return;
    }

    // Calculate how many tasks can fit in the visible area
    let visible_tasks = (inner_area.height / TASK_CARD_HEIGHT).max(1) as usize;

    // Determine scroll offset to keep selected task visible
    let scroll_offset = calculate_scroll_offset(selected_idx, column.len(), visible_tasks);

    // Create constraints for visible task cards
    let task_count = column.len().min(visible_tasks);
    let mut constraints: Vec<Constraint> = (0..task_count)
        .map(|_| Constraint::Length(TASK_CARD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0)); // Fill remaining space

    let task_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner_area);

    // Render visible task cards
    for (i, task_area) in task_areas.iter().take(task_count).enumerate() {
        let task_idx = scroll_offset + i;
        if task_idx >= column.tasks.len() {
            break;
        }

        let task = &column.tasks[task_idx];
        let is_selected = is_focused && selected_idx == Some(task_idx);

        render_task_card(task, is_selected, *task_area, buf);
    }
}

/// Renders a placeholder message for empty columns.
fn render_empty_placeholder(area: Rect, buf: &mut Buffer) {
    let placeholder = Paragraph::new(Line::from(Span::styled(
        "No tasks",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    placeholder.render(area, buf);
}

/// Calculates the scroll offset to keep the selected task visible.
fn calculate_scroll_offset(
    selected_idx: Option<usize>,
    total_tasks: usize,
    visible_tasks: usize,
) -> usize {
    let Some(selected) = selected_idx else {
        return 0;
    };

    if total_tasks <= visible_tasks {
        return 0;
    }

    // Ensure selected task is visible
    let max_offset = total_tasks.saturating_sub(visible_tasks);

    if selected < visible_tasks / 2 {
        0
    } else {
        (selected.saturating_sub(visible_tasks / 2)).min(max_offset)
    }
}
