//! Task card rendering widget.
//!
//! This module provides functions for rendering individual task cards with
//! color coding based on their status.

use quadro_protocol::{Task, TaskStatus};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Returns the color associated with a task status.
///
/// This provides consistent color coding across the application:
///
/// - `Pending`: Yellow - waiting to be started
/// - `InProgress`: Blue - actively being worked on
/// - `Done`: Green - completed
///
/// # Examples
///
/// ```
/// use quadro_protocol::TaskStatus;
/// use quadro_tui::widgets::status_color;
/// use ratatui::style::Color;
///
/// assert_eq!(status_color(TaskStatus::Pending), Color::Yellow);
/// assert_eq!(status_color(TaskStatus::InProgress), Color::Blue);
/// assert_eq!(status_color(TaskStatus::Done), Color::Green);
/// ```
#[must_use]
pub const fn status_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Pending => Color::Yellow,
        TaskStatus::InProgress => Color::Blue,
        TaskStatus::Done => Color::Green,
    }
}

/// Returns a brighter version of the status color for selected cards.
#[must_use]
const fn status_color_bright(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Pending => Color::LightYellow,
        TaskStatus::InProgress => Color::LightBlue,
        TaskStatus::Done => Color::LightGreen,
    }
}

/// Renders a task card to the buffer.
///
/// The card shows the same four lines the original board card did: the
/// client name in bold, the assignee, the description, and the due
/// timestamp in local display format. The border color reflects the
/// task's status, with brighter colors for the selected card.
///
/// # Layout
///
/// ```text
/// +------------------------+
/// | Acme                   |
/// | Responsável: Ana       |
/// | Fix bug                |
/// | Entrega: 01/05/2024 09:00
/// +------------------------+
/// ```
///
/// # Examples
///
/// ```
/// use quadro_protocol::{Task, TaskStatus};
/// use quadro_tui::widgets::render_task_card;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let task = Task::new("1", "Ana", "Acme", "Fix bug", "2024-05-01T09:00", TaskStatus::Pending);
/// let area = Rect::new(0, 0, 30, 6);
/// let mut buf = Buffer::empty(area);
///
/// render_task_card(&task, false, area, &mut buf);
/// ```
pub fn render_task_card(task: &Task, is_selected: bool, area: Rect, buf: &mut Buffer) {
    // Skip rendering if area is too small
    if area.width < 4 || area.height < 3 {
        return;
    }

    let base_color = status_color(task.status);
    let (border_color, title_style, text_style) = if is_selected {
        (
            status_color_bright(task.status),
            Style::default()
                .fg(status_color_bright(task.status))
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White),
        )
    } else {
        (
            base_color,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Gray),
        )
    };

    let label_style = Style::default().fg(Color::DarkGray);

    // Truncate free-text lines to fit available space
    let inner_width = area.width.saturating_sub(2) as usize;
    let description = truncate_string(&task.description, inner_width);
    let assignee = truncate_string(&task.assignee, inner_width.saturating_sub(13));

    let content = vec![
        Line::from(Span::styled(&task.client, title_style)),
        Line::from(vec![
            Span::styled("Responsável: ", label_style),
            Span::styled(assignee, text_style),
        ]),
        Line::from(Span::styled(description, text_style)),
        Line::from(vec![
            Span::styled("Entrega: ", label_style),
            Span::styled(task.due_display(), text_style),
        ]),
    ];

    let card = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );

    card.render(area, buf);
}

/// Truncates a string to fit within a given width, adding ellipsis if needed.
fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}
