//! New-task form widget.
//!
//! This module provides the popup form overlay used to create tasks.
//! It is the terminal counterpart of the original board's modal dialog.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::form_state::{FormField, FormState};

/// The width of the form panel.
const FORM_WIDTH: u16 = 52;

/// The height of the form panel.
const FORM_HEIGHT: u16 = 15;

/// Renders the new-task form overlay.
///
/// The panel is centered on screen and displays the five input fields
/// with the focused field highlighted and an edit cursor appended.
///
/// # Arguments
///
/// * `form` - The form state
/// * `area` - The full terminal area (panel will be centered within it)
/// * `buf` - The buffer to render into
///
/// # Examples
///
/// ```
/// use quadro_tui::form_state::FormState;
/// use quadro_tui::widgets::render_form;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let form = FormState::new();
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_form(&form, area, &mut buf);
/// ```
pub fn render_form(form: &FormState, area: Rect, buf: &mut Buffer) {
    // Calculate centered position
    let popup_area = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);

    // Clear the area behind the popup
    Clear.render(popup_area, buf);

    // Create the main block
    let block = Block::default()
        .title(Span::styled(
            " Nova Tarefa ",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    block.render(popup_area, buf);

    // One two-row slot per field, then the help bar at the bottom
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Assignee
            Constraint::Length(2), // Client
            Constraint::Length(2), // Description
            Constraint::Length(2), // Date
            Constraint::Length(2), // Time
            Constraint::Min(0),    // Spacer
            Constraint::Length(1), // Help bar
        ])
        .split(inner);

    for (i, field) in FormField::all().into_iter().enumerate() {
        render_field(form, field, chunks[i], buf);
    }

    render_form_help(chunks[6], buf);
}

/// Renders a single labelled field row.
fn render_field(form: &FormState, field: FormField, area: Rect, buf: &mut Buffer) {
    let is_focused = form.focused == field;
    let value = form.value(field);

    let value_style = if is_focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    // Required fields carry the same marker the original form used
    let marker = if field.required() { "*" } else { "" };
    let prefix = if is_focused { "> " } else { "  " };

    let value_display = if is_focused {
        format!("{value}_")
    } else if value.is_empty() && !field.hint().is_empty() {
        format!("({})", field.hint())
    } else {
        value.to_string()
    };

    let line = Paragraph::new(Line::from(vec![
        Span::styled(prefix, value_style),
        Span::styled(
            format!("{}{marker}: ", field.label()),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(value_display, value_style),
    ]));
    line.render(area, buf);
}

/// Renders the help bar at the bottom of the form panel.
fn render_form_help(area: Rect, buf: &mut Buffer) {
    let help = Paragraph::new(Line::from(Span::styled(
        "Tab: next field | Enter: create | Esc: close",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);

    help.render(area, buf);
}

/// Creates a centered rectangle within a given area.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn render_form_shows_all_field_labels() {
        let form = FormState::new();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        render_form(&form, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Nova Tarefa"));
        assert!(content.contains("Responsável*:"));
        assert!(content.contains("Cliente*:"));
        assert!(content.contains("Descrição:"));
        assert!(content.contains("Data*:"));
        assert!(content.contains("Hora*:"));
    }

    #[test]
    fn render_form_shows_typed_values_and_cursor() {
        let mut form = FormState::new();
        form.insert_char('A');
        form.insert_char('n');
        form.insert_char('a');

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        render_form(&form, area, &mut buf);

        let content = buffer_to_string(&buf);
        // Focused field shows the value with an edit cursor
        assert!(content.contains("Ana_"));
    }

    #[test]
    fn render_form_shows_format_hints_for_empty_fields() {
        let form = FormState::new();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        render_form(&form, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("(YYYY-MM-DD)"));
        assert!(content.contains("(HH:MM)"));
    }

    #[test]
    fn render_form_shows_help_bar() {
        let form = FormState::new();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        render_form(&form, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Enter: create"));
    }

    #[test]
    fn render_form_handles_small_area() {
        let form = FormState::new();
        let area = Rect::new(0, 0, 20, 8);
        let mut buf = Buffer::empty(area);

        // Should not panic
        render_form(&form, area, &mut buf);
    }

    #[test]
    fn centered_rect_positions_correctly() {
        let area = Rect::new(0, 0, 80, 24);
        let centered = centered_rect(40, 12, area);

        assert_eq!(centered.x, 20); // (80 - 40) / 2
        assert_eq!(centered.y, 6); // (24 - 12) / 2
        assert_eq!(centered.width, 40);
        assert_eq!(centered.height, 12);
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        let centered = centered_rect(100, 50, area);

        assert_eq!(centered.width, 30);
        assert_eq!(centered.height, 10);
    }
}
