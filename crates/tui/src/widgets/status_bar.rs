//! Status bar rendering widget.
//!
//! This module provides the one-line footer showing keybinding hints, a
//! transient notice, and an in-flight request indicator.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Renders the status bar.
///
/// With no notice set, the bar shows the standard keybinding hints. A
/// notice takes their place until the next one replaces it. While
/// requests are in flight a spinner-like marker is appended so slow
/// responses are visible without blocking anything.
///
/// # Arguments
///
/// * `notice` - Transient message to display instead of the hints
/// * `pending_requests` - Number of network requests in flight
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
///
/// # Examples
///
/// ```
/// use quadro_tui::widgets::render_status_bar;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let area = Rect::new(0, 0, 80, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(None, 0, area, &mut buf);
/// ```
pub fn render_status_bar(
    notice: Option<&str>,
    pending_requests: usize,
    area: Rect,
    buf: &mut Buffer,
) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::DarkGray);
    let notice_style = Style::default().fg(Color::Cyan);

    let mut spans = match notice {
        Some(message) => vec![Span::styled(message.to_owned(), notice_style)],
        None => vec![
            Span::styled("n", key_style),
            Span::styled(" New  ", text_style),
            Span::styled("> <", key_style),
            Span::styled(" Move  ", text_style),
            Span::styled("r", key_style),
            Span::styled(" Reload  ", text_style),
            Span::styled("?", key_style),
            Span::styled(" Help  ", text_style),
            Span::styled("Ctrl+C", key_style),
            Span::styled(" Quit", text_style),
        ],
    };

    if pending_requests > 0 {
        spans.push(Span::styled("  ⟳", Style::default().fg(Color::Magenta)));
    }

    let status_bar = Paragraph::new(Line::from(spans));
    status_bar.render(area, buf);
}
