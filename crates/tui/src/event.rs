//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use quadro_protocol::Message;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a terminal key event to an application message.
///
/// The mapping depends on whether the new-task form is open: with the
/// form open, printable characters are text input rather than shortcuts.
///
/// # Key Bindings (Board Mode)
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Escape (close overlay or clear selection) |
/// | `Left` / `Right` | Navigate between columns |
/// | `Up` / `Down` | Navigate within a column |
/// | `>` | Move selected card one column right |
/// | `<` | Move selected card one column left |
/// | `n` | Open the new-task form |
/// | `r` | Refresh the board |
/// | `?` | Toggle help |
///
/// # Key Bindings (Form Mode)
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Close the form (input kept) |
/// | `Enter` | Submit |
/// | `Tab` / `Down` | Next field |
/// | `Shift+Tab` / `Up` | Previous field |
/// | `Backspace` | Delete last character |
/// | Any char | Input |
#[must_use]
pub fn key_to_message(key: KeyEvent, form_open: bool) -> Option<Message> {
    // Check for Ctrl+C first (always works)
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    if form_open {
        // In form mode, capture text input
        return match key.code {
            KeyCode::Enter => Some(Message::FormSubmit),
            KeyCode::Esc => Some(Message::CloseForm),
            KeyCode::Backspace => Some(Message::FormBackspace),
            KeyCode::Tab | KeyCode::Down => Some(Message::FormNextField),
            KeyCode::BackTab | KeyCode::Up => Some(Message::FormPrevField),
            KeyCode::Char(ch) => Some(Message::FormInput { ch }),
            _ => None,
        };
    }

    // Board mode
    match key.code {
        // Escape (contextual: close overlay or clear selection)
        KeyCode::Esc => Some(Message::Escape),

        // Navigation (arrow keys only)
        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        // Card movement between columns
        KeyCode::Char('>') => Some(Message::MoveRight),
        KeyCode::Char('<') => Some(Message::MoveLeft),

        // Other actions
        KeyCode::Char('n') => Some(Message::OpenForm),
        KeyCode::Char('r') => Some(Message::Refresh),
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}
