//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state to update the UI.
///
/// # Examples
///
/// ```
/// use quadro_protocol::Message;
///
/// let msg = Message::MoveRight;
/// assert!(msg.is_move());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move selection to the left column.
    NavigateLeft,
    /// Move selection to the right column.
    NavigateRight,
    /// Move selection up within the current column.
    NavigateUp,
    /// Move selection down within the current column.
    NavigateDown,
    /// Move the selected card one column to the right.
    MoveRight,
    /// Move the selected card one column to the left.
    MoveLeft,
    /// Open the new-task form.
    OpenForm,
    /// Close the new-task form, keeping typed input.
    CloseForm,
    /// Type a character into the focused form field.
    FormInput {
        /// The character typed.
        ch: char,
    },
    /// Delete the character before the cursor in the focused form field.
    FormBackspace,
    /// Move focus to the next form field.
    FormNextField,
    /// Move focus to the previous form field.
    FormPrevField,
    /// Submit the new-task form.
    FormSubmit,
    /// Reload the board from the task service.
    Refresh,
    /// Toggle help overlay.
    ToggleHelp,
    /// Contextual escape: close the active overlay or clear selection.
    Escape,
    /// Quit the application.
    Quit,
}

impl Message {
    /// Returns `true` if this message is a selection-navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_protocol::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(!Message::MoveRight.is_navigation());
    /// ```
    #[must_use]
    pub const fn is_navigation(self) -> bool {
        matches!(
            self,
            Self::NavigateLeft | Self::NavigateRight | Self::NavigateUp | Self::NavigateDown
        )
    }

    /// Returns `true` if this message moves a card between columns.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_protocol::Message;
    ///
    /// assert!(Message::MoveLeft.is_move());
    /// assert!(!Message::NavigateLeft.is_move());
    /// ```
    #[must_use]
    pub const fn is_move(self) -> bool {
        matches!(self, Self::MoveRight | Self::MoveLeft)
    }

    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Escape.is_terminating());
    /// ```
    #[must_use]
    pub const fn is_terminating(self) -> bool {
        matches!(self, Self::Quit)
    }
}
