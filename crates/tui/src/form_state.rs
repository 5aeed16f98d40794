//! New-task form state management.
//!
//! This module provides state management for the task creation form:
//! field focus, text editing, required-field validation, and conversion
//! into the creation payload.

use quadro_protocol::NewTask;

/// The fields of the new-task form, in focus order.
///
/// Labels are the service's own field names, matching what the board's
/// users already know from the task records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Person responsible for the task.
    #[default]
    Assignee,
    /// Client the task is for.
    Client,
    /// Free-text description.
    Description,
    /// Due date (`YYYY-MM-DD`).
    Date,
    /// Due time (`HH:MM`).
    Time,
}

impl FormField {
    /// Returns all fields in focus order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Assignee,
            Self::Client,
            Self::Description,
            Self::Date,
            Self::Time,
        ]
    }

    /// Returns the display label for this field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Assignee => "Responsável",
            Self::Client => "Cliente",
            Self::Description => "Descrição",
            Self::Date => "Data",
            Self::Time => "Hora",
        }
    }

    /// Returns a format hint shown when the field is empty.
    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Self::Assignee | Self::Client | Self::Description => "",
            Self::Date => "YYYY-MM-DD",
            Self::Time => "HH:MM",
        }
    }

    /// Returns `true` if this field must be filled before submitting.
    ///
    /// Matches the `required` attributes of the original form: only the
    /// description is optional free text.
    #[must_use]
    pub const fn required(self) -> bool {
        !matches!(self, Self::Description)
    }

    /// Returns the next field in focus order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Assignee => Self::Client,
            Self::Client => Self::Description,
            Self::Description => Self::Date,
            Self::Date => Self::Time,
            Self::Time => Self::Assignee,
        }
    }

    /// Returns the previous field in focus order, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Assignee => Self::Time,
            Self::Client => Self::Assignee,
            Self::Description => Self::Client,
            Self::Date => Self::Description,
            Self::Time => Self::Date,
        }
    }
}

/// State of the new-task form.
///
/// Typed input survives closing the form; only a successful creation
/// clears it (the original client calls `form.reset()` exclusively on
/// the success path).
///
/// # Examples
///
/// ```
/// use quadro_tui::form_state::{FormField, FormState};
///
/// let mut form = FormState::new();
/// form.insert_char('A');
/// assert_eq!(form.value(FormField::Assignee), "A");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormState {
    /// Person responsible for the task.
    pub assignee: String,
    /// Client the task is for.
    pub client: String,
    /// Free-text description.
    pub description: String,
    /// Due date input.
    pub date: String,
    /// Due time input.
    pub time: String,
    /// The field that currently receives keystrokes.
    pub focused: FormField,
}

impl FormState {
    /// Creates an empty form focused on the first field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of a field.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Assignee => &self.assignee,
            FormField::Client => &self.client,
            FormField::Description => &self.description,
            FormField::Date => &self.date,
            FormField::Time => &self.time,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Assignee => &mut self.assignee,
            FormField::Client => &mut self.client,
            FormField::Description => &mut self.description,
            FormField::Date => &mut self.date,
            FormField::Time => &mut self.time,
        }
    }

    /// Appends a character to the focused field.
    pub fn insert_char(&mut self, ch: char) {
        let field = self.focused;
        self.value_mut(field).push(ch);
    }

    /// Deletes the last character of the focused field.
    pub fn backspace(&mut self) {
        let field = self.focused;
        self.value_mut(field).pop();
    }

    /// Moves focus to the next field.
    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    /// Moves focus to the previous field.
    pub fn focus_previous(&mut self) {
        self.focused = self.focused.previous();
    }

    /// Returns the required fields that are still empty.
    ///
    /// Whitespace-only input counts as empty, mirroring what a user
    /// would consider "not filled in".
    #[must_use]
    pub fn missing_required(&self) -> Vec<FormField> {
        FormField::all()
            .into_iter()
            .filter(|field| field.required() && self.value(*field).trim().is_empty())
            .collect()
    }

    /// Returns `true` if the form can be submitted.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.missing_required().is_empty()
    }

    /// Builds the creation payload from the current input.
    ///
    /// The date and time inputs are combined into the single due
    /// timestamp string here, on the way out.
    #[must_use]
    pub fn to_new_task(&self) -> NewTask {
        NewTask::new(
            self.assignee.trim(),
            self.client.trim(),
            self.description.trim(),
            self.date.trim(),
            self.time.trim(),
        )
    }

    /// Clears all fields and resets focus to the first field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FormState {
        FormState {
            assignee: "Ana".to_string(),
            client: "Acme".to_string(),
            description: "Fix bug".to_string(),
            date: "2024-05-01".to_string(),
            time: "09:00".to_string(),
            focused: FormField::Assignee,
        }
    }

    #[test]
    fn focus_order_wraps_in_both_directions() {
        let mut field = FormField::Assignee;
        for _ in 0..FormField::all().len() {
            field = field.next();
        }
        assert_eq!(field, FormField::Assignee);

        for _ in 0..FormField::all().len() {
            field = field.previous();
        }
        assert_eq!(field, FormField::Assignee);
    }

    #[test]
    fn description_is_the_only_optional_field() {
        for field in FormField::all() {
            assert_eq!(field.required(), field != FormField::Description);
        }
    }

    #[test]
    fn insert_and_backspace_edit_the_focused_field() {
        let mut form = FormState::new();

        form.insert_char('A');
        form.insert_char('n');
        form.insert_char('a');
        assert_eq!(form.assignee, "Ana");

        form.backspace();
        assert_eq!(form.assignee, "An");

        form.focus_next();
        form.insert_char('X');
        assert_eq!(form.client, "X");
        assert_eq!(form.assignee, "An");
    }

    #[test]
    fn backspace_on_empty_field_is_a_noop() {
        let mut form = FormState::new();
        form.backspace();
        assert_eq!(form.assignee, "");
    }

    #[test]
    fn empty_form_is_invalid() {
        let form = FormState::new();
        assert!(!form.is_valid());
        assert_eq!(form.missing_required().len(), 4);
    }

    #[test]
    fn description_may_stay_empty() {
        let mut form = filled_form();
        form.description.clear();
        assert!(form.is_valid());
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut form = filled_form();
        form.client = "   ".to_string();
        assert!(!form.is_valid());
        assert_eq!(form.missing_required(), vec![FormField::Client]);
    }

    #[test]
    fn to_new_task_combines_date_and_time() {
        let form = filled_form();
        let payload = form.to_new_task();

        assert_eq!(payload.assignee, "Ana");
        assert_eq!(payload.client, "Acme");
        assert_eq!(payload.description, "Fix bug");
        assert_eq!(payload.due, "2024-05-01T09:00");
    }

    #[test]
    fn to_new_task_trims_input() {
        let mut form = filled_form();
        form.assignee = "  Ana  ".to_string();
        assert_eq!(form.to_new_task().assignee, "Ana");
    }

    #[test]
    fn clear_resets_fields_and_focus() {
        let mut form = filled_form();
        form.focused = FormField::Time;

        form.clear();
        assert_eq!(form.assignee, "");
        assert_eq!(form.time, "");
        assert_eq!(form.focused, FormField::Assignee);
    }
}
