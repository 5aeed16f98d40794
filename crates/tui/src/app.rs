//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle: event handling, state updates, network effects,
//! and rendering.
//!
//! Network calls never run inline with input handling. [`App::update`]
//! returns an [`Effect`] describing what should happen; the run loop
//! executes effects on spawned tasks which report back through a channel
//! as [`NetOutcome`]s. Input stays responsive while requests are in
//! flight, and when two reloads overlap the last completion wins.

use std::time::{Duration, Instant};

use crossterm::event::Event;
use quadro_api::ApiClient;
use quadro_protocol::{Board, Message, NewTask, Task, TaskId, TaskStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tokio::sync::mpsc;
use tracing::warn;

use crate::{
    AppState, Focus,
    event::{key_to_message, poll_event},
    form_state::FormState,
    terminal::AppTerminal,
    widgets::{render_board, render_form, render_help_overlay, render_status_bar},
};

/// A network operation requested by the UI.
///
/// Effects are returned by [`App::update`] and [`App::apply_outcome`]
/// instead of being executed inline, which keeps the whole message flow
/// testable without a server.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Reload the full task collection.
    Refresh,
    /// Create a task from the given payload.
    Create(NewTask),
    /// Update one task's status.
    UpdateStatus(TaskId, TaskStatus),
}

/// Which operation a [`NetOutcome::Failed`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetOp {
    /// Board load (`GET`).
    Load,
    /// Task creation (`POST`).
    Create,
    /// Status update (`PUT`).
    Update,
}

impl NetOp {
    /// Returns the status-bar notice shown when this operation fails.
    #[must_use]
    const fn failure_notice(self) -> &'static str {
        match self {
            Self::Load => "Couldn't load the board",
            Self::Create => "Couldn't create the task",
            Self::Update => "Couldn't move the card",
        }
    }
}

/// The completion of a spawned network operation.
#[derive(Debug, Clone, PartialEq)]
pub enum NetOutcome {
    /// The task collection was fetched.
    Loaded(Vec<Task>),
    /// A task was created; the record is present when the body parsed.
    Created(Option<Task>),
    /// A task's status was updated.
    Updated(Option<Task>),
    /// The operation failed; the failure is logged and surfaced as a
    /// notice, never an error state.
    Failed(NetOp, String),
}

/// The main application struct.
///
/// Manages the application state and provides the main event loop.
#[derive(Debug)]
pub struct App {
    state: AppState,
    form: FormState,
    api: ApiClient,
    auto_refresh: Option<Duration>,
    outcomes_tx: mpsc::UnboundedSender<NetOutcome>,
    outcomes_rx: mpsc::UnboundedReceiver<NetOutcome>,
    should_quit: bool,
}

impl App {
    /// Creates a new application talking to the given task service.
    ///
    /// # Arguments
    ///
    /// * `api` - Client for the task service.
    /// * `auto_refresh` - Optional periodic reload interval.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_api::ApiClient;
    /// use quadro_tui::App;
    ///
    /// let app = App::new(ApiClient::new("http://localhost:5000"), None);
    /// ```
    #[must_use]
    pub fn new(api: ApiClient, auto_refresh: Option<Duration>) -> Self {
        let (outcomes_tx, outcomes_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(Board::new()),
            form: FormState::new(),
            api,
            auto_refresh,
            outcomes_tx,
            outcomes_rx,
            should_quit: false,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns a reference to the new-task form state.
    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Updates the application state based on a message.
    ///
    /// Returns the network effect the message requires, if any. The
    /// caller (the run loop) is responsible for executing it.
    ///
    /// When the help overlay is visible, most messages dismiss it instead
    /// of performing their normal action.
    pub fn update(&mut self, msg: Message) -> Option<Effect> {
        // When help is visible, most keys should dismiss it
        if self.state.help_visible {
            match msg {
                Message::Quit => {
                    self.should_quit = true;
                }
                Message::ToggleHelp | Message::Escape => {
                    self.state.toggle_help();
                }
                // Any other key dismisses help
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return None;
        }

        if self.state.focus == Focus::Form {
            return self.update_form(msg);
        }

        match msg {
            Message::Quit => {
                self.should_quit = true;
                None
            }
            Message::Escape => {
                self.state.clear_selection();
                None
            }
            Message::NavigateLeft => {
                self.state.navigate_left();
                None
            }
            Message::NavigateRight => {
                self.state.navigate_right();
                None
            }
            Message::NavigateUp => {
                self.state.navigate_up();
                None
            }
            Message::NavigateDown => {
                self.state.navigate_down();
                None
            }
            Message::MoveRight | Message::MoveLeft => self.move_selected(msg),
            Message::OpenForm => {
                self.state.focus = Focus::Form;
                self.state.clear_notice();
                None
            }
            Message::Refresh => Some(Effect::Refresh),
            Message::ToggleHelp => {
                self.state.toggle_help();
                None
            }
            // Form messages are meaningless without the form open
            _ => None,
        }
    }

    /// Handles a message while the new-task form has focus.
    fn update_form(&mut self, msg: Message) -> Option<Effect> {
        match msg {
            Message::Quit => {
                self.should_quit = true;
                None
            }
            // Closing keeps typed input; only a successful creation
            // clears the form.
            Message::CloseForm | Message::Escape => {
                self.state.focus = Focus::Board;
                None
            }
            Message::FormInput { ch } => {
                self.form.insert_char(ch);
                None
            }
            Message::FormBackspace => {
                self.form.backspace();
                None
            }
            Message::FormNextField => {
                self.form.focus_next();
                None
            }
            Message::FormPrevField => {
                self.form.focus_previous();
                None
            }
            Message::FormSubmit => {
                if self.form.is_valid() {
                    Some(Effect::Create(self.form.to_new_task()))
                } else {
                    let labels: Vec<&str> = self
                        .form
                        .missing_required()
                        .into_iter()
                        .map(|field| field.label())
                        .collect();
                    self.state
                        .set_notice(format!("Required: {}", labels.join(", ")));
                    None
                }
            }
            _ => None,
        }
    }

    /// Computes the status update for moving the selected card.
    ///
    /// Movement targets the neighboring column; at the board edge there
    /// is no target and nothing is sent. No same-status guard exists
    /// anywhere on this path: whatever target is produced is sent as-is.
    fn move_selected(&mut self, msg: Message) -> Option<Effect> {
        let current = self.state.selected_status();
        let target = match msg {
            Message::MoveRight => current.next(),
            Message::MoveLeft => current.previous(),
            _ => return None,
        };

        let selected_id = self.state.selected_task().map(|task| task.id.clone());
        let Some(id) = selected_id else {
            self.state.set_notice("No card selected");
            return None;
        };

        // At the edge of the board there is nowhere to move to
        let status = target?;
        Some(Effect::UpdateStatus(id, status))
    }

    /// Applies the completion of a network operation.
    ///
    /// Returns a follow-up effect, if any: every successful mutation
    /// triggers a full board reload rather than an in-place patch.
    /// Failures are logged, surfaced as a status-bar notice, and
    /// otherwise swallowed; the board keeps its previous state.
    pub fn apply_outcome(&mut self, outcome: NetOutcome) -> Option<Effect> {
        self.state.pending_requests = self.state.pending_requests.saturating_sub(1);

        match outcome {
            NetOutcome::Loaded(tasks) => {
                self.state.replace_board(Board::from_tasks(tasks));
                None
            }
            NetOutcome::Created(_) => {
                // Success path of the creation flow: hide the modal,
                // clear the fields, reload the board.
                self.form.clear();
                self.state.focus = Focus::Board;
                self.state.set_notice("Task created");
                Some(Effect::Refresh)
            }
            NetOutcome::Updated(_) => Some(Effect::Refresh),
            NetOutcome::Failed(op, error) => {
                warn!(error = %error, op = ?op, "request failed");
                self.state.set_notice(op.failure_notice());
                None
            }
        }
    }

    /// Executes a network effect on a spawned task.
    ///
    /// The completion arrives through the outcome channel and is applied
    /// by the run loop; nothing blocks here.
    pub fn dispatch(&mut self, effect: Effect) {
        self.state.pending_requests += 1;
        let api = self.api.clone();
        let tx = self.outcomes_tx.clone();

        tokio::spawn(async move {
            let outcome = match effect {
                Effect::Refresh => match api.list_tasks().await {
                    Ok(tasks) => NetOutcome::Loaded(tasks),
                    Err(e) => NetOutcome::Failed(NetOp::Load, e.to_string()),
                },
                Effect::Create(payload) => match api.create_task(&payload).await {
                    Ok(task) => NetOutcome::Created(task),
                    Err(e) => NetOutcome::Failed(NetOp::Create, e.to_string()),
                },
                Effect::UpdateStatus(id, status) => match api.update_status(&id, status).await {
                    Ok(task) => NetOutcome::Updated(task),
                    Err(e) => NetOutcome::Failed(NetOp::Update, e.to_string()),
                },
            };

            // The receiver only drops when the app is shutting down
            let _ = tx.send(outcome);
        });
    }

    /// Renders the application UI to the given frame.
    pub fn view(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        self.render_header(frame, chunks[0]);
        self.render_board_area(frame, chunks[1]);
        self.render_status_area(frame, chunks[2]);

        // Render overlays on top if visible
        if self.state.form_visible() {
            let buf = frame.buffer_mut();
            render_form(&self.form, area, buf);
        }
        if self.state.help_visible {
            let buf = frame.buffer_mut();
            render_help_overlay(area, buf);
        }
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application. It
    /// fires the initial board load, then polls for events, drains
    /// completed network outcomes, and renders the UI.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use quadro_api::ApiClient;
    /// use quadro_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(ApiClient::new("http://localhost:5000"), None);
    ///     let result = app.run(&mut terminal).await;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     result
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        // Initial board load, as the original client does on page load
        self.dispatch(Effect::Refresh);
        let mut last_auto_refresh = Instant::now();

        loop {
            // Render
            terminal.draw(|frame| self.view(frame))?;

            // Poll for events
            if let Some(Event::Key(key)) = poll_event()?
                && let Some(msg) = key_to_message(key, self.state.form_visible())
                && let Some(effect) = self.update(msg)
            {
                self.dispatch(effect);
            }

            // Drain completed network operations
            while let Ok(outcome) = self.outcomes_rx.try_recv() {
                if let Some(effect) = self.apply_outcome(outcome) {
                    self.dispatch(effect);
                }
            }

            // Optional periodic reload
            if let Some(interval) = self.auto_refresh
                && last_auto_refresh.elapsed() >= interval
            {
                self.dispatch(Effect::Refresh);
                last_auto_refresh = Instant::now();
            }

            // Check for quit
            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Renders the header bar with title and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Split inner area: title left, help cue right
        let [title_area, help_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(17), // "Press ? for help" = 16 chars + padding
        ])
        .areas(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "quadro",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled("Service Board", Style::default().fg(Color::White)),
        ]));
        frame.render_widget(title, title_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }

    /// Renders the board with its three columns.
    fn render_board_area(&self, frame: &mut Frame, area: Rect) {
        let buf = frame.buffer_mut();
        render_board(
            &self.state.board,
            self.state.selected_column,
            self.state.selected_task,
            area,
            buf,
        );
    }

    /// Renders the footer status bar.
    fn render_status_area(&self, frame: &mut Frame, area: Rect) {
        let buf = frame.buffer_mut();
        render_status_bar(
            self.state.notice.as_deref(),
            self.state.pending_requests,
            area,
            buf,
        );
    }
}
