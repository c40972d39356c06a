//! Application state and core logic

use crate::platform::has_submit_modifier;
use crate::sink::SubmissionSink;
use crate::state::{AppState, FieldName, Form, SubmitOutcome, BUTTON_ROW, SUBMIT_SUCCESS_NOTICE};
use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Receives validated submissions
    sink: Box<dyn SubmissionSink>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for mouse hit testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance
    pub fn new(sink: Box<dyn SubmissionSink>) -> Self {
        Self {
            state: AppState::default(),
            sink,
            quit: false,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Run the submission gate and turn its outcome into user feedback
    pub fn submit(&mut self) {
        match self.state.form.submit(self.sink.as_mut()) {
            SubmitOutcome::Submitted => {
                self.state.notice = Some(SUBMIT_SUCCESS_NOTICE.to_string());
            }
            SubmitOutcome::Rejected { invalid } => {
                let labels: Vec<&str> = invalid.iter().map(|f| f.label()).collect();
                self.state.status_message = Some(format!("Check: {}", labels.join(", ")));
            }
            SubmitOutcome::SinkFailed(err) => {
                self.push_error(format!("Could not save submission: {err:#}"));
            }
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Success notice (modal)
        if self.state.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
            }
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') if has_submit_modifier(&key) => self.submit(),
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Enter if self.state.form.is_button_row_active() => self.submit(),
            KeyCode::Enter => self.state.form.next_field(),
            _ => self.handle_field_key(key),
        }
        Ok(())
    }

    /// Editing keys for the focused field
    fn handle_field_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        let Some(field) = form.active_field_name() else {
            return;
        };

        if field.is_select() {
            match key.code {
                KeyCode::Left => form.cycle_gender(false),
                KeyCode::Right | KeyCode::Char(' ') => form.cycle_gender(true),
                KeyCode::Backspace | KeyCode::Delete => form.backspace(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                form.input_char(c)
            }
            KeyCode::Backspace => form.backspace(),
            _ => {}
        }
    }

    /// Handle mouse events: click focuses a row, clicking the button submits
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.state.has_errors() || self.state.notice.is_some() {
            return Ok(());
        }

        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let (height, width) = self.terminal_size.unwrap_or((24, 80));
            let screen = Rect::new(0, 0, width, height);
            if let Some(row) = crate::ui::form_row_at(screen, mouse.column, mouse.row) {
                self.state.form.set_active_field(row);
                if row == BUTTON_ROW {
                    self.submit();
                } else if let Some(field) = FieldName::from_index(row) {
                    tracing::debug!(field = field.key(), "focused by click");
                }
            }
        }
        Ok(())
    }
}
