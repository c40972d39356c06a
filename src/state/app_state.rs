//! Top-level application state

use super::forms::SignUpForm;
use std::collections::VecDeque;

/// Notice shown after the sink accepts a submission
pub const SUBMIT_SUCCESS_NOTICE: &str = "Form submitted successfully!";

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Form
    pub form: SignUpForm,

    // Feedback
    /// Modal notice (e.g. successful submission), dismissed with Enter/Esc
    pub notice: Option<String>,
    /// One-line message in the status bar, cleared on the next key press
    pub status_message: Option<String>,
    error_queue: VecDeque<String>,
}

impl AppState {
    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// Error currently shown, oldest first
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
