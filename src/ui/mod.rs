//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use components::{render_error_dialog, render_notice_dialog};
use ratatui::{layout::Rect, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_signup(frame, main_area, &app.state.form);
    layout::draw_status_bar(frame, status_area, app);

    // Modals on top; errors take precedence over notices
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    } else if let Some(notice) = &app.state.notice {
        render_notice_dialog(frame, notice);
    }
}

/// Form row under a mouse position, given the full terminal area
pub fn form_row_at(screen: Rect, column: u16, row: u16) -> Option<usize> {
    let (main_area, _) = layout::create_layout(screen);
    forms::row_at(main_area, column, row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MockSubmissionSink;
    use crate::state::{FieldName, BUTTON_ROW, SUBMIT_SUCCESS_NOTICE};
    use ratatui::{backend::TestBackend, Terminal};

    fn test_app() -> App {
        let mut sink = MockSubmissionSink::new();
        sink.expect_submit().returning(|_| Ok(()));
        App::new(Box::new(sink))
    }

    fn render(app: &App) -> String {
        render_sized(app, 80, 32)
    }

    fn render_sized(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_renders_every_field_label() {
        let screen = render(&test_app());
        assert!(screen.contains("Sign Up"));
        for field in [
            FieldName::FullName,
            FieldName::Email,
            FieldName::PhoneNumber,
            FieldName::Gender,
            FieldName::Class,
            FieldName::Section,
            FieldName::EmergencyContact,
        ] {
            assert!(screen.contains(field.label()), "missing {}", field.label());
        }
        assert!(screen.contains("Male"));
        assert!(screen.contains("Female"));
    }

    #[test]
    fn test_untouched_errors_are_not_rendered() {
        let screen = render(&test_app());
        assert!(!screen.contains("is required"));
    }

    #[test]
    fn test_rejected_submit_renders_errors() {
        let mut app = test_app();
        app.submit();
        let screen = render(&app);
        assert!(screen.contains("Full Name is required"));
        assert!(screen.contains("Gender is required"));
        assert!(screen.contains("Emergency Contact is required"));
    }

    #[test]
    fn test_format_error_rendered() {
        let mut app = test_app();
        app.state.form.on_field_change(FieldName::PhoneNumber, "12345");
        app.state.form.on_field_touched(FieldName::PhoneNumber);
        let screen = render(&app);
        assert!(screen.contains("Phone number must be exactly 10 digits"));
    }

    #[test]
    fn test_typed_value_rendered() {
        let mut app = test_app();
        app.state.form.on_field_change(FieldName::Email, "ada@example.com");
        let screen = render(&app);
        assert!(screen.contains("ada@example.com"));
    }

    #[test]
    fn test_values_visible_on_80x24() {
        let mut app = test_app();
        app.state.form.on_field_change(FieldName::Email, "ada@example.com");
        app.state.form.on_field_change(FieldName::Gender, "Female");
        app.state
            .form
            .on_field_change(FieldName::EmergencyContact, "9123456780");
        let screen = render_sized(&app, 80, 24);
        assert!(screen.contains("ada@example.com"));
        assert!(screen.contains("Male  Female  Other"));
        assert!(screen.contains("9123456780"));
        assert!(screen.contains("Sign Up"));
    }

    #[test]
    fn test_notice_dialog_rendered() {
        let mut app = test_app();
        app.state.notice = Some(SUBMIT_SUCCESS_NOTICE.to_string());
        let screen = render(&app);
        assert!(screen.contains(SUBMIT_SUCCESS_NOTICE));
        assert!(screen.contains("to dismiss"));
    }

    #[test]
    fn test_error_dialog_rendered() {
        let mut app = test_app();
        app.push_error("Could not save submission");
        let screen = render(&app);
        assert!(screen.contains("Error"));
        assert!(screen.contains("Could not save submission"));
    }

    #[test]
    fn test_status_message_rendered() {
        let mut app = test_app();
        app.state.status_message = Some("Check: Email".to_string());
        let screen = render(&app);
        assert!(screen.contains("Check: Email"));
    }

    #[test]
    fn test_form_row_at_finds_button() {
        let screen = Rect::new(0, 0, 80, 32);
        let hit = (0..screen.height)
            .flat_map(|y| (0..screen.width).map(move |x| (x, y)))
            .find(|&(x, y)| form_row_at(screen, x, y) == Some(BUTTON_ROW));
        assert!(hit.is_some());
        assert!(form_row_at(screen, 0, 31).is_none());
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
    }
}
