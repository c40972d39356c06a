//! Sign-up form rendering

use super::field_renderer::{draw_select_field, draw_text_field};
use crate::state::{FieldName, SignUpForm, BUTTON_ROW};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
    Frame,
};
use strum::IntoEnumIterator;

/// Outer width of the form panel
const FORM_WIDTH: u16 = 64;
/// Outer height: borders, six field lines, button. Fits an 80x24 terminal
/// with the status bar.
const FORM_HEIGHT: u16 = 2 + 6 * FIELD_HEIGHT + BUTTON_HEIGHT;
const FIELD_HEIGHT: u16 = 3;

/// Number of focusable rows (seven fields plus the button)
pub const ROW_COUNT: usize = BUTTON_ROW + 1;

const SUBTITLE: &str = " Fill in the details below to create your account. ";

/// Centered panel that holds the form
fn form_panel(area: Rect) -> Rect {
    let width = area.width.min(FORM_WIDTH);
    let height = area.height.min(FORM_HEIGHT);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Screen area of every focusable row, indexed like `SignUpForm::active_row`.
/// Class and Section share one line.
pub fn row_areas(area: Rect) -> [Rect; ROW_COUNT] {
    let inner = Block::default()
        .borders(Borders::ALL)
        .inner(form_panel(area));

    let lines = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // Full Name
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(FIELD_HEIGHT),  // Phone Number
            Constraint::Length(FIELD_HEIGHT),  // Gender
            Constraint::Length(FIELD_HEIGHT),  // Class | Section
            Constraint::Length(FIELD_HEIGHT),  // Emergency Contact
            Constraint::Length(BUTTON_HEIGHT), // Sign Up
        ])
        .horizontal_margin(1)
        .split(inner);

    let class_section = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .spacing(1)
        .split(lines[4]);

    [
        lines[0],
        lines[1],
        lines[2],
        lines[3],
        class_section[0],
        class_section[1],
        lines[5],
        lines[6],
    ]
}

/// Row under a terminal cell, if any
pub fn row_at(area: Rect, column: u16, row: u16) -> Option<usize> {
    let position = Position::new(column, row);
    row_areas(area)
        .iter()
        .position(|rect| rect.contains(position))
}

/// Draw the sign-up form
pub fn draw(frame: &mut Frame, area: Rect, form: &SignUpForm) {
    let panel = form_panel(area);
    let block = Block::default()
        .title(Line::from(Span::styled(
            " Sign Up ",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )))
        .title(
            Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::DarkGray)))
                .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    frame.render_widget(block, panel);

    let rows = row_areas(area);

    for field in FieldName::iter() {
        let field_area = &rows[field.index()];
        let is_active = form.active_row == field.index();
        let error = form.visible_error(field);
        if field.is_select() {
            draw_select_field(
                frame,
                *field_area,
                field.label(),
                form.values().gender(),
                is_active,
                error,
            );
        } else {
            draw_text_field(
                frame,
                *field_area,
                field.label(),
                form.values().get(field),
                is_active,
                error,
            );
        }
    }

    render_button(
        frame,
        rows[BUTTON_ROW],
        "Sign Up",
        form.is_button_row_active(),
        Color::Magenta,
    );
}
