//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into main content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar: key hints on the left, then any status message
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let hints = if form.is_button_row_active() {
        format!("Tab/↑↓:move  Enter:sign up  {SUBMIT_SHORTCUT}:sign up  Esc:quit")
    } else if form.active_field_name().is_some_and(|f| f.is_select()) {
        format!("Tab/↑↓:move  ←/→:choose  Bksp:clear  {SUBMIT_SHORTCUT}:sign up  Esc:quit")
    } else {
        format!("Tab/↑↓:move  type to edit  {SUBMIT_SHORTCUT}:sign up  Esc:quit")
    };

    let mut spans = vec![Span::styled(
        format!(" {hints} "),
        Style::default().fg(Color::White),
    )];

    if form.is_valid() {
        spans.push(Span::styled("✓ ready ", Style::default().fg(Color::Green)));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
