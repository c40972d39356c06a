//! Field rendering utilities for forms

use crate::state::{FieldError, FieldErrorKind, Gender};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use strum::IntoEnumIterator;

fn border_style(is_active: bool, error: Option<&FieldError>) -> Style {
    match (is_active, error) {
        (_, Some(_)) => Style::default().fg(Color::Red),
        (true, None) => Style::default().fg(Color::Cyan),
        (false, None) => Style::default().fg(Color::DarkGray),
    }
}

/// Bordered field box; a visible error is printed on the bottom border
fn field_block(label: &str, is_active: bool, error: Option<&FieldError>) -> Block<'static> {
    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, error));

    if let Some(err) = error {
        let style = match err.kind() {
            FieldErrorKind::Required => Style::default().fg(Color::Red),
            FieldErrorKind::Format => Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::ITALIC),
        };
        block = block.title_bottom(Line::from(Span::styled(format!(" {err} "), style)));
    }
    block
}

/// Draw a single-line text field
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    error: Option<&FieldError>,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };
    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    frame.render_widget(content.block(field_block(label, is_active, error)), area);
}

/// Draw the gender select: every option inline, the chosen one highlighted
pub fn draw_select_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    selected: Option<Gender>,
    is_active: bool,
    error: Option<&FieldError>,
) {
    let mut spans = Vec::new();
    if is_active {
        spans.push(Span::styled("‹ ", Style::default().fg(Color::Cyan)));
    }
    for (idx, option) in Gender::iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if Some(option) == selected {
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(option.to_string(), style));
    }
    if is_active {
        spans.push(Span::styled(" ›", Style::default().fg(Color::Cyan)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(field_block(label, is_active, error)),
        area,
    );
}
