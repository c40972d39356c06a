//! Notice dialog shown after a successful submission

use super::base::{render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

pub fn render_notice_dialog(frame: &mut Frame, message: &str) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Success",
            accent: Color::Green,
            message,
            max_width: 50,
        },
    );
}
