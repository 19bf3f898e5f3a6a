//! Labeled checkbox

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a checkbox field
pub fn render_checkbox(frame: &mut Frame, area: Rect, field: &FormField, focused: bool) {
    let display = format!("{} {}", field.display_value(), field.label);

    let style = if focused {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(Color::White)
    };

    let border_style = if focused {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = Paragraph::new(display).style(style).block(block);
    frame.render_widget(paragraph, area);
}
