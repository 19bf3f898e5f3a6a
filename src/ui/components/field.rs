//! Labeled text input

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Glyph for an icon identifier
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "email" => "✉",
        "user" => "☺",
        "eye" => "◉",
        _ => "•",
    }
}

/// Spans for a field's content: icon, value or placeholder, cursor
pub fn field_spans(field: &FormField, is_active: bool) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    if let Some(icon) = field.icon {
        spans.push(Span::styled(
            format!("{} ", icon_glyph(icon)),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let value = field.display_value();
    if value.is_empty() && !is_active {
        spans.push(Span::styled(
            field.placeholder,
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        let style = if is_active {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(value, style));
    }

    if is_active {
        spans.push(Span::styled("▌", Style::default().fg(Color::Magenta)));
    }

    spans
}

/// Draw a text field as a bordered box titled with its label
pub fn render_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    let content = Paragraph::new(Line::from(field_spans(field, is_active)));
    frame.render_widget(content.block(block), area);
}
