//! Layout components (centered panel, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Maximum width of the form panel
const PANEL_WIDTH: u16 = 64;

/// Split the screen into a centered content panel and a status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let [panel] = Layout::horizontal([Constraint::Max(PANEL_WIDTH)])
        .flex(Flex::Center)
        .areas(chunks[0]);

    let panel = Rect {
        y: panel.y + 1,
        height: panel.height.saturating_sub(1),
        ..panel
    };

    (panel, chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(" POST ", Style::default().fg(Color::Black).bg(Color::Magenta)),
        Span::raw(" "),
        Span::styled(app.endpoint.as_str(), Style::default().fg(Color::Gray)),
    ];

    if app.is_submitting() {
        spans.push(Span::styled(
            "  sending…",
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.push(Span::styled(
        "  Ctrl+C: quit",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
