//! Sign-in screen shown after leaving sign-up mode

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the sign-in screen, with a notice if an account was just created
pub fn draw(frame: &mut Frame, area: Rect, registered_email: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Heading
            Constraint::Length(2), // Subtitle
            Constraint::Length(3), // Notice
            Constraint::Min(0),
        ])
        .split(area);

    let heading = Paragraph::new("Sign in").style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(heading, chunks[0]);

    let subtitle = Paragraph::new(Line::from(vec![
        Span::raw("Press "),
        Span::styled("s", Style::default().fg(Color::Magenta)),
        Span::raw(" to create an account, "),
        Span::styled("q", Style::default().fg(Color::Magenta)),
        Span::raw(" to quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(subtitle, chunks[1]);

    if let Some(email) = registered_email {
        let notice = Paragraph::new(format!("Account created for {email}"))
            .style(Style::default().fg(Color::Green))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green)),
            );
        frame.render_widget(notice, chunks[2]);
    }
}
