//! Sign-up form rendering

use super::components::{render_button, render_checkbox, render_field, BUTTON_HEIGHT};
use crate::state::{Form, SignUpComponent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Field box height
const FIELD_HEIGHT: u16 = 3;

/// Draw the sign-up form
pub fn draw(frame: &mut Frame, area: Rect, sign_up: &SignUpComponent) {
    let form = &sign_up.form;
    let error_height = if sign_up.error.is_some() { 2 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Heading
            Constraint::Length(2),             // Subtitle
            Constraint::Length(error_height),  // Error
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(FIELD_HEIGHT),  // Name
            Constraint::Length(FIELD_HEIGHT),  // Password
            Constraint::Length(FIELD_HEIGHT),  // Confirm password
            Constraint::Length(FIELD_HEIGHT),  // Agree email
            Constraint::Length(FIELD_HEIGHT),  // Conditions
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Help text
            Constraint::Min(0),
        ])
        .split(area);

    let heading = Paragraph::new("Sign up").style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(heading, chunks[0]);

    let subtitle = Paragraph::new("Before we start, please enter your details")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(subtitle, chunks[1]);

    if let Some(error) = &sign_up.error {
        let error = Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red));
        frame.render_widget(error, chunks[2]);
    }

    let active = form.active_field();
    for (offset, chunk) in chunks[3..9].iter().enumerate() {
        let Some(field) = form.get_field(offset) else {
            continue;
        };
        if field.is_checkbox() {
            render_checkbox(frame, *chunk, field, active == offset);
        } else {
            render_field(frame, *chunk, field, active == offset);
        }
    }

    render_button(
        frame,
        chunks[9],
        sign_up.submit_label(),
        form.is_buttons_row_active(),
        !sign_up.is_submitting(),
    );

    let on_checkbox = form.get_field(active).is_some_and(|f| f.is_checkbox());
    let help = Paragraph::new(Line::from(help_spans(on_checkbox)))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[10]);
}

/// Key hints for the current focus
fn help_spans(on_checkbox: bool) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    if on_checkbox {
        spans.push(Span::styled("Space", Style::default().fg(Color::Magenta)));
        spans.push(Span::raw(": toggle  "));
    }
    spans.extend([
        Span::styled("Tab", Style::default().fg(Color::Magenta)),
        Span::raw(": next field  "),
        Span::styled("Enter", Style::default().fg(Color::Magenta)),
        Span::raw(": create account  "),
        Span::styled("Esc", Style::default().fg(Color::Magenta)),
        Span::raw(": sign in"),
    ]);
    spans
}
