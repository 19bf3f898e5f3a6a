//! UI module for rendering the TUI

mod components;
mod layout;
mod sign_in;
mod sign_up;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (main_area, status_area) = layout::create_layout(area);

    // Draw main content based on current view
    match app.state.current_view() {
        View::SignUp => {
            if let Some(sign_up) = &app.state.sign_up {
                sign_up::draw(frame, main_area, sign_up);
            }
        }
        View::SignIn => {
            sign_in::draw(frame, main_area, app.state.registered_email.as_deref());
        }
    }

    // Draw status bar
    layout::draw_status_bar(frame, status_area, app);
}
