//! Reusable UI components

mod button;
mod checkbox;
mod field;

pub use button::{render_button, BUTTON_HEIGHT};
pub use checkbox::render_checkbox;
pub use field::render_field;
