//! Application state module

mod app_state;
mod forms;
mod sign_up;

pub use app_state::*;
pub use forms::*;
pub use sign_up::*;
