//! Application state definitions

use super::sign_up::{SignUpComponent, SignUpListener};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    SignUp,
    SignIn,
}

/// Which half of the registration screen is showing
#[derive(Debug, Clone, Default)]
pub struct AuthMode {
    pub current_view: View,
}

impl SignUpListener for AuthMode {
    fn set_is_sign_up(&mut self, is_sign_up: bool) {
        self.current_view = if is_sign_up {
            View::SignUp
        } else {
            View::SignIn
        };
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub mode: AuthMode,
    /// Mounted only while the sign-up view is showing
    pub sign_up: Option<SignUpComponent>,
    /// Set when the sign-in view was reached through a successful registration
    pub registered_email: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AuthMode::default(),
            sign_up: Some(SignUpComponent::new()),
            registered_email: None,
        }
    }
}

impl AppState {
    pub fn current_view(&self) -> View {
        self.mode.current_view
    }

    /// Mount a fresh sign-up component or drop the current one to match the view
    pub fn sync_mount(&mut self) {
        match self.mode.current_view {
            View::SignUp => {
                if self.sign_up.is_none() {
                    self.sign_up = Some(SignUpComponent::new());
                    self.registered_email = None;
                }
            }
            View::SignIn => {
                self.sign_up = None;
            }
        }
    }
}

impl SignUpListener for AppState {
    fn set_is_sign_up(&mut self, is_sign_up: bool) {
        self.mode.set_is_sign_up(is_sign_up);
        self.sync_mount();
    }
}
