//! Application state and core logic

use crate::api::{RegistrationOutcome, RegistrationService, TransportError};
use crate::state::{AppState, Form, SignUpListener, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// A registration request running on its own task
struct PendingSubmission {
    /// Email being registered, shown on the sign-in screen afterwards
    email: String,
    handle: JoinHandle<Result<RegistrationOutcome, TransportError>>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Endpoint shown in the status bar
    pub endpoint: String,
    /// Registration backend
    service: Arc<dyn RegistrationService>,
    /// The single in-flight submission, if any
    pending: Option<PendingSubmission>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(service: Arc<dyn RegistrationService>, endpoint: impl Into<String>) -> Self {
        Self {
            state: AppState::default(),
            endpoint: endpoint.into(),
            service,
            pending: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// True while a registration request is in flight
    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view() {
            View::SignUp => self.handle_sign_up_key(key),
            View::SignIn => self.handle_sign_in_key(key),
        }
        Ok(())
    }

    /// Handle keys in the sign-up view
    fn handle_sign_up_key(&mut self, key: KeyEvent) {
        let submitting = self.is_submitting();
        let Some(sign_up) = self.state.sign_up.as_mut() else {
            return;
        };
        let on_checkbox = sign_up
            .form
            .get_field(sign_up.form.active_field())
            .is_some_and(|f| f.is_checkbox());

        match key.code {
            KeyCode::Esc => {
                // The form stays mounted while its request is outstanding
                if !submitting {
                    self.state.set_is_sign_up(false);
                }
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.start_submission();
            }
            KeyCode::Tab | KeyCode::Down => sign_up.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => sign_up.form.prev_field(),
            KeyCode::Char(' ') | KeyCode::Enter if on_checkbox => {
                sign_up.toggle_active();
            }
            KeyCode::Enter => self.start_submission(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                sign_up.input_char(c);
            }
            KeyCode::Backspace => sign_up.backspace(),
            _ => {}
        }
    }

    /// Handle keys in the sign-in view
    fn handle_sign_in_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') => self.state.set_is_sign_up(true),
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    /// Validate the form and, if it passes, send the request on a new task
    fn start_submission(&mut self) {
        // Submit control is disabled while a request is outstanding
        if self.pending.is_some() {
            return;
        }
        let Some(sign_up) = self.state.sign_up.as_mut() else {
            return;
        };
        let Some(request) = sign_up.begin_submission() else {
            return;
        };

        tracing::info!(email = %request.email, endpoint = %self.endpoint, "submitting registration");
        let email = request.email.clone();
        let service = Arc::clone(&self.service);
        let handle = tokio::spawn(async move { service.register(&request).await });
        self.pending = Some(PendingSubmission { email, handle });
    }

    /// Settle the in-flight submission if it has finished.
    ///
    /// Returns true when a submission was settled.
    pub async fn poll_submission(&mut self) -> bool {
        if !self
            .pending
            .as_ref()
            .is_some_and(|p| p.handle.is_finished())
        {
            return false;
        }
        let Some(pending) = self.pending.take() else {
            return false;
        };

        let result = match pending.handle.await {
            Ok(result) => result,
            Err(err) => Err(TransportError::Request(err.to_string())),
        };
        let registered = matches!(result, Ok(RegistrationOutcome::Registered));

        if let Some(sign_up) = self.state.sign_up.as_mut() {
            sign_up.finish_submission(result, &mut self.state.mode);
        }
        self.state.sync_mount();

        if registered && self.state.current_view() == View::SignIn {
            self.state.registered_email = Some(pending.email);
        }
        true
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            tracing::debug!("aborting registration request on exit");
            pending.handle.abort();
        }
    }
}
