//! Sign-up component: form state plus submission lifecycle
//!
//! The component owns the [`SignUpForm`], the last error to display and the
//! in-flight flag. A submission is split in two halves so the host can run the
//! request on its own task: [`SignUpComponent::begin_submission`] validates and
//! hands out the request, [`SignUpComponent::finish_submission`] records how it
//! went and notifies the parent.

use super::forms::{validate, Form, SignUpForm};
use crate::api::{RegistrationOutcome, RegistrationRequest, TransportError};

/// Shown when the service rejects without a message
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// Shown when a transport error carries no message
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong";

/// Callback contract between the form and whatever hosts it
#[cfg_attr(test, mockall::automock)]
pub trait SignUpListener {
    /// Switch the enclosing view into or out of sign-up mode
    fn set_is_sign_up(&mut self, is_sign_up: bool);
}

/// Registration form with its error slot and submission gate
#[derive(Debug, Clone, Default)]
pub struct SignUpComponent {
    pub form: SignUpForm,
    pub error: Option<String>,
    is_submitting: bool,
}

impl SignUpComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a request is in flight
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Label for the submit control
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting {
            "Creating..."
        } else {
            "Create account"
        }
    }

    /// Append a character to the focused text field
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.form.get_field(self.form.active_field()) else {
            return;
        };
        if field.is_checkbox() {
            return;
        }
        let (name, value) = (field.name, field.with_char(c));
        self.form.handle_change(name, value);
    }

    /// Remove the last character of the focused text field
    pub fn backspace(&mut self) {
        let Some(field) = self.form.get_field(self.form.active_field()) else {
            return;
        };
        if field.is_checkbox() {
            return;
        }
        let (name, value) = (field.name, field.without_last_char());
        self.form.handle_change(name, value);
    }

    /// Toggle the focused checkbox. Returns false if focus is not on one.
    pub fn toggle_active(&mut self) -> bool {
        let Some(field) = self.form.get_field(self.form.active_field()) else {
            return false;
        };
        if !field.is_checkbox() {
            return false;
        }
        let name = field.name;
        self.form.toggle(name)
    }

    /// Validate and, if the form is acceptable, mark the submission as started.
    ///
    /// Returns the request to send, or `None` when validation failed (the
    /// message is stored in `error`) or a request is already in flight.
    pub fn begin_submission(&mut self) -> Option<RegistrationRequest> {
        if self.is_submitting {
            tracing::debug!("submission already in flight");
            return None;
        }

        if let Err(err) = validate(&self.form) {
            tracing::debug!(%err, "sign-up form rejected locally");
            self.error = Some(err.to_string());
            return None;
        }

        self.error = None;
        self.is_submitting = true;
        Some(self.form.to_request())
    }

    /// Record the result of a submission started by [`Self::begin_submission`]
    pub fn finish_submission(
        &mut self,
        result: Result<RegistrationOutcome, TransportError>,
        parent: &mut dyn SignUpListener,
    ) {
        match result {
            Ok(RegistrationOutcome::Registered) => {
                tracing::info!("registration completed");
                parent.set_is_sign_up(false);
            }
            Ok(RegistrationOutcome::Rejected { message }) => {
                let message = message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| REGISTRATION_FAILED.to_string());
                tracing::warn!(%message, "registration rejected");
                self.error = Some(message);
            }
            Err(err) => {
                let message = if err.message().is_empty() {
                    SOMETHING_WENT_WRONG.to_string()
                } else {
                    err.message().to_string()
                };
                tracing::warn!(%message, "registration request failed");
                self.error = Some(message);
            }
        }
        self.is_submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{MockRegistrationService, RegistrationService};
    use pretty_assertions::assert_eq;

    /// Run a whole attempt inline, awaiting the service
    async fn submit(
        component: &mut SignUpComponent,
        service: &dyn RegistrationService,
        parent: &mut dyn SignUpListener,
    ) {
        let Some(request) = component.begin_submission() else {
            return;
        };
        let result = service.register(&request).await;
        component.finish_submission(result, parent);
    }

    fn valid_component() -> SignUpComponent {
        let mut component = SignUpComponent::new();
        let form = &mut component.form;
        form.handle_change("email", "ada@example.com".to_string());
        form.handle_change("name", "Ada".to_string());
        form.handle_change("password", "hunter22".to_string());
        form.handle_change("confirmPassword", "hunter22".to_string());
        form.toggle("conditions");
        component
    }

    /// Service that must never be called
    fn untouched_service() -> MockRegistrationService {
        let mut service = MockRegistrationService::new();
        service.expect_register().never();
        service
    }

    /// Parent that must never be notified
    fn silent_parent() -> MockSignUpListener {
        let mut parent = MockSignUpListener::new();
        parent.expect_set_is_sign_up().never();
        parent
    }

    mod validation_blocks_network {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_empty_email() {
            let mut component = valid_component();
            component.form.handle_change("email", String::new());

            submit(&mut component, &untouched_service(), &mut silent_parent()).await;

            assert_eq!(component.error.as_deref(), Some("Email is expected"));
            assert!(!component.is_submitting());
        }

        #[tokio::test]
        async fn test_password_mismatch() {
            let mut component = valid_component();
            component
                .form
                .handle_change("confirmPassword", "hunter23".to_string());

            submit(&mut component, &untouched_service(), &mut silent_parent()).await;

            assert_eq!(component.error.as_deref(), Some("Passwords do not match"));
        }

        #[tokio::test]
        async fn test_terms_not_accepted() {
            let mut component = valid_component();
            component.form.toggle("conditions");

            submit(&mut component, &untouched_service(), &mut silent_parent()).await;

            assert_eq!(
                component.error.as_deref(),
                Some("You must agree to the terms and conditions")
            );
        }
    }

    mod outcomes {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_success_switches_parent_out_of_sign_up() {
            let mut component = valid_component();
            let mut service = MockRegistrationService::new();
            service
                .expect_register()
                .withf(|req| req.email == "ada@example.com" && req.password_confirm == "hunter22")
                .times(1)
                .returning(|_| Ok(RegistrationOutcome::Registered));
            let mut parent = MockSignUpListener::new();
            parent
                .expect_set_is_sign_up()
                .with(mockall::predicate::eq(false))
                .times(1)
                .return_const(());

            submit(&mut component, &service, &mut parent).await;

            assert!(component.error.is_none());
            assert!(!component.is_submitting());
        }

        #[tokio::test]
        async fn test_rejection_shows_server_message() {
            let mut component = valid_component();
            let mut service = MockRegistrationService::new();
            service.expect_register().times(1).returning(|_| {
                Ok(RegistrationOutcome::Rejected {
                    message: Some("Email already taken".to_string()),
                })
            });

            submit(&mut component, &service, &mut silent_parent()).await;

            assert_eq!(component.error.as_deref(), Some("Email already taken"));
            assert!(!component.is_submitting());
        }

        #[tokio::test]
        async fn test_rejection_without_message_uses_fallback() {
            let mut component = valid_component();
            let mut service = MockRegistrationService::new();
            service
                .expect_register()
                .returning(|_| Ok(RegistrationOutcome::Rejected { message: None }));

            submit(&mut component, &service, &mut silent_parent()).await;

            assert_eq!(component.error.as_deref(), Some(REGISTRATION_FAILED));
        }

        #[tokio::test]
        async fn test_transport_error_shows_its_message() {
            let mut component = valid_component();
            let mut service = MockRegistrationService::new();
            service.expect_register().returning(|_| {
                Err(TransportError::Request(
                    "error sending request: connection refused".to_string(),
                ))
            });

            submit(&mut component, &service, &mut silent_parent()).await;

            assert_eq!(
                component.error.as_deref(),
                Some("error sending request: connection refused")
            );
            assert!(!component.is_submitting());
        }

        #[tokio::test]
        async fn test_transport_error_without_message_uses_fallback() {
            let mut component = valid_component();
            let mut service = MockRegistrationService::new();
            service
                .expect_register()
                .returning(|_| Err(TransportError::Request(String::new())));

            submit(&mut component, &service, &mut silent_parent()).await;

            assert_eq!(component.error.as_deref(), Some(SOMETHING_WENT_WRONG));
        }
    }

    mod lifecycle {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_begin_clears_previous_error() {
            let mut component = valid_component();
            component.error = Some("Email already taken".to_string());

            let request = component.begin_submission();

            assert!(request.is_some());
            assert!(component.error.is_none());
            assert!(component.is_submitting());
            assert_eq!(component.submit_label(), "Creating...");
        }

        #[test]
        fn test_begin_while_submitting_is_refused() {
            let mut component = valid_component();
            assert!(component.begin_submission().is_some());
            assert!(component.begin_submission().is_none());
            assert!(component.is_submitting());
        }

        #[test]
        fn test_validation_failure_leaves_submitting_untouched() {
            let mut component = SignUpComponent::new();
            assert!(component.begin_submission().is_none());
            assert!(!component.is_submitting());
            assert_eq!(component.submit_label(), "Create account");
        }

        #[test]
        fn test_finish_re_enables_submit() {
            let mut component = valid_component();
            component.begin_submission();

            component.finish_submission(
                Ok(RegistrationOutcome::Rejected { message: None }),
                &mut silent_parent(),
            );

            assert!(!component.is_submitting());
            assert!(component.begin_submission().is_some());
        }
    }

    mod typing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_input_char_goes_to_focused_field() {
            let mut component = SignUpComponent::new();
            component.input_char('a');
            component.form.next_field();
            component.input_char('b');

            assert_eq!(component.form.email.as_text(), "a");
            assert_eq!(component.form.name.as_text(), "b");
        }

        #[test]
        fn test_backspace_removes_last_char() {
            let mut component = SignUpComponent::new();
            component.input_char('a');
            component.input_char('b');
            component.backspace();
            assert_eq!(component.form.email.as_text(), "a");
        }

        #[test]
        fn test_typing_on_checkbox_is_ignored() {
            let mut component = SignUpComponent::new();
            component.form.set_active_field(5);
            component.input_char('x');
            component.backspace();
            assert!(!component.form.conditions.is_checked());
        }

        #[test]
        fn test_toggle_active_only_on_checkbox() {
            let mut component = SignUpComponent::new();
            assert!(!component.toggle_active());

            component.form.set_active_field(4);
            assert!(component.toggle_active());
            assert!(component.form.agree_email.is_checked());
        }
    }
}
