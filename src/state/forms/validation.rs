//! Local validation of the sign-up form

use super::form_state::SignUpForm;
use thiserror::Error;

/// Reasons a form is rejected before any request is made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email is expected")]
    MissingEmail,
    #[error("Name is expected")]
    MissingName,
    #[error("Password is expected")]
    MissingPassword,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("You must agree to the terms and conditions")]
    TermsNotAccepted,
}

/// Check the form in a fixed order; the first failure wins.
pub fn validate(form: &SignUpForm) -> Result<(), ValidationError> {
    if form.email.as_text().is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if form.name.as_text().is_empty() {
        return Err(ValidationError::MissingName);
    }
    if form.password.as_text().is_empty() {
        return Err(ValidationError::MissingPassword);
    }
    if form.password.as_text() != form.confirm_password.as_text() {
        return Err(ValidationError::PasswordMismatch);
    }
    if !form.conditions.is_checked() {
        return Err(ValidationError::TermsNotAccepted);
    }
    Ok(())
}
