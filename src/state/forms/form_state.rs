//! Sign-up form state

use super::field::{FormField, InputType};
use crate::api::RegistrationRequest;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Index of the submit button row
pub const SUBMIT_ROW: usize = 6;

/// The registration form: four text fields and two consents
#[derive(Debug, Clone)]
pub struct SignUpForm {
    pub email: FormField,
    pub name: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    pub agree_email: FormField,
    pub conditions: FormField,
    pub active_field_index: usize,
}

impl SignUpForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text(
                "email",
                "Email",
                "Enter your email",
                InputType::Email,
                "email",
            ),
            name: FormField::text("name", "Name", "Enter your name", InputType::Text, "user"),
            password: FormField::text(
                "password",
                "Password",
                "Enter your password",
                InputType::Password,
                "eye",
            ),
            confirm_password: FormField::text(
                "confirmPassword",
                "Confirm password",
                "Re-enter your password",
                InputType::Password,
                "eye",
            ),
            agree_email: FormField::checkbox("agreeEmail", "I agree to receive email updates"),
            conditions: FormField::checkbox(
                "conditions",
                "I have read and agree to the Terms of Service",
            ),
            active_field_index: 0,
        }
    }

    /// Returns true if the submit button row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    fn field_by_name_mut(&mut self, name: &str) -> Option<&mut FormField> {
        match name {
            "email" => Some(&mut self.email),
            "name" => Some(&mut self.name),
            "password" => Some(&mut self.password),
            "confirmPassword" => Some(&mut self.confirm_password),
            "agreeEmail" => Some(&mut self.agree_email),
            "conditions" => Some(&mut self.conditions),
            _ => None,
        }
    }

    /// Replace a single text field's value, keyed by field name.
    ///
    /// Returns false when `name` is not a text field of this form.
    pub fn handle_change(&mut self, name: &str, value: String) -> bool {
        match self.field_by_name_mut(name) {
            Some(field) if !field.is_checkbox() => {
                field.set_text(value);
                true
            }
            _ => {
                tracing::debug!(field = name, "ignoring change for unknown text field");
                false
            }
        }
    }

    /// Flip a consent checkbox, keyed by field name.
    ///
    /// Returns false when `name` is not a checkbox of this form.
    pub fn toggle(&mut self, name: &str) -> bool {
        match self.field_by_name_mut(name) {
            Some(field) if field.is_checkbox() => {
                field.toggle();
                true
            }
            _ => {
                tracing::debug!(field = name, "ignoring toggle for unknown checkbox");
                false
            }
        }
    }

    /// Build the wire request from the current values
    pub fn to_request(&self) -> RegistrationRequest {
        RegistrationRequest {
            email: self.email.as_text().to_string(),
            name: self.name.as_text().to_string(),
            password: self.password.as_text().to_string(),
            password_confirm: self.confirm_password.as_text().to_string(),
        }
    }
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignUpForm {
    fn field_count(&self) -> usize {
        7 // four text fields, two checkboxes, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.email),
            1 => Some(&self.name),
            2 => Some(&self.password),
            3 => Some(&self.confirm_password),
            4 => Some(&self.agree_email),
            5 => Some(&self.conditions),
            _ => None,
        }
    }
}
