//! Form domain layer
//!
//! Type-safe form handling for the sign-up view: field value objects,
//! the form record itself, and local validation.

mod field;
mod form_state;
mod validation;

pub use field::FormField;
pub use form_state::{Form, SignUpForm};
pub use validation::validate;
