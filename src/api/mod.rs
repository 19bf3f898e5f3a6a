//! Registration API module for HTTP communication

mod client;
mod traits;
mod types;

pub use client::RegistrationClient;
pub use traits::RegistrationService;
pub use types::{RegistrationOutcome, RegistrationRequest, TransportError};

#[cfg(test)]
pub use traits::MockRegistrationService;
