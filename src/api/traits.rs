//! Trait abstraction for the registration client to enable mocking in tests

use super::types::{RegistrationOutcome, RegistrationRequest, TransportError};
use async_trait::async_trait;

/// Anything that can register an account
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Submit a registration request and report how the service answered
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationOutcome, TransportError>;
}
