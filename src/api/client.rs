//! HTTP client for the registration endpoint
//!
//! Sends the sign-up form as JSON and turns the response into a
//! [`RegistrationOutcome`]. Anything that fails before a response arrives
//! becomes a [`TransportError`].

use super::traits::RegistrationService;
use super::types::{ErrorBody, RegistrationOutcome, RegistrationRequest, TransportError};
use async_trait::async_trait;

/// Client for the registration endpoint
pub struct RegistrationClient {
    /// The underlying HTTP client
    http: reqwest::Client,
    /// Full URL the form is posted to
    endpoint: String,
}

impl RegistrationClient {
    /// Create a client posting to `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RegistrationService for RegistrationClient {
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationOutcome, TransportError> {
        tracing::debug!(endpoint = %self.endpoint, email = %request.email, "posting registration");

        let response = self
            .http
            .post(self.endpoint.as_str())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(RegistrationOutcome::Registered);
        }

        // An unreadable or non-JSON body just means no message
        let body = response.json::<ErrorBody>().await.unwrap_or_default();
        let message = body.message_text();
        tracing::debug!(%status, ?message, "registration rejected");

        Ok(RegistrationOutcome::Rejected { message })
    }
}
