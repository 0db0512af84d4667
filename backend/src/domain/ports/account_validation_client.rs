//! Driven port for the remote account-validation service.

use async_trait::async_trait;

use crate::domain::{AccountId, ValidationView};

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while calling the validation service.
    pub enum ValidationClientError {
        /// Network transport failed or the service answered with an error status.
        Transport { message: String } =>
            "validation transport failed: {message}",
        /// The call exceeded its timeout.
        Timeout { message: String } =>
            "validation timed out: {message}",
        /// The service does not know the account.
        NotFound { id: i64 } =>
            "validation service has no account {id}",
        /// The response body could not be decoded.
        Decode { message: String } =>
            "validation response decode failed: {message}",
    }
}

/// Port fetching the validation service's view of an account.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountValidationClient: Send + Sync {
    /// Fetch the authoritative view of `id`.
    async fn fetch(&self, id: AccountId) -> Result<ValidationView, ValidationClientError>;
}

/// Fixture client reporting every account as unknown.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAccountValidationClient;

#[async_trait]
impl AccountValidationClient for FixtureAccountValidationClient {
    async fn fetch(&self, id: AccountId) -> Result<ValidationView, ValidationClientError> {
        Err(ValidationClientError::not_found(id.get()))
    }
}
