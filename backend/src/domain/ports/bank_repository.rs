//! Driven port for the bank metadata document store.

use async_trait::async_trait;

use crate::domain::Bank;

use super::define_port_error;

define_port_error! {
    /// Errors raised by bank store adapters.
    pub enum BankRepositoryError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "bank store connection failed: {message}",
        /// Read or write failed during execution.
        Query { message: String } =>
            "bank store query failed: {message}",
        /// A stored document could not be encoded or decoded.
        Serialization { message: String } =>
            "bank document serialization failed: {message}",
    }
}

/// Port for bank document storage keyed by record identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BankRepository: Send + Sync {
    /// Look up a bank document by its store identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<Bank>, BankRepositoryError>;

    /// Insert or overwrite the document stored under `bank.id`.
    async fn save(&self, bank: &Bank) -> Result<Bank, BankRepositoryError>;
}
