//! Driven port for the primary account store.
//!
//! The store owns the durable [`Account`] representation. Adapters translate
//! between their row format and domain accounts; they hold no business rules.

use async_trait::async_trait;

use crate::domain::{Account, AccountDraft, AccountId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by account store adapters.
    pub enum AccountRepositoryError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "account store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "account store query failed: {message}",
    }
}

/// Port for account persistence.
///
/// Each call is atomic for the record it touches; nothing spans calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Every stored account, in the store's natural order.
    async fn list_all(&self) -> Result<Vec<Account>, AccountRepositoryError>;

    /// Look up one account.
    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, AccountRepositoryError>;

    /// Whether an account with `id` exists.
    async fn exists_by_id(&self, id: AccountId) -> Result<bool, AccountRepositoryError>;

    /// Insert or overwrite by identifier.
    ///
    /// A draft without an identifier is inserted under a store-assigned id;
    /// the persisted account is returned either way.
    async fn save(&self, draft: &AccountDraft) -> Result<Account, AccountRepositoryError>;

    /// Remove an account.
    async fn delete(&self, account: &Account) -> Result<(), AccountRepositoryError>;
}
