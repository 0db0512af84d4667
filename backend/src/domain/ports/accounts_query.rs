//! Driving port for account read operations.
//!
//! Inbound adapters read accounts through this port without knowing which
//! collaborators a read touches.

use async_trait::async_trait;

use crate::domain::{Account, AccountId, Error};

/// Driving port for account reads.
///
/// # Examples
///
/// ```rust,no_run
/// # async fn example() -> Result<(), account_service::domain::Error> {
/// use account_service::domain::AccountId;
/// use account_service::domain::ports::{AccountsQuery, FixtureAccountsQuery};
///
/// let query = FixtureAccountsQuery;
/// assert!(query.list_accounts().await?.is_empty());
/// assert!(query.get_account(AccountId::new(1)).await?.is_none());
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountsQuery: Send + Sync {
    /// Every stored account. Order is unspecified.
    async fn list_accounts(&self) -> Result<Vec<Account>, Error>;

    /// One account, or `None` when the id is unknown.
    async fn get_account(&self, id: AccountId) -> Result<Option<Account>, Error>;
}

/// Fixture query backed by an empty store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAccountsQuery;

#[async_trait]
impl AccountsQuery for FixtureAccountsQuery {
    async fn list_accounts(&self) -> Result<Vec<Account>, Error> {
        Ok(Vec::new())
    }

    async fn get_account(&self, _id: AccountId) -> Result<Option<Account>, Error> {
        Ok(None)
    }
}
