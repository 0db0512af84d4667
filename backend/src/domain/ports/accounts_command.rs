//! Driving port for account mutations.

use async_trait::async_trait;

use crate::domain::{Account, AccountDetails, AccountDraft, AccountId, Error};

/// Driving port for creating, updating and deleting accounts.
///
/// Only `not_found` and `conflict` errors are part of the defined outcome;
/// any other error reports a collaborator failure in a mandatory step.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountsCommand: Send + Sync {
    /// Persist a new account.
    ///
    /// Fails with `conflict` when the draft carries an id already in use.
    async fn create_account(&self, draft: AccountDraft) -> Result<Account, Error>;

    /// Replace every mutable attribute of an existing account.
    ///
    /// Fails with `not_found` when the id is unknown.
    async fn update_account(&self, id: AccountId, details: AccountDetails)
    -> Result<Account, Error>;

    /// Remove an account.
    ///
    /// Fails with `not_found` when the id is unknown.
    async fn delete_account(&self, id: AccountId) -> Result<(), Error>;
}

/// Fixture command that echoes creations and knows no existing accounts.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAccountsCommand;

#[async_trait]
impl AccountsCommand for FixtureAccountsCommand {
    async fn create_account(&self, draft: AccountDraft) -> Result<Account, Error> {
        let id = draft.id.unwrap_or(AccountId::new(1));
        Ok(Account::new(id, draft.details))
    }

    async fn update_account(
        &self,
        id: AccountId,
        _details: AccountDetails,
    ) -> Result<Account, Error> {
        Err(Error::not_found(format!("Account not found with id: {id}")))
    }

    async fn delete_account(&self, id: AccountId) -> Result<(), Error> {
        Err(Error::not_found(format!("Account not found with id: {id}")))
    }
}
