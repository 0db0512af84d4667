//! Account orchestration service.
//!
//! Implements the account driving ports by sequencing the account store, the
//! bank store, the validation client and the two notification channels.
//! Only account store calls can fail an operation. Validation calls,
//! publishes and the bank upsert are attempted once, logged on failure and
//! otherwise ignored.
//!
//! Ordering within one call is fixed: validation runs before the account
//! lookup in `get_account`, and the account write precedes the notification
//! and the bank write in `create_account`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    AccountRepository, AccountRepositoryError, AccountValidationClient, AccountsCommand,
    AccountsQuery, BankRepository, EventPublisher,
};
use crate::domain::{
    Account, AccountDetails, AccountDraft, AccountId, Bank, BankCode, BankId, DEFAULT_BANK_NAME,
    Error,
};

/// Default bound for validation calls and publishes.
pub const DEFAULT_AUXILIARY_TIMEOUT: Duration = Duration::from_secs(2);
/// Default channel A topic for account lookups.
pub const DEFAULT_LOOKUP_TOPIC: &str = "account-lookups";
/// Default channel B destination for account creations.
pub const DEFAULT_CREATED_DESTINATION: &str = "account-created";

/// Destinations used for the two notification channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountEventTopics {
    /// Channel A topic, published to when an account is read.
    pub lookup: String,
    /// Channel B destination, published to when an account is created.
    pub created: String,
}

impl Default for AccountEventTopics {
    fn default() -> Self {
        Self {
            lookup: DEFAULT_LOOKUP_TOPIC.to_owned(),
            created: DEFAULT_CREATED_DESTINATION.to_owned(),
        }
    }
}

/// Parameter object bundling the orchestrator's collaborators.
#[derive(Clone)]
pub struct AccountOrchestratorPorts {
    /// Primary account store.
    pub accounts: Arc<dyn AccountRepository>,
    /// Bank metadata document store.
    pub banks: Arc<dyn BankRepository>,
    /// Remote validation service.
    pub validation: Arc<dyn AccountValidationClient>,
    /// Channel A.
    pub lookup_channel: Arc<dyn EventPublisher>,
    /// Channel B.
    pub created_channel: Arc<dyn EventPublisher>,
}

/// Stateless coordinator implementing [`AccountsQuery`] and [`AccountsCommand`].
///
/// Calls share nothing mutable, so concurrent requests need no locking.
#[derive(Clone)]
pub struct AccountOrchestrator {
    accounts: Arc<dyn AccountRepository>,
    banks: Arc<dyn BankRepository>,
    validation: Arc<dyn AccountValidationClient>,
    lookup_channel: Arc<dyn EventPublisher>,
    created_channel: Arc<dyn EventPublisher>,
    topics: AccountEventTopics,
    auxiliary_timeout: Duration,
}

impl AccountOrchestrator {
    /// Build an orchestrator with default topics and timeout.
    pub fn new(ports: AccountOrchestratorPorts) -> Self {
        let AccountOrchestratorPorts {
            accounts,
            banks,
            validation,
            lookup_channel,
            created_channel,
        } = ports;
        Self {
            accounts,
            banks,
            validation,
            lookup_channel,
            created_channel,
            topics: AccountEventTopics::default(),
            auxiliary_timeout: DEFAULT_AUXILIARY_TIMEOUT,
        }
    }

    /// Override the notification destinations.
    #[must_use]
    pub fn with_topics(mut self, topics: AccountEventTopics) -> Self {
        self.topics = topics;
        self
    }

    /// Override the bound applied to validation calls and publishes.
    #[must_use]
    pub fn with_auxiliary_timeout(mut self, auxiliary_timeout: Duration) -> Self {
        self.auxiliary_timeout = auxiliary_timeout;
        self
    }

    fn map_account_error(error: AccountRepositoryError) -> Error {
        match error {
            AccountRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("account store unavailable: {message}"))
            }
            AccountRepositoryError::Query { message } => {
                Error::internal(format!("account store error: {message}"))
            }
        }
    }

    fn account_not_found(id: AccountId) -> Error {
        Error::not_found(format!("Account not found with id: {id}"))
    }

    async fn find_existing(&self, id: AccountId) -> Result<Account, Error> {
        self.accounts
            .find_by_id(id)
            .await
            .map_err(Self::map_account_error)?
            .ok_or_else(|| Self::account_not_found(id))
    }

    async fn check_with_validation_service(&self, id: AccountId) {
        match timeout(self.auxiliary_timeout, self.validation.fetch(id)).await {
            Ok(Ok(view)) => info!(
                account_id = %id,
                account_type = view.account_type.as_deref().unwrap_or("unknown"),
                status = ?view.status,
                "validation service reported account"
            ),
            Ok(Err(error)) => warn!(account_id = %id, %error, "validation call failed"),
            Err(_) => warn!(
                account_id = %id,
                timeout = ?self.auxiliary_timeout,
                "validation call timed out"
            ),
        }
    }

    async fn publish_best_effort(
        &self,
        channel: &dyn EventPublisher,
        destination: &str,
        payload: &str,
    ) {
        match timeout(self.auxiliary_timeout, channel.publish(destination, payload)).await {
            Ok(Ok(())) => debug!(destination, "account notification published"),
            Ok(Err(error)) => warn!(destination, %error, "account notification dropped"),
            Err(_) => warn!(
                destination,
                timeout = ?self.auxiliary_timeout,
                "account notification timed out"
            ),
        }
    }

    /// Write a bank record for `bank_code`, bounded by the auxiliary timeout.
    async fn upsert_bank(&self, bank_code: &BankCode) {
        if timeout(self.auxiliary_timeout, self.write_bank(bank_code))
            .await
            .is_err()
        {
            warn!(
                bank_code = %bank_code,
                timeout = ?self.auxiliary_timeout,
                "bank upsert timed out"
            );
        }
    }

    /// Copy or mint the bank record for `bank_code`.
    ///
    /// The code is looked up as a bank *id*. Whether or not a record is found,
    /// the target receives a freshly minted id, so a found record is copied
    /// into a new document instead of being updated in place.
    async fn write_bank(&self, bank_code: &BankCode) {
        let existing = match self.banks.find_by_id(bank_code.as_ref()).await {
            Ok(existing) => existing,
            Err(error) => {
                warn!(bank_code = %bank_code, %error, "bank lookup failed; skipping bank upsert");
                return;
            }
        };

        let mut bank = existing.unwrap_or_else(Bank::blank);
        bank.id = BankId::random();
        bank.ifsc_code = Some(bank_code.to_string());
        bank.bank_name = Some(DEFAULT_BANK_NAME.to_owned());

        match self.banks.save(&bank).await {
            Ok(saved) => debug!(bank_id = %saved.id, bank_code = %bank_code, "bank record written"),
            Err(error) => warn!(bank_code = %bank_code, %error, "bank upsert failed"),
        }
    }
}

#[async_trait]
impl AccountsQuery for AccountOrchestrator {
    async fn list_accounts(&self) -> Result<Vec<Account>, Error> {
        self.accounts
            .list_all()
            .await
            .map_err(Self::map_account_error)
    }

    async fn get_account(&self, id: AccountId) -> Result<Option<Account>, Error> {
        self.check_with_validation_service(id).await;

        let found = self
            .accounts
            .find_by_id(id)
            .await
            .map_err(Self::map_account_error)?;

        if let Some(account) = &found {
            self.publish_best_effort(
                self.lookup_channel.as_ref(),
                &self.topics.lookup,
                account.account_number(),
            )
            .await;
        }
        Ok(found)
    }
}

#[async_trait]
impl AccountsCommand for AccountOrchestrator {
    async fn create_account(&self, draft: AccountDraft) -> Result<Account, Error> {
        if let Some(id) = draft.id {
            let taken = self
                .accounts
                .exists_by_id(id)
                .await
                .map_err(Self::map_account_error)?;
            if taken {
                return Err(Error::conflict(format!(
                    "Account with id {id} already exists."
                )));
            }
        }

        let saved = self
            .accounts
            .save(&draft)
            .await
            .map_err(Self::map_account_error)?;
        info!(account_id = %saved.id(), "account created");

        self.publish_best_effort(
            self.created_channel.as_ref(),
            &self.topics.created,
            saved.account_number(),
        )
        .await;
        self.upsert_bank(&saved.details.bank_code).await;

        Ok(saved)
    }

    async fn update_account(
        &self,
        id: AccountId,
        details: AccountDetails,
    ) -> Result<Account, Error> {
        let mut account = self.find_existing(id).await?;
        account.replace_details(details);

        let updated = self
            .accounts
            .save(&account.to_draft())
            .await
            .map_err(Self::map_account_error)?;
        info!(account_id = %id, "account updated");
        Ok(updated)
    }

    async fn delete_account(&self, id: AccountId) -> Result<(), Error> {
        let account = self.find_existing(id).await?;
        self.accounts
            .delete(&account)
            .await
            .map_err(Self::map_account_error)?;
        info!(account_id = %id, "account deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "account_orchestrator_tests.rs"]
mod tests;
