//! In-memory `BankRepository`.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{BankRepository, BankRepositoryError};
use crate::domain::Bank;

/// Bank documents keyed by record identifier.
#[derive(Debug, Default)]
pub struct InMemoryBankRepository {
    banks: RwLock<HashMap<String, Bank>>,
}

impl InMemoryBankRepository {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored bank, in no particular order.
    pub async fn all(&self) -> Vec<Bank> {
        self.banks.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl BankRepository for InMemoryBankRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Bank>, BankRepositoryError> {
        Ok(self.banks.read().await.get(id).cloned())
    }

    async fn save(&self, bank: &Bank) -> Result<Bank, BankRepositoryError> {
        self.banks
            .write()
            .await
            .insert(bank.id.to_string(), bank.clone());
        Ok(bank.clone())
    }
}
