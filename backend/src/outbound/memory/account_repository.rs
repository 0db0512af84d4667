//! In-memory `AccountRepository`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{AccountRepository, AccountRepositoryError};
use crate::domain::{Account, AccountDraft, AccountId};

#[derive(Debug)]
struct Accounts {
    rows: BTreeMap<AccountId, Account>,
    next_id: i64,
}

/// Account store kept in a `BTreeMap`, listed in identifier order.
///
/// Assigned identifiers count up from 1 and skip any identifier already
/// taken by an explicit insert.
#[derive(Debug)]
pub struct InMemoryAccountRepository {
    state: RwLock<Accounts>,
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self {
            state: RwLock::new(Accounts {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl InMemoryAccountRepository {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub async fn len(&self) -> usize {
        self.state.read().await.rows.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn list_all(&self) -> Result<Vec<Account>, AccountRepositoryError> {
        Ok(self.state.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, AccountRepositoryError> {
        Ok(self.state.read().await.rows.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: AccountId) -> Result<bool, AccountRepositoryError> {
        Ok(self.state.read().await.rows.contains_key(&id))
    }

    async fn save(&self, draft: &AccountDraft) -> Result<Account, AccountRepositoryError> {
        let mut state = self.state.write().await;
        let id = match draft.id {
            Some(id) => id,
            None => {
                while state.rows.contains_key(&AccountId::new(state.next_id)) {
                    state.next_id += 1;
                }
                let id = AccountId::new(state.next_id);
                state.next_id += 1;
                id
            }
        };
        let account = Account::new(id, draft.details.clone());
        state.rows.insert(id, account.clone());
        Ok(account)
    }

    async fn delete(&self, account: &Account) -> Result<(), AccountRepositoryError> {
        self.state.write().await.rows.remove(&account.id());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccountDetails, BankCode};
    use rstest::{fixture, rstest};

    #[fixture]
    fn details() -> AccountDetails {
        AccountDetails {
            name: Some("Ada".to_owned()),
            email: Some("ada@example.com".to_owned()),
            account_number: "ACC-1".to_owned(),
            account_type: Some("savings".to_owned()),
            date_of_birth: None,
            bank_code: BankCode::new("IFSC001").expect("valid bank code"),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn assigns_sequential_ids(details: AccountDetails) {
        let repo = InMemoryAccountRepository::new();

        let first = repo.save(&AccountDraft::new(details.clone())).await.expect("save");
        let second = repo.save(&AccountDraft::new(details)).await.expect("save");

        assert_eq!(first.id(), AccountId::new(1));
        assert_eq!(second.id(), AccountId::new(2));
    }

    #[rstest]
    #[tokio::test]
    async fn assigned_ids_skip_explicit_ones(details: AccountDetails) {
        let repo = InMemoryAccountRepository::new();
        repo.save(&AccountDraft::with_id(AccountId::new(1), details.clone()))
            .await
            .expect("save");

        let assigned = repo.save(&AccountDraft::new(details)).await.expect("save");

        assert_eq!(assigned.id(), AccountId::new(2));
    }

    #[rstest]
    #[tokio::test]
    async fn save_with_id_overwrites(details: AccountDetails) {
        let repo = InMemoryAccountRepository::new();
        let id = AccountId::new(5);
        repo.save(&AccountDraft::with_id(id, details.clone()))
            .await
            .expect("save");
        let replacement = AccountDetails {
            email: Some("grace@example.com".to_owned()),
            ..details
        };

        repo.save(&AccountDraft::with_id(id, replacement.clone()))
            .await
            .expect("overwrite");

        let stored = repo.find_by_id(id).await.expect("find").expect("present");
        assert_eq!(stored.details, replacement);
        assert_eq!(repo.len().await, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_removes_account(details: AccountDetails) {
        let repo = InMemoryAccountRepository::new();
        let account = repo.save(&AccountDraft::new(details)).await.expect("save");

        repo.delete(&account).await.expect("delete");

        assert!(!repo.exists_by_id(account.id()).await.expect("exists"));
        assert!(repo.is_empty().await);
    }
}
