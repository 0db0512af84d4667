//! PostgreSQL-backed `AccountRepository` implementation using Diesel ORM.
//!
//! A draft without an identifier is inserted and receives the next
//! `BIGSERIAL` value. A draft with an identifier is upserted on `id`, which
//! covers both creation with a caller-chosen id and full overwrites.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{AccountRepository, AccountRepositoryError};
use crate::domain::{Account, AccountDetails, AccountDraft, AccountId, BankCode};

use super::models::{AccountRow, AccountRowWithId, AccountValues};
use super::pool::{DbPool, PoolError};
use super::schema::accounts;

/// Moves the identity sequence past explicitly inserted ids so later
/// store-assigned ids cannot collide with them.
const SYNC_ID_SEQUENCE: &str = "SELECT setval(pg_get_serial_sequence('accounts', 'id'), \
     GREATEST((SELECT COALESCE(MAX(id), 0) FROM accounts), 1))";

/// Diesel-backed implementation of the [`AccountRepository`] port.
#[derive(Clone)]
pub struct DieselAccountRepository {
    pool: DbPool,
}

impl DieselAccountRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AccountRepositoryError {
    AccountRepositoryError::connection(error.into_message())
}

fn map_diesel_error(error: diesel::result::Error) -> AccountRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            AccountRepositoryError::connection("database connection error")
        }
        DieselError::NotFound => AccountRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => {
            AccountRepositoryError::query("database query error")
        }
        _ => AccountRepositoryError::query("database error"),
    }
}

fn row_to_account(row: AccountRow) -> Result<Account, AccountRepositoryError> {
    let bank_code = BankCode::new(row.bank_code).map_err(|err| {
        AccountRepositoryError::query(format!("account {} has invalid bank code: {err}", row.id))
    })?;
    Ok(Account::new(
        AccountId::new(row.id),
        AccountDetails {
            name: row.name,
            email: row.email,
            account_number: row.account_number,
            account_type: row.account_type,
            date_of_birth: row.dob,
            bank_code,
        },
    ))
}

#[async_trait]
impl AccountRepository for DieselAccountRepository {
    async fn list_all(&self) -> Result<Vec<Account>, AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<AccountRow> = accounts::table
            .order(accounts::id.asc())
            .select(AccountRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_account).collect()
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<AccountRow> = accounts::table
            .find(id.get())
            .select(AccountRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_account).transpose()
    }

    async fn exists_by_id(&self, id: AccountId) -> Result<bool, AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(accounts::table.find(id.get())))
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn save(&self, draft: &AccountDraft) -> Result<Account, AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let values = AccountValues::from(&draft.details);

        let row: AccountRow = match draft.id {
            None => diesel::insert_into(accounts::table)
                .values(&values)
                .returning(AccountRow::as_returning())
                .get_result(&mut conn)
                .await
                .map_err(map_diesel_error)?,
            Some(id) => {
                let row = diesel::insert_into(accounts::table)
                    .values(&AccountRowWithId {
                        id: id.get(),
                        values,
                    })
                    .on_conflict(accounts::id)
                    .do_update()
                    .set((
                        accounts::name.eq(excluded(accounts::name)),
                        accounts::email.eq(excluded(accounts::email)),
                        accounts::account_number.eq(excluded(accounts::account_number)),
                        accounts::account_type.eq(excluded(accounts::account_type)),
                        accounts::dob.eq(excluded(accounts::dob)),
                        accounts::bank_code.eq(excluded(accounts::bank_code)),
                    ))
                    .returning(AccountRow::as_returning())
                    .get_result(&mut conn)
                    .await
                    .map_err(map_diesel_error)?;

                diesel::sql_query(SYNC_ID_SEQUENCE)
                    .execute(&mut conn)
                    .await
                    .map_err(map_diesel_error)?;
                row
            }
        };

        row_to_account(row)
    }

    async fn delete(&self, account: &Account) -> Result<(), AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(accounts::table.find(account.id().get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        debug!(account_id = %account.id(), removed, "account rows deleted");
        Ok(())
    }
}
