//! Redis-backed `BankRepository` storing one JSON document per bank.

use async_trait::async_trait;
use bb8_redis::RedisConnectionManager;
use bb8_redis::bb8::{PooledConnection, RunError};
use bb8_redis::redis::{AsyncCommands, RedisError};
use serde::{Deserialize, Serialize};

use crate::domain::ports::{BankRepository, BankRepositoryError};
use crate::domain::{Bank, BankId};

use super::pool::RedisPool;

const BANK_KEY_PREFIX: &str = "banks:";

fn bank_key(id: &str) -> String {
    format!("{BANK_KEY_PREFIX}{id}")
}

/// Stored representation of a bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BankDocument {
    id: String,
    #[serde(default)]
    bank_name: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    ifsc_code: Option<String>,
}

impl From<&Bank> for BankDocument {
    fn from(bank: &Bank) -> Self {
        Self {
            id: bank.id.to_string(),
            bank_name: bank.bank_name.clone(),
            location: bank.location.clone(),
            ifsc_code: bank.ifsc_code.clone(),
        }
    }
}

impl From<BankDocument> for Bank {
    fn from(document: BankDocument) -> Self {
        Self {
            id: BankId::new(document.id),
            bank_name: document.bank_name,
            location: document.location,
            ifsc_code: document.ifsc_code,
        }
    }
}

fn map_redis_error(error: RedisError) -> BankRepositoryError {
    if error.is_io_error() || error.is_connection_refusal() || error.is_connection_dropped() {
        BankRepositoryError::connection(error.to_string())
    } else {
        BankRepositoryError::query(error.to_string())
    }
}

/// Bank store over a shared Redis pool.
#[derive(Clone)]
pub struct RedisBankRepository {
    pool: RedisPool,
}

impl RedisBankRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    async fn connection(
        &self,
    ) -> Result<PooledConnection<'_, RedisConnectionManager>, BankRepositoryError> {
        self.pool.get().await.map_err(|err| match err {
            RunError::User(error) => map_redis_error(error),
            RunError::TimedOut => BankRepositoryError::connection("redis pool checkout timed out"),
        })
    }
}

#[async_trait]
impl BankRepository for RedisBankRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Bank>, BankRepositoryError> {
        let mut conn = self.connection().await?;
        let raw: Option<String> = conn.get(bank_key(id)).await.map_err(map_redis_error)?;

        raw.map(|json| {
            serde_json::from_str::<BankDocument>(&json)
                .map(Bank::from)
                .map_err(|err| BankRepositoryError::serialization(err.to_string()))
        })
        .transpose()
    }

    async fn save(&self, bank: &Bank) -> Result<Bank, BankRepositoryError> {
        let json = serde_json::to_string(&BankDocument::from(bank))
            .map_err(|err| BankRepositoryError::serialization(err.to_string()))?;

        let mut conn = self.connection().await?;
        let () = conn
            .set(bank_key(bank.id.as_ref()), json)
            .await
            .map_err(map_redis_error)?;
        Ok(bank.clone())
    }
}
