//! Redis publish/subscribe implementation of the `EventPublisher` port.

use async_trait::async_trait;
use bb8_redis::bb8::RunError;
use bb8_redis::redis::AsyncCommands;
use tracing::debug;

use crate::domain::ports::{EventPublisher, EventPublisherError};
use crate::outbound::events::encode_payload;

use super::pool::RedisPool;

/// Publishes each payload as a JSON string with `PUBLISH`.
///
/// Redis pub/sub does not buffer: a message published while nobody is
/// subscribed is dropped, which matches the at-most-once contract.
#[derive(Clone)]
pub struct RedisEventPublisher {
    pool: RedisPool,
}

impl RedisEventPublisher {
    /// Create a publisher over `pool`.
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventPublisher for RedisEventPublisher {
    async fn publish(&self, destination: &str, payload: &str) -> Result<(), EventPublisherError> {
        let message = encode_payload(payload)?;
        let mut conn = self.pool.get().await.map_err(|err| match err {
            RunError::User(error) => EventPublisherError::transport(destination, error.to_string()),
            RunError::TimedOut => EventPublisherError::timeout(destination),
        })?;

        let receivers: i64 = conn
            .publish(destination, message)
            .await
            .map_err(|err| EventPublisherError::transport(destination, err.to_string()))?;
        debug!(destination, receivers, "published to redis channel");
        Ok(())
    }
}
