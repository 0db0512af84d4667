//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use account_service::domain::ports::{AccountValidationClient, EventPublisher};
use account_service::domain::{AccountEventTopics, DEFAULT_AUXILIARY_TIMEOUT};
use account_service::outbound::persistence::DbPool;
use account_service::outbound::redis::RedisPool;

/// Builder-style configuration for creating the HTTP server.
///
/// Stores and brokers left unset fall back to process-local adapters.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) validation: Arc<dyn AccountValidationClient>,
    pub(crate) topics: AccountEventTopics,
    pub(crate) auxiliary_timeout: Duration,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) redis_pool: Option<RedisPool>,
    pub(crate) lookup_channel: Option<Arc<dyn EventPublisher>>,
}

impl ServerConfig {
    /// Construct a configuration bound to `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, validation: Arc<dyn AccountValidationClient>) -> Self {
        Self {
            bind_addr,
            validation,
            topics: AccountEventTopics::default(),
            auxiliary_timeout: DEFAULT_AUXILIARY_TIMEOUT,
            db_pool: None,
            redis_pool: None,
            lookup_channel: None,
        }
    }

    /// Override the notification destinations.
    #[must_use]
    pub fn with_topics(mut self, topics: AccountEventTopics) -> Self {
        self.topics = topics;
        self
    }

    /// Override the bound applied to best-effort calls.
    #[must_use]
    pub fn with_auxiliary_timeout(mut self, auxiliary_timeout: Duration) -> Self {
        self.auxiliary_timeout = auxiliary_timeout;
        self
    }

    /// Attach a database connection pool for the account store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Attach a Redis pool for the bank store and the account-created channel.
    #[must_use]
    pub fn with_redis_pool(mut self, pool: RedisPool) -> Self {
        self.redis_pool = Some(pool);
        self
    }

    /// Use a dedicated publisher for the account-lookup channel.
    #[cfg_attr(
        not(feature = "kafka"),
        expect(dead_code, reason = "Only the Kafka producer replaces the lookup channel")
    )]
    #[must_use]
    pub fn with_lookup_channel(mut self, publisher: Arc<dyn EventPublisher>) -> Self {
        self.lookup_channel = Some(publisher);
        self
    }
}
