//! Builders selecting adapters for each orchestrator port.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use account_service::domain::ports::{AccountRepository, BankRepository, EventPublisher};
use account_service::domain::{AccountOrchestrator, AccountOrchestratorPorts};
use account_service::inbound::http::state::HttpState;
use account_service::outbound::events::LoggingEventPublisher;
use account_service::outbound::memory::{InMemoryAccountRepository, InMemoryBankRepository};
use account_service::outbound::persistence::DieselAccountRepository;
use account_service::outbound::redis::{RedisBankRepository, RedisEventPublisher};

use super::ServerConfig;

fn build_account_store(config: &ServerConfig) -> Arc<dyn AccountRepository> {
    match &config.db_pool {
        Some(pool) => Arc::new(DieselAccountRepository::new(pool.clone())),
        None => {
            info!("no database configured; accounts are kept in memory");
            Arc::new(InMemoryAccountRepository::new())
        }
    }
}

fn build_bank_store(config: &ServerConfig) -> Arc<dyn BankRepository> {
    match &config.redis_pool {
        Some(pool) => Arc::new(RedisBankRepository::new(pool.clone())),
        None => {
            info!("no redis configured; banks are kept in memory");
            Arc::new(InMemoryBankRepository::new())
        }
    }
}

fn build_created_channel(config: &ServerConfig) -> Arc<dyn EventPublisher> {
    match &config.redis_pool {
        Some(pool) => Arc::new(RedisEventPublisher::new(pool.clone())),
        None => Arc::new(LoggingEventPublisher::new()),
    }
}

fn build_lookup_channel(config: &ServerConfig) -> Arc<dyn EventPublisher> {
    if let Some(publisher) = &config.lookup_channel {
        return Arc::clone(publisher);
    }
    build_created_channel(config)
}

/// Wire the orchestrator from configured adapters and expose it to handlers.
pub fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let orchestrator = Arc::new(
        AccountOrchestrator::new(AccountOrchestratorPorts {
            accounts: build_account_store(config),
            banks: build_bank_store(config),
            validation: Arc::clone(&config.validation),
            lookup_channel: build_lookup_channel(config),
            created_channel: build_created_channel(config),
        })
        .with_topics(config.topics.clone())
        .with_auxiliary_timeout(config.auxiliary_timeout),
    );
    web::Data::new(HttpState::new(orchestrator.clone(), orchestrator))
}
