//! Service entry-point: loads settings, connects adapters and serves the
//! account REST API.

mod server;

use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::web;
use color_eyre::eyre::{Context, Result};
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use account_service::config::AccountServiceSettings;
use account_service::domain::AccountEventTopics;
use account_service::inbound::events::listen_account_created;
use account_service::inbound::http::health::HealthState;
use account_service::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use account_service::outbound::redis;
use account_service::outbound::validation::HttpAccountValidationClient;

use server::{ServerConfig, create_server};

#[cfg(feature = "kafka")]
fn attach_kafka(
    config: ServerConfig,
    settings: &AccountServiceSettings,
) -> Result<ServerConfig> {
    use account_service::outbound::events::KafkaEventPublisher;

    match &settings.kafka_brokers {
        Some(brokers) => {
            let publisher = KafkaEventPublisher::connect(brokers, settings.auxiliary_timeout())
                .wrap_err("failed to create kafka producer")?;
            Ok(config.with_lookup_channel(Arc::new(publisher)))
        }
        None => Ok(config),
    }
}

#[cfg(not(feature = "kafka"))]
fn attach_kafka(
    config: ServerConfig,
    settings: &AccountServiceSettings,
) -> Result<ServerConfig> {
    if settings.kafka_brokers.is_some() {
        warn!("kafka brokers configured but the kafka feature is disabled; ignoring");
    }
    Ok(config)
}

async fn build_server_config(settings: &AccountServiceSettings) -> Result<ServerConfig> {
    let validation = HttpAccountValidationClient::new(
        settings.validation_base_url()?,
        settings.auxiliary_timeout(),
    )
    .wrap_err("failed to build validation client")?;

    let mut config = ServerConfig::new(settings.bind_addr()?, Arc::new(validation))
        .with_topics(AccountEventTopics {
            lookup: settings.lookup_topic().to_owned(),
            created: settings.created_destination().to_owned(),
        })
        .with_auxiliary_timeout(settings.auxiliary_timeout());

    if let Some(database_url) = &settings.database_url {
        run_pending_migrations(database_url)
            .await
            .wrap_err("failed to apply migrations")?;
        let pool = DbPool::new(PoolConfig::new(database_url.as_str()))
            .await
            .wrap_err("failed to build database pool")?;
        config = config.with_db_pool(pool);
    }

    if let Some(redis_url) = &settings.redis_url {
        let pool = redis::connect(redis_url, settings.auxiliary_timeout())
            .await
            .wrap_err("failed to build redis pool")?;
        config = config.with_redis_pool(pool);
    }

    attach_kafka(config, settings)
}

fn spawn_created_listener(settings: &AccountServiceSettings) {
    if !settings.listen_created_events {
        return;
    }
    let Some(redis_url) = settings.redis_url.clone() else {
        warn!("account-created listener enabled without a redis url; not starting");
        return;
    };
    let destination = settings.created_destination().to_owned();
    actix_web::rt::spawn(async move {
        if let Err(err) = listen_account_created(&redis_url, &destination).await {
            error!(error = %err, "account-created listener stopped");
        }
    });
}

/// Resolve on SIGINT or SIGTERM.
#[cfg(unix)]
async fn shutdown_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result,
        _ = terminate.recv() => Ok(()),
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}

/// Fail the probes as soon as a shutdown signal arrives, then drain.
fn spawn_shutdown_watch(server: ServerHandle, health_state: web::Data<HealthState>) {
    actix_web::rt::spawn(async move {
        if let Err(err) = shutdown_signal().await {
            error!(error = %err, "failed to install shutdown signal handler");
            return;
        }
        info!("shutdown signal received, draining connections");
        health_state.mark_unhealthy();
        server.stop(true).await;
    });
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        AccountServiceSettings::load().wrap_err("failed to load account service settings")?;
    let config = build_server_config(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), &config)?;
    info!(bind_addr = %config.bind_addr, "account service listening");
    spawn_created_listener(&settings);
    spawn_shutdown_watch(server.handle(), health_state);

    server.await?;
    Ok(())
}
