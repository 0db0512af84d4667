//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `ACCOUNTS_*` environment variables and an
//! optional configuration file. Every collaborator URL is optional: an
//! absent store or broker falls back to a process-local adapter.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{DEFAULT_AUXILIARY_TIMEOUT, DEFAULT_CREATED_DESTINATION, DEFAULT_LOOKUP_TOPIC};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_VALIDATION_BASE_URL: &str = "http://localhost:1080";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The bind address is not `host:port`.
    #[error("invalid bind address {value:?}: {message}")]
    BindAddr { value: String, message: String },
    /// The validation service base URL is malformed.
    #[error("invalid validation base url {value:?}: {message}")]
    ValidationBaseUrl { value: String, message: String },
}

/// Configuration for the account service process.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ACCOUNTS")]
pub struct AccountServiceSettings {
    /// HTTP listen address.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL for the account store.
    pub database_url: Option<String>,
    /// Redis URL for bank documents and the account-created channel.
    pub redis_url: Option<String>,
    /// Kafka brokers for the account-lookup channel.
    pub kafka_brokers: Option<String>,
    /// Base URL of the account validation service.
    pub validation_base_url: Option<String>,
    /// Bound in milliseconds for validation calls and publishes.
    pub auxiliary_timeout_ms: Option<u64>,
    /// Topic for account-lookup notifications.
    pub lookup_topic: Option<String>,
    /// Destination for account-created notifications.
    pub created_destination: Option<String>,
    /// Start the account-created listener.
    #[ortho_config(default = false)]
    pub listen_created_events: bool,
}

impl AccountServiceSettings {
    /// Parsed listen address, defaulting to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BindAddr`] when the value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: raw.to_owned(),
            message: err.to_string(),
        })
    }

    /// Parsed validation service base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ValidationBaseUrl`] when the value does not
    /// parse.
    pub fn validation_base_url(&self) -> Result<reqwest::Url, SettingsError> {
        let raw = self
            .validation_base_url
            .as_deref()
            .unwrap_or(DEFAULT_VALIDATION_BASE_URL);
        reqwest::Url::parse(raw).map_err(|err| SettingsError::ValidationBaseUrl {
            value: raw.to_owned(),
            message: err.to_string(),
        })
    }

    /// Bound applied to each best-effort call.
    pub fn auxiliary_timeout(&self) -> Duration {
        self.auxiliary_timeout_ms
            .map_or(DEFAULT_AUXILIARY_TIMEOUT, Duration::from_millis)
    }

    /// Account-lookup topic.
    pub fn lookup_topic(&self) -> &str {
        self.lookup_topic.as_deref().unwrap_or(DEFAULT_LOOKUP_TOPIC)
    }

    /// Account-created destination.
    pub fn created_destination(&self) -> &str {
        self.created_destination
            .as_deref()
            .unwrap_or(DEFAULT_CREATED_DESTINATION)
    }
}
