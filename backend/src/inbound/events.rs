//! Subscriber for the account-created channel.
//!
//! The listener opens a dedicated Redis connection (pub/sub connections
//! cannot be shared with the command pool), subscribes to one destination
//! and logs every payload it receives. It runs until the connection drops.

use bb8_redis::redis::{Client, Msg};
use futures_util::StreamExt;
use tracing::{info, warn};

/// Errors raised while starting the account-created listener.
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    /// The Redis URL could not be parsed.
    #[error("invalid redis url: {message}")]
    InvalidUrl { message: String },
    /// The subscription could not be established.
    #[error("failed to subscribe to {destination}: {message}")]
    Subscribe {
        destination: String,
        message: String,
    },
}

fn decode_payload(msg: &Msg) -> Option<String> {
    match msg.get_payload::<String>() {
        Ok(raw) => Some(serde_json::from_str::<String>(&raw).unwrap_or(raw)),
        Err(error) => {
            warn!(channel = msg.get_channel_name(), %error, "undecodable account event");
            None
        }
    }
}

/// Subscribe to `destination` and log each received account number.
///
/// Returns once the subscription stream ends.
///
/// # Errors
///
/// Returns [`ListenerError`] when the URL is malformed or the subscription
/// cannot be opened.
pub async fn listen_account_created(
    redis_url: &str,
    destination: &str,
) -> Result<(), ListenerError> {
    let client = Client::open(redis_url).map_err(|err| ListenerError::InvalidUrl {
        message: err.to_string(),
    })?;
    let subscribe_error = |err: bb8_redis::redis::RedisError| ListenerError::Subscribe {
        destination: destination.to_owned(),
        message: err.to_string(),
    };
    let mut pubsub = client.get_async_pubsub().await.map_err(subscribe_error)?;
    pubsub.subscribe(destination).await.map_err(subscribe_error)?;
    info!(destination, "listening for account-created events");

    let mut messages = pubsub.on_message();
    while let Some(msg) = messages.next().await {
        if let Some(account_number) = decode_payload(&msg) {
            info!(destination, account_number, "account created event received");
        }
    }

    warn!(destination, "account-created subscription closed");
    Ok(())
}
