//! Driven port for fire-and-forget notification channels.
//!
//! The service publishes account numbers on two independent channels. Each
//! publish is a single bounded attempt; adapters never retry.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised by event publisher adapters.
    pub enum EventPublisherError {
        /// The broker could not be reached or rejected the message.
        Transport { destination: String, message: String } =>
            "publish to {destination} failed: {message}",
        /// The broker did not acknowledge within the send timeout.
        Timeout { destination: String } =>
            "publish to {destination} timed out",
        /// The payload could not be encoded.
        Serialization { message: String } =>
            "publish payload encoding failed: {message}",
    }
}

/// Port publishing a string payload to a named destination.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish `payload` to `destination` once.
    async fn publish(&self, destination: &str, payload: &str) -> Result<(), EventPublisherError>;
}
