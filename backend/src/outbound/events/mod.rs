//! Broker-independent event publisher adapters and the shared wire encoding.

#[cfg(feature = "kafka")]
mod kafka;
mod logging;

#[cfg(feature = "kafka")]
pub use kafka::{KafkaEventPublisher, KafkaPublisherError};
pub use logging::LoggingEventPublisher;

use crate::domain::ports::EventPublisherError;

/// Encode an account number as the JSON string sent on every broker.
pub(crate) fn encode_payload(payload: &str) -> Result<String, EventPublisherError> {
    serde_json::to_string(payload)
        .map_err(|err| EventPublisherError::serialization(err.to_string()))
}
