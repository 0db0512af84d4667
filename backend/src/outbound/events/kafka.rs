//! Kafka implementation of the `EventPublisher` port.

use std::time::Duration;

use async_trait::async_trait;
use rdkafka::ClientConfig;
use rdkafka::error::{KafkaError, RDKafkaErrorCode};
use rdkafka::message::{Header, OwnedHeaders};
use rdkafka::producer::{FutureProducer, FutureRecord};
use rdkafka::util::Timeout;
use tracing::debug;

use crate::domain::ports::{EventPublisher, EventPublisherError};
use super::encode_payload;

const CONTENT_TYPE_HEADER: &str = "contentType";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Errors raised while building the producer.
#[derive(Debug, thiserror::Error)]
#[error("failed to create kafka producer: {0}")]
pub struct KafkaPublisherError(#[from] KafkaError);

/// Publishes JSON string payloads through an `rdkafka` producer.
#[derive(Clone)]
pub struct KafkaEventPublisher {
    producer: FutureProducer,
    send_timeout: Duration,
}

impl KafkaEventPublisher {
    /// Connect a producer to `brokers`.
    ///
    /// # Errors
    ///
    /// Returns [`KafkaPublisherError`] when the producer configuration is
    /// rejected.
    pub fn connect(brokers: &str, send_timeout: Duration) -> Result<Self, KafkaPublisherError> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("message.timeout.ms", send_timeout.as_millis().to_string())
            .set("acks", "1")
            .create()?;
        tracing::info!(brokers, "kafka producer created");
        Ok(Self {
            producer,
            send_timeout,
        })
    }
}

#[async_trait]
impl EventPublisher for KafkaEventPublisher {
    async fn publish(&self, destination: &str, payload: &str) -> Result<(), EventPublisherError> {
        let message = encode_payload(payload)?;
        let headers = OwnedHeaders::new().insert(Header {
            key: CONTENT_TYPE_HEADER,
            value: Some(JSON_CONTENT_TYPE),
        });
        let record = FutureRecord::<(), _>::to(destination)
            .payload(&message)
            .headers(headers);

        match self
            .producer
            .send(record, Timeout::After(self.send_timeout))
            .await
        {
            Ok(delivery) => {
                debug!(destination, ?delivery, "published to kafka topic");
                Ok(())
            }
            Err((KafkaError::MessageProduction(RDKafkaErrorCode::MessageTimedOut), _)) => {
                Err(EventPublisherError::timeout(destination))
            }
            Err((error, _)) => Err(EventPublisherError::transport(destination, error.to_string())),
        }
    }
}
