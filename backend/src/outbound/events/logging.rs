//! Publisher used when no broker is configured for a channel.

use async_trait::async_trait;

use crate::domain::ports::{EventPublisher, EventPublisherError};

/// Logs each notification and discards it.
///
/// Lets the service run without a broker while keeping notifications
/// visible in the logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingEventPublisher;

impl LoggingEventPublisher {
    /// Create a new logging publisher.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventPublisher for LoggingEventPublisher {
    async fn publish(&self, destination: &str, payload: &str) -> Result<(), EventPublisherError> {
        tracing::info!(destination, payload, "no broker configured; notification discarded");
        Ok(())
    }
}
