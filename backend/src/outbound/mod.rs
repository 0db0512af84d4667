//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL account store using Diesel ORM
//! - **redis**: bank document store and publish/subscribe channel
//! - **events**: logging publisher and the Kafka producer (feature-gated)
//! - **validation**: HTTP client for the validation service
//! - **memory**: process-local stores used when nothing is configured
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

pub mod events;
pub mod memory;
pub mod persistence;
pub mod redis;
pub mod validation;
