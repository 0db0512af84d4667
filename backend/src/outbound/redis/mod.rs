//! Redis-backed adapters.
//!
//! One `bb8-redis` pool serves both the bank document store and the
//! publish/subscribe notification channel.
//!
//! # Key Design
//!
//! - Bank: `banks:{id}` -> JSON document

mod bank_repository;
mod event_publisher;
mod pool;

pub use bank_repository::RedisBankRepository;
pub use event_publisher::RedisEventPublisher;
pub use pool::{RedisPool, RedisPoolError, connect};
