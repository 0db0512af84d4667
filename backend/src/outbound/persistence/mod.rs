//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories translate between Diesel rows and domain accounts and hold
//! no business rules. Row structs (`models.rs`) and table definitions
//! (`schema.rs`) stay private to this module. Connections come from a `bb8`
//! pool driven by `diesel-async`; migrations run once at startup over a
//! blocking connection.
//!
//! # Example
//!
//! ```ignore
//! use account_service::outbound::persistence::{DbPool, DieselAccountRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/accounts")).await?;
//! let accounts = DieselAccountRepository::new(pool);
//! ```

mod diesel_account_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_account_repository::DieselAccountRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
