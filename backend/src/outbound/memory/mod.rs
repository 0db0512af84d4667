//! Process-local adapters used when no external store is configured.
//!
//! Contents are lost on restart. They back local development and the HTTP
//! integration tests.

mod account_repository;
mod bank_repository;

pub use account_repository::InMemoryAccountRepository;
pub use bank_repository::InMemoryBankRepository;
