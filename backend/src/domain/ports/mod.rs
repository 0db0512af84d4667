//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`AccountValidationClient`],
//! [`EventPublisher`]) are implemented by outbound adapters. Driving ports
//! ([`AccountsQuery`], [`AccountsCommand`]) are implemented by the
//! orchestrator and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod account_repository;
mod account_validation_client;
mod accounts_command;
mod accounts_query;
mod bank_repository;
mod event_publisher;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
pub use account_repository::{AccountRepository, AccountRepositoryError};
#[cfg(test)]
pub use account_validation_client::MockAccountValidationClient;
pub use account_validation_client::{
    AccountValidationClient, FixtureAccountValidationClient, ValidationClientError,
};
#[cfg(test)]
pub use accounts_command::MockAccountsCommand;
pub use accounts_command::{AccountsCommand, FixtureAccountsCommand};
#[cfg(test)]
pub use accounts_query::MockAccountsQuery;
pub use accounts_query::{AccountsQuery, FixtureAccountsQuery};
#[cfg(test)]
pub use bank_repository::MockBankRepository;
pub use bank_repository::{BankRepository, BankRepositoryError};
#[cfg(test)]
pub use event_publisher::MockEventPublisher;
pub use event_publisher::{EventPublisher, EventPublisherError};
