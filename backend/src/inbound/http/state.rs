//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AccountsCommand, AccountsQuery, FixtureAccountsCommand, FixtureAccountsQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read-side account operations.
    pub accounts_query: Arc<dyn AccountsQuery>,
    /// Write-side account operations.
    pub accounts: Arc<dyn AccountsCommand>,
}

impl HttpState {
    /// Bundle the account ports.
    pub fn new(accounts_query: Arc<dyn AccountsQuery>, accounts: Arc<dyn AccountsCommand>) -> Self {
        Self {
            accounts_query,
            accounts,
        }
    }
}

impl Default for HttpState {
    /// State backed by fixture ports, used by handler tests and the OpenAPI
    /// dump.
    fn default() -> Self {
        Self::new(Arc::new(FixtureAccountsQuery), Arc::new(FixtureAccountsCommand))
    }
}
