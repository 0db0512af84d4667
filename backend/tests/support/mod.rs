//! Shared doubles and app wiring for the account HTTP integration tests.
//!
//! The orchestrator runs against the in-memory stores. Publishers record
//! every attempt and the validation client answers from a script, so tests
//! can assert on side effects without a broker or a remote service.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use async_trait::async_trait;

use account_service::Trace;
use account_service::domain::ports::{
    AccountRepository, AccountRepositoryError, AccountValidationClient, EventPublisher,
    EventPublisherError, ValidationClientError,
};
use account_service::domain::{
    Account, AccountDraft, AccountId, AccountOrchestrator, AccountOrchestratorPorts,
    AccountStatus, ValidationView,
};
use account_service::inbound::http::accounts;
use account_service::inbound::http::error::json_error_handler;
use account_service::inbound::http::state::HttpState;
use account_service::outbound::memory::{InMemoryAccountRepository, InMemoryBankRepository};

/// Publisher recording each attempt, optionally failing every one.
#[derive(Default)]
pub struct RecordingPublisher {
    attempts: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl RecordingPublisher {
    pub fn failing() -> Self {
        Self {
            attempts: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// `(destination, payload)` pairs in attempt order.
    pub fn attempts(&self) -> Vec<(String, String)> {
        self.attempts.lock().expect("attempts lock").clone()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, destination: &str, payload: &str) -> Result<(), EventPublisherError> {
        self.attempts
            .lock()
            .expect("attempts lock")
            .push((destination.to_owned(), payload.to_owned()));
        if self.fail {
            return Err(EventPublisherError::transport(destination, "broker down"));
        }
        Ok(())
    }
}

/// Validation client that either reports the account active or fails.
pub struct ScriptedValidationClient {
    fail: bool,
}

impl ScriptedValidationClient {
    pub fn healthy() -> Self {
        Self { fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl AccountValidationClient for ScriptedValidationClient {
    async fn fetch(&self, id: AccountId) -> Result<ValidationView, ValidationClientError> {
        if self.fail {
            return Err(ValidationClientError::transport("connection refused"));
        }
        Ok(ValidationView {
            id: Some(id),
            account_type: Some("checking".to_owned()),
            status: Some(AccountStatus::Active),
        })
    }
}

/// Account store wrapper counting writes.
#[derive(Default)]
pub struct CountingAccountStore {
    inner: InMemoryAccountRepository,
    writes: AtomicUsize,
}

impl CountingAccountStore {
    /// Saves and deletes performed so far.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountRepository for CountingAccountStore {
    async fn list_all(&self) -> Result<Vec<Account>, AccountRepositoryError> {
        self.inner.list_all().await
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, AccountRepositoryError> {
        self.inner.find_by_id(id).await
    }

    async fn exists_by_id(&self, id: AccountId) -> Result<bool, AccountRepositoryError> {
        self.inner.exists_by_id(id).await
    }

    async fn save(&self, draft: &AccountDraft) -> Result<Account, AccountRepositoryError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.save(draft).await
    }

    async fn delete(&self, account: &Account) -> Result<(), AccountRepositoryError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(account).await
    }
}

/// Collaborators behind one test app.
pub struct TestContext {
    pub accounts: Arc<CountingAccountStore>,
    pub banks: Arc<InMemoryBankRepository>,
    pub lookup_channel: Arc<RecordingPublisher>,
    pub created_channel: Arc<RecordingPublisher>,
    validation: Arc<ScriptedValidationClient>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_doubles(
            ScriptedValidationClient::healthy(),
            RecordingPublisher::default(),
            RecordingPublisher::default(),
        )
    }

    /// Every auxiliary collaborator fails.
    pub fn degraded() -> Self {
        Self::with_doubles(
            ScriptedValidationClient::failing(),
            RecordingPublisher::failing(),
            RecordingPublisher::failing(),
        )
    }

    fn with_doubles(
        validation: ScriptedValidationClient,
        lookup_channel: RecordingPublisher,
        created_channel: RecordingPublisher,
    ) -> Self {
        Self {
            accounts: Arc::new(CountingAccountStore::default()),
            banks: Arc::new(InMemoryBankRepository::new()),
            lookup_channel: Arc::new(lookup_channel),
            created_channel: Arc::new(created_channel),
            validation: Arc::new(validation),
        }
    }

    /// App wired the way the server wires it, minus the health probes.
    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        let orchestrator = Arc::new(
            AccountOrchestrator::new(AccountOrchestratorPorts {
                accounts: self.accounts.clone(),
                banks: self.banks.clone(),
                validation: self.validation.clone(),
                lookup_channel: self.lookup_channel.clone(),
                created_channel: self.created_channel.clone(),
            })
            .with_auxiliary_timeout(Duration::from_millis(200)),
        );
        App::new()
            .app_data(web::Data::new(HttpState::new(
                orchestrator.clone(),
                orchestrator,
            )))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .wrap(Trace)
            .service(web::scope("/api/v1").configure(accounts::configure))
    }
}
