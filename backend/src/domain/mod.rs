//! Domain primitives, ports and the account orchestrator.
//!
//! Purpose: Define strongly typed account and bank entities, the ports the
//! orchestrator drives, and the error payload shared with inbound adapters.
//!
//! Public surface:
//! - Account, AccountDraft, AccountDetails, AccountId, BankCode: account model.
//! - Bank, BankId: bank metadata records.
//! - ValidationView, AccountStatus: validation service view of an account.
//! - Error, ErrorCode: API error payload and stable identifiers.
//! - AccountOrchestrator: implementation of the account driving ports.

pub mod account;
pub mod account_orchestrator;
pub mod bank;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod validation_view;

pub use self::account::{
    Account, AccountDetails, AccountDraft, AccountId, AccountValidationError, BankCode,
};
pub use self::account_orchestrator::{
    AccountEventTopics, AccountOrchestrator, AccountOrchestratorPorts,
    DEFAULT_AUXILIARY_TIMEOUT, DEFAULT_CREATED_DESTINATION, DEFAULT_LOOKUP_TOPIC,
};
pub use self::bank::{Bank, BankId, DEFAULT_BANK_NAME};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::validation_view::{AccountStatus, UnknownAccountStatus, ValidationView};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use account_service::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("Account not found with id: 1"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
