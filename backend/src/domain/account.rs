//! Account data model.
//!
//! An [`Account`] is the durable record owned by the account store. Callers
//! submit an [`AccountDraft`] when creating one; the draft may carry an
//! explicit identifier or leave assignment to the store.

use std::fmt;

use chrono::NaiveDate;

/// Validation errors returned by account value constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountValidationError {
    /// The bank code was empty or whitespace.
    #[error("bank code must not be empty")]
    EmptyBankCode,
    /// The bank code carried leading or trailing whitespace.
    #[error("bank code must not contain surrounding whitespace")]
    PaddedBankCode,
}

/// Numeric account identifier, unique within the account store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId(i64);

impl AccountId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for AccountId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Routing code referencing a bank record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BankCode(String);

impl BankCode {
    /// Validate and construct a [`BankCode`].
    ///
    /// # Examples
    /// ```
    /// use account_service::domain::BankCode;
    ///
    /// assert!(BankCode::new("IFSC001").is_ok());
    /// assert!(BankCode::new("  ").is_err());
    /// ```
    pub fn new(code: impl Into<String>) -> Result<Self, AccountValidationError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(AccountValidationError::EmptyBankCode);
        }
        if code.trim() != code {
            return Err(AccountValidationError::PaddedBankCode);
        }
        Ok(Self(code))
    }
}

impl AsRef<str> for BankCode {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BankCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<BankCode> for String {
    fn from(value: BankCode) -> Self {
        value.0
    }
}

impl TryFrom<String> for BankCode {
    type Error = AccountValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Mutable attributes of an account.
///
/// `update` replaces these wholesale; only the identifier survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDetails {
    /// Display name of the account holder.
    pub name: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Opaque account number, also the payload of account notifications.
    pub account_number: String,
    /// Free-form account type.
    pub account_type: Option<String>,
    /// Date of birth of the account holder.
    pub date_of_birth: Option<NaiveDate>,
    /// Bank the account belongs to.
    pub bank_code: BankCode,
}

/// Account submitted for persistence, with an optional caller-chosen id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDraft {
    /// Explicit identifier; `None` lets the store assign one.
    pub id: Option<AccountId>,
    /// Account attributes.
    pub details: AccountDetails,
}

impl AccountDraft {
    /// Draft without an identifier.
    #[must_use]
    pub fn new(details: AccountDetails) -> Self {
        Self { id: None, details }
    }

    /// Draft carrying an explicit identifier.
    #[must_use]
    pub fn with_id(id: AccountId, details: AccountDetails) -> Self {
        Self {
            id: Some(id),
            details,
        }
    }
}

/// Persisted account.
///
/// ## Invariants
/// - `id` is unique in the account store and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    /// Account attributes.
    pub details: AccountDetails,
}

impl Account {
    /// Build an account from a store-confirmed identifier.
    #[must_use]
    pub fn new(id: AccountId, details: AccountDetails) -> Self {
        Self { id, details }
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Account number used as the notification payload.
    #[must_use]
    pub fn account_number(&self) -> &str {
        self.details.account_number.as_str()
    }

    /// Replace every mutable attribute, keeping the identifier.
    pub fn replace_details(&mut self, details: AccountDetails) {
        self.details = details;
    }

    /// Draft that overwrites this account when saved.
    #[must_use]
    pub fn to_draft(&self) -> AccountDraft {
        AccountDraft::with_id(self.id, self.details.clone())
    }
}
