//! Bank metadata model.
//!
//! Bank records live in the secondary document store. Their identifier is
//! minted by this service and is distinct from the routing (IFSC) code.

use std::fmt;

use uuid::Uuid;

/// Name written to every bank record upserted during account creation.
pub const DEFAULT_BANK_NAME: &str = "SBI";

/// Opaque bank record identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BankId(String);

impl BankId {
    /// Wrap an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a fresh UUID-based identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl AsRef<str> for BankId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Bank metadata record.
///
/// No uniqueness is enforced on `ifsc_code`: several records may share one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    /// Store identifier.
    pub id: BankId,
    /// Display name.
    pub bank_name: Option<String>,
    /// Branch location.
    pub location: Option<String>,
    /// Routing code.
    pub ifsc_code: Option<String>,
}

impl Bank {
    /// Fresh record with a new identifier and no attributes.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            id: BankId::random(),
            bank_name: None,
            location: None,
            ifsc_code: None,
        }
    }
}
