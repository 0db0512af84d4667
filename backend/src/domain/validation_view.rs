//! Read-only account view reported by the remote validation service.

use std::fmt;
use std::str::FromStr;

use crate::domain::AccountId;

/// Lifecycle status reported for an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    /// Account is open and usable.
    Active,
    /// Account exists but is dormant.
    Inactive,
    /// Account is temporarily blocked.
    Suspended,
    /// Account has been closed.
    Closed,
}

impl AccountStatus {
    /// Wire label of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Suspended => "Suspended",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown account status: {0}")]
pub struct UnknownAccountStatus(pub String);

impl FromStr for AccountStatus {
    type Err = UnknownAccountStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "suspended" => Ok(Self::Suspended),
            "closed" => Ok(Self::Closed),
            _ => Err(UnknownAccountStatus(s.to_owned())),
        }
    }
}

/// Account as seen by the validation service.
///
/// Only ever logged; it is never merged into stored or returned accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationView {
    /// Identifier echoed by the service.
    pub id: Option<AccountId>,
    /// Account type reported by the service.
    pub account_type: Option<String>,
    /// Lifecycle status reported by the service.
    pub status: Option<AccountStatus>,
}
