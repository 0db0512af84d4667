//! DTOs for decoding validation service responses.

use serde::Deserialize;
use tracing::debug;

use crate::domain::{AccountId, AccountStatus, ValidationView};

/// Account payload returned by `GET /accounts/{id}`.
///
/// Only the fields the service logs are decoded; anything else is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ValidationAccountDto {
    #[serde(default)]
    pub(super) id: Option<i64>,
    #[serde(default)]
    pub(super) account_type: Option<String>,
    #[serde(default)]
    pub(super) status: Option<String>,
}

impl ValidationAccountDto {
    /// Unrecognised status labels become `None`; the view is informational.
    pub(super) fn into_view(self) -> ValidationView {
        let status = self.status.and_then(|raw| {
            raw.parse::<AccountStatus>()
                .inspect_err(|error| debug!(%error, "ignoring validation status"))
                .ok()
        });
        ValidationView {
            id: self.id.map(AccountId::new),
            account_type: self.account_type,
            status,
        }
    }
}
