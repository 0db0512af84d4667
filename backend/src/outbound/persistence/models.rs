//! Internal Diesel row structs for the accounts table.
//!
//! These types never leave the persistence layer.

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::AccountDetails;

use super::schema::accounts;

/// Row struct for reading from the accounts table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AccountRow {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub account_number: String,
    pub account_type: Option<String>,
    pub dob: Option<NaiveDate>,
    pub bank_code: String,
}

/// Column values shared by plain inserts and id-keyed upserts.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = accounts)]
pub(crate) struct AccountValues<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub account_number: &'a str,
    pub account_type: Option<&'a str>,
    pub dob: Option<NaiveDate>,
    pub bank_code: &'a str,
}

impl<'a> From<&'a AccountDetails> for AccountValues<'a> {
    fn from(details: &'a AccountDetails) -> Self {
        Self {
            name: details.name.as_deref(),
            email: details.email.as_deref(),
            account_number: &details.account_number,
            account_type: details.account_type.as_deref(),
            dob: details.date_of_birth,
            bank_code: details.bank_code.as_ref(),
        }
    }
}

/// Insertable row carrying a caller-chosen identifier.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = accounts)]
pub(crate) struct AccountRowWithId<'a> {
    pub id: i64,
    #[diesel(embed)]
    pub values: AccountValues<'a>,
}
