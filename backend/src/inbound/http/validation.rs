//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every helper returns an `invalid_request` error whose details name the
//! offending JSON field.

use chrono::NaiveDate;
use serde_json::json;

use crate::domain::{AccountValidationError, BankCode, Error};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidDate,
    InvalidBankCode,
    InvalidId,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidDate => "invalid_date",
            ErrorCode::InvalidBankCode => "invalid_bank_code",
            ErrorCode::InvalidId => "invalid_id",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, code: ErrorCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

fn field_value_error(field: FieldName, code: ErrorCode, message: String, value: &str) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ErrorCode::MissingField,
        format!("missing required field: {name}"),
    )
}

pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

pub(crate) fn parse_date(value: String, field: FieldName) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| {
        let name = field.as_str();
        field_value_error(
            field,
            ErrorCode::InvalidDate,
            format!("{name} must be a YYYY-MM-DD date"),
            &value,
        )
    })
}

pub(crate) fn parse_optional_date(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<NaiveDate>, Error> {
    value.map(|raw| parse_date(raw, field)).transpose()
}

pub(crate) fn parse_bank_code(value: String, field: FieldName) -> Result<BankCode, Error> {
    BankCode::new(value.clone()).map_err(|err| {
        let message = match err {
            AccountValidationError::EmptyBankCode => format!("{} must not be blank", field.as_str()),
            AccountValidationError::PaddedBankCode => {
                format!("{} must not contain surrounding whitespace", field.as_str())
            }
        };
        field_value_error(field, ErrorCode::InvalidBankCode, message, &value)
    })
}

pub(crate) fn invalid_id_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    field_value_error(
        field,
        ErrorCode::InvalidId,
        format!("{name} must be a 64-bit integer"),
        value,
    )
}
