//! Account HTTP handlers.
//!
//! ```text
//! GET    /api/v1/accounts
//! GET    /api/v1/accounts/{id}
//! POST   /api/v1/accounts
//! PUT    /api/v1/accounts/{id}
//! DELETE /api/v1/accounts/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Account, AccountDetails, AccountDraft, AccountId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, invalid_id_error, parse_bank_code, parse_optional_date, require,
};

const ID: FieldName = FieldName::new("id");
const ACCOUNT_NUMBER: FieldName = FieldName::new("accountNumber");
const DOB: FieldName = FieldName::new("dob");
const BANK_CODE: FieldName = FieldName::new("bankCode");

/// Request payload for creating or replacing an account.
///
/// Only `accountNumber` and `bankCode` are required. They are optional at the
/// serde level so a missing one produces a field-specific validation error
/// instead of a generic decode failure.
#[derive(Debug, Default, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountRequest {
    /// Caller-chosen identifier; ignored on update.
    #[schema(example = 42)]
    pub id: Option<i64>,
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[schema(example = "ACC-1")]
    pub account_number: Option<String>,
    #[schema(example = "savings")]
    pub account_type: Option<String>,
    /// Date of birth as `YYYY-MM-DD`.
    #[schema(example = "1990-01-31")]
    pub dob: Option<String>,
    #[schema(example = "IFSC001")]
    pub bank_code: Option<String>,
}

/// Response payload for an account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub account_number: String,
    pub account_type: Option<String>,
    pub dob: Option<String>,
    pub bank_code: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        let id = account.id().get();
        let AccountDetails {
            name,
            email,
            account_number,
            account_type,
            date_of_birth,
            bank_code,
        } = account.details;
        Self {
            id,
            name,
            email,
            account_number,
            account_type,
            dob: date_of_birth.map(|date| date.format("%Y-%m-%d").to_string()),
            bank_code: bank_code.into(),
        }
    }
}

fn parse_details(payload: AccountRequest) -> Result<AccountDetails, Error> {
    Ok(AccountDetails {
        name: payload.name,
        email: payload.email,
        account_number: require(payload.account_number, ACCOUNT_NUMBER)?,
        account_type: payload.account_type,
        date_of_birth: parse_optional_date(payload.dob, DOB)?,
        bank_code: parse_bank_code(require(payload.bank_code, BANK_CODE)?, BANK_CODE)?,
    })
}

fn parse_draft(payload: AccountRequest) -> Result<AccountDraft, Error> {
    let id = payload.id.map(AccountId::new);
    let details = parse_details(payload)?;
    Ok(AccountDraft { id, details })
}

fn parse_account_id(raw: &str) -> Result<AccountId, Error> {
    raw.parse::<i64>()
        .map(AccountId::new)
        .map_err(|_| invalid_id_error(ID, raw))
}

fn account_not_found(id: AccountId) -> Error {
    Error::not_found(format!("Account not found with id: {id}"))
}

/// List every stored account.
#[utoipa::path(
    get,
    path = "/api/v1/accounts",
    responses(
        (status = 200, description = "All accounts", body = [AccountResponse]),
        (status = 503, description = "Account store unavailable", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "listAccounts"
)]
#[get("/accounts")]
pub async fn list_accounts(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<AccountResponse>>> {
    let accounts = state.accounts_query.list_accounts().await?;
    Ok(web::Json(
        accounts.into_iter().map(AccountResponse::from).collect(),
    ))
}

/// Fetch one account.
#[utoipa::path(
    get,
    path = "/api/v1/accounts/{id}",
    params(("id" = i64, Path, description = "Account identifier")),
    responses(
        (status = 200, description = "Account", body = AccountResponse),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Unknown account", body = ErrorSchema),
        (status = 503, description = "Account store unavailable", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "getAccount"
)]
#[get("/accounts/{id}")]
pub async fn get_account(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<AccountResponse>> {
    let id = parse_account_id(&path)?;
    let account = state
        .accounts_query
        .get_account(id)
        .await?
        .ok_or_else(|| account_not_found(id))?;
    Ok(web::Json(AccountResponse::from(account)))
}

/// Create an account, optionally under a caller-chosen identifier.
#[utoipa::path(
    post,
    path = "/api/v1/accounts",
    request_body = AccountRequest,
    responses(
        (status = 201, description = "Created account", body = AccountResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Identifier already taken", body = ErrorSchema),
        (status = 503, description = "Account store unavailable", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "createAccount"
)]
#[post("/accounts")]
pub async fn create_account(
    state: web::Data<HttpState>,
    payload: web::Json<AccountRequest>,
) -> ApiResult<HttpResponse> {
    let draft = parse_draft(payload.into_inner())?;
    let created = state.accounts.create_account(draft).await?;
    Ok(HttpResponse::Created().json(AccountResponse::from(created)))
}

/// Replace every mutable field of an account.
#[utoipa::path(
    put,
    path = "/api/v1/accounts/{id}",
    params(("id" = i64, Path, description = "Account identifier")),
    request_body = AccountRequest,
    responses(
        (status = 200, description = "Updated account", body = AccountResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown account", body = ErrorSchema),
        (status = 503, description = "Account store unavailable", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "updateAccount"
)]
#[put("/accounts/{id}")]
pub async fn update_account(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<AccountRequest>,
) -> ApiResult<web::Json<AccountResponse>> {
    let id = parse_account_id(&path)?;
    let details = parse_details(payload.into_inner())?;
    let updated = state.accounts.update_account(id, details).await?;
    Ok(web::Json(AccountResponse::from(updated)))
}

/// Delete an account.
#[utoipa::path(
    delete,
    path = "/api/v1/accounts/{id}",
    params(("id" = i64, Path, description = "Account identifier")),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Unknown account", body = ErrorSchema),
        (status = 503, description = "Account store unavailable", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "deleteAccount"
)]
#[delete("/accounts/{id}")]
pub async fn delete_account(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_account_id(&path)?;
    state.accounts.delete_account(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Register the account handlers on a scope or app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_accounts)
        .service(get_account)
        .service(create_account)
        .service(update_account)
        .service(delete_account);
}

#[cfg(test)]
#[path = "accounts_tests.rs"]
mod tests;
