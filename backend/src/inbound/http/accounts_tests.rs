//! Tests for account HTTP handlers.

use super::*;
use crate::domain::ports::{MockAccountsCommand, MockAccountsQuery};
use crate::domain::{BankCode, ErrorCode};
use crate::inbound::http::error::json_error_handler;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use chrono::NaiveDate;
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;

fn details(account_number: &str) -> AccountDetails {
    AccountDetails {
        name: Some("Ada".to_owned()),
        email: Some("ada@example.com".to_owned()),
        account_number: account_number.to_owned(),
        account_type: Some("savings".to_owned()),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 31),
        bank_code: BankCode::new("IFSC001").expect("valid bank code"),
    }
}

fn payload() -> Value {
    json!({
        "name": "Ada",
        "email": "ada@example.com",
        "accountNumber": "ACC-1",
        "accountType": "savings",
        "dob": "1990-01-31",
        "bankCode": "IFSC001"
    })
}

fn test_app(
    query: MockAccountsQuery,
    command: MockAccountsCommand,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(Arc::new(query), Arc::new(command));
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(web::scope("/api/v1").configure(configure))
}

async fn error_field(res: actix_web::dev::ServiceResponse) -> Option<String> {
    let body: Value = actix_test::read_body_json(res).await;
    body["details"]["field"].as_str().map(str::to_owned)
}

#[rstest]
#[actix_web::test]
async fn list_returns_every_account() {
    let mut query = MockAccountsQuery::new();
    query.expect_list_accounts().times(1).returning(|| {
        Ok(vec![
            Account::new(AccountId::new(1), details("ACC-1")),
            Account::new(AccountId::new(2), details("ACC-2")),
        ])
    });
    let app = actix_test::init_service(test_app(query, MockAccountsCommand::new())).await;

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/accounts")
        .to_request();
    let body: Vec<AccountResponse> = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.len(), 2);
    assert_eq!(body[1].account_number, "ACC-2");
}

#[rstest]
#[actix_web::test]
async fn get_serialises_camel_case_account() {
    let mut query = MockAccountsQuery::new();
    query
        .expect_get_account()
        .withf(|id| *id == AccountId::new(42))
        .returning(|id| Ok(Some(Account::new(id, details("ACC-42")))));
    let app = actix_test::init_service(test_app(query, MockAccountsCommand::new())).await;

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/accounts/42")
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body,
        json!({
            "id": 42,
            "name": "Ada",
            "email": "ada@example.com",
            "accountNumber": "ACC-42",
            "accountType": "savings",
            "dob": "1990-01-31",
            "bankCode": "IFSC001"
        })
    );
}

#[rstest]
#[actix_web::test]
async fn get_absent_account_is_404() {
    let mut query = MockAccountsQuery::new();
    query.expect_get_account().returning(|_| Ok(None));
    let app = actix_test::init_service(test_app(query, MockAccountsCommand::new())).await;

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/accounts/7")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["message"], "Account not found with id: 7");
}

#[rstest]
#[case("abc")]
#[case("9223372036854775808")]
#[actix_web::test]
async fn malformed_path_id_is_400(#[case] raw: &str) {
    let app = actix_test::init_service(test_app(
        MockAccountsQuery::new(),
        MockAccountsCommand::new(),
    ))
    .await;

    let req = actix_test::TestRequest::get()
        .uri(&format!("/api/v1/accounts/{raw}"))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_field(res).await.as_deref(), Some("id"));
}

#[rstest]
#[actix_web::test]
async fn create_returns_201_with_assigned_id() {
    let mut command = MockAccountsCommand::new();
    command
        .expect_create_account()
        .withf(|draft| draft.id.is_none() && draft.details == details("ACC-1"))
        .times(1)
        .returning(|draft| Ok(Account::new(AccountId::new(1), draft.details)));
    let app = actix_test::init_service(test_app(MockAccountsQuery::new(), command)).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/accounts")
        .set_json(payload())
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: AccountResponse = actix_test::read_body_json(res).await;
    assert_eq!(body.id, 1);
}

#[rstest]
#[actix_web::test]
async fn create_conflict_is_409() {
    let mut command = MockAccountsCommand::new();
    command.expect_create_account().returning(|draft| {
        let id = draft.id.map_or(0, AccountId::get);
        Err(Error::conflict(format!("Account with id {id} already exists.")))
    });
    let app = actix_test::init_service(test_app(MockAccountsQuery::new(), command)).await;

    let mut body = payload();
    body["id"] = json!(5);
    let req = actix_test::TestRequest::post()
        .uri("/api/v1/accounts")
        .set_json(body)
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "conflict");
    assert_eq!(body["message"], "Account with id 5 already exists.");
}

#[rstest]
#[case("accountNumber")]
#[case("bankCode")]
#[actix_web::test]
async fn create_missing_field_is_400(#[case] field: &str) {
    let mut command = MockAccountsCommand::new();
    command.expect_create_account().never();
    let app = actix_test::init_service(test_app(MockAccountsQuery::new(), command)).await;

    let mut body = payload();
    body.as_object_mut().expect("object").remove(field);
    let req = actix_test::TestRequest::post()
        .uri("/api/v1/accounts")
        .set_json(body)
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_field(res).await.as_deref(), Some(field));
}

#[rstest]
#[actix_web::test]
async fn create_accepts_sparse_account() {
    let mut command = MockAccountsCommand::new();
    command
        .expect_create_account()
        .withf(|draft| {
            draft.details.name.is_none()
                && draft.details.email.is_none()
                && draft.details.account_type.is_none()
                && draft.details.date_of_birth.is_none()
                && draft.details.account_number == "ACC-1"
        })
        .times(1)
        .returning(|draft| Ok(Account::new(AccountId::new(1), draft.details)));
    let app = actix_test::init_service(test_app(MockAccountsQuery::new(), command)).await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/accounts")
        .set_json(json!({ "accountNumber": "ACC-1", "bankCode": "IFSC001" }))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["name"], Value::Null);
    assert_eq!(body["accountType"], Value::Null);
    assert_eq!(body["bankCode"], "IFSC001");
}

#[rstest]
#[case("dob", json!("31-01-1990"))]
#[case("bankCode", json!("  "))]
#[actix_web::test]
async fn create_invalid_field_is_400(#[case] field: &str, #[case] value: Value) {
    let app = actix_test::init_service(test_app(
        MockAccountsQuery::new(),
        MockAccountsCommand::new(),
    ))
    .await;

    let mut body = payload();
    body[field] = value;
    let req = actix_test::TestRequest::post()
        .uri("/api/v1/accounts")
        .set_json(body)
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_field(res).await.as_deref(), Some(field));
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_400() {
    let app = actix_test::init_service(test_app(
        MockAccountsQuery::new(),
        MockAccountsCommand::new(),
    ))
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/accounts")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
}

#[rstest]
#[actix_web::test]
async fn update_uses_path_id_and_ignores_body_id() {
    let mut command = MockAccountsCommand::new();
    command
        .expect_update_account()
        .withf(|id, details| *id == AccountId::new(9) && details.account_number == "ACC-1")
        .times(1)
        .returning(|id, details| Ok(Account::new(id, details)));
    let app = actix_test::init_service(test_app(MockAccountsQuery::new(), command)).await;

    let mut body = payload();
    body["id"] = json!(1234);
    let req = actix_test::TestRequest::put()
        .uri("/api/v1/accounts/9")
        .set_json(body)
        .to_request();
    let res: AccountResponse = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(res.id, 9);
}

#[rstest]
#[actix_web::test]
async fn update_unknown_account_is_404() {
    let mut command = MockAccountsCommand::new();
    command
        .expect_update_account()
        .returning(|id, _| Err(Error::not_found(format!("Account not found with id: {id}"))));
    let app = actix_test::init_service(test_app(MockAccountsQuery::new(), command)).await;

    let req = actix_test::TestRequest::put()
        .uri("/api/v1/accounts/3")
        .set_json(payload())
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn delete_returns_204() {
    let mut command = MockAccountsCommand::new();
    command
        .expect_delete_account()
        .withf(|id| *id == AccountId::new(6))
        .times(1)
        .returning(|_| Ok(()));
    let app = actix_test::init_service(test_app(MockAccountsQuery::new(), command)).await;

    let req = actix_test::TestRequest::delete()
        .uri("/api/v1/accounts/6")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}

#[rstest]
#[actix_web::test]
async fn store_outage_is_503() {
    let mut query = MockAccountsQuery::new();
    query
        .expect_list_accounts()
        .returning(|| Err(Error::service_unavailable("account store unavailable: refused")));
    let app = actix_test::init_service(test_app(query, MockAccountsCommand::new())).await;

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/accounts")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "service_unavailable");
}

#[rstest]
fn parse_draft_keeps_optional_dob_absent() {
    let request = AccountRequest {
        dob: None,
        ..serde_json::from_value(payload()).expect("valid payload")
    };

    let draft = parse_draft(request).expect("valid draft");

    assert_eq!(draft.details.date_of_birth, None);
    assert_eq!(draft.id, None);
}

#[rstest]
fn response_formats_dob_as_date() {
    let response = AccountResponse::from(Account::new(AccountId::new(1), details("ACC-1")));
    assert_eq!(response.dob.as_deref(), Some("1990-01-31"));
}

#[rstest]
fn invalid_request_code_for_missing_fields() {
    let err = parse_details(AccountRequest::default()).expect_err("empty payload");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}
