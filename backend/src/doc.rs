//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: the account endpoints and the health probes
//! - **Schemas**: request/response payloads and the [`ErrorSchema`] /
//!   [`ErrorCodeSchema`] wrappers that describe domain errors without
//!   coupling domain types to utoipa
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::accounts::{AccountRequest, AccountResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Account service API",
        description = "CRUD over accounts, with validation lookups and best-effort notifications."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::accounts::list_accounts,
        crate::inbound::http::accounts::get_account,
        crate::inbound::http::accounts::create_account,
        crate::inbound::http::accounts::update_account,
        crate::inbound::http::accounts::delete_account,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(AccountRequest, AccountResponse, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "accounts", description = "Account lifecycle operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the registered paths and schema field structure.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/api/v1/accounts")]
    #[case("/api/v1/accounts/{id}")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn openapi_registers_path(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    fn account_item_path_exposes_every_method() {
        let doc = ApiDoc::openapi();
        let item = doc
            .paths
            .paths
            .get("/api/v1/accounts/{id}")
            .expect("account item path");

        assert!(item.get.is_some());
        assert!(item.put.is_some());
        assert!(item.delete.is_some());
    }

    #[rstest]
    fn openapi_error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
        assert_object_schema_has_field(error_schema, "traceId");
    }

    #[rstest]
    fn openapi_account_response_uses_camel_case() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let account = schemas.get("AccountResponse").expect("AccountResponse schema");

        assert_object_schema_has_field(account, "accountNumber");
        assert_object_schema_has_field(account, "bankCode");
    }
}
