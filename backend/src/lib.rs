//! Account orchestration service.
//!
//! Coordinates an account store, a bank metadata store, a remote validation
//! service and two notification channels behind a REST API.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use middleware::Trace;
/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
