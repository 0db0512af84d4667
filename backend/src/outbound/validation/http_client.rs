//! Reqwest-backed validation service client.
//!
//! This adapter owns transport details only: URL construction, the request
//! timeout, status mapping and JSON decoding into a [`ValidationView`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::dto::ValidationAccountDto;
use crate::domain::ports::{AccountValidationClient, ValidationClientError};
use crate::domain::{AccountId, ValidationView};

/// Validation client issuing `GET {base}/accounts/{id}`.
pub struct HttpAccountValidationClient {
    client: Client,
    base_url: Url,
}

impl HttpAccountValidationClient {
    /// Build a client whose every request is bounded by `timeout`.
    /// ```rust,ignore
    /// let client = HttpAccountValidationClient::new(base_url, Duration::from_secs(2))?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn account_url(&self, id: AccountId) -> Result<Url, ValidationClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ValidationClientError::transport(format!(
                    "validation base url cannot carry a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["accounts", &id.to_string()]);
        Ok(url)
    }
}

#[async_trait]
impl AccountValidationClient for HttpAccountValidationClient {
    async fn fetch(&self, id: AccountId) -> Result<ValidationView, ValidationClientError> {
        let response = self
            .client
            .get(self.account_url(id)?)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ValidationClientError::not_found(id.get()));
        }
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(ValidationClientError::transport(format!(
                "status {}",
                status.as_u16()
            )));
        }

        parse_view(body.as_ref())
    }
}

fn parse_view(body: &[u8]) -> Result<ValidationView, ValidationClientError> {
    let decoded: ValidationAccountDto = serde_json::from_slice(body).map_err(|error| {
        ValidationClientError::decode(format!("invalid validation payload: {error}"))
    })?;
    Ok(decoded.into_view())
}

fn map_transport_error(error: reqwest::Error) -> ValidationClientError {
    if error.is_timeout() {
        ValidationClientError::timeout(error.to_string())
    } else {
        ValidationClientError::transport(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AccountStatus;
    use rstest::rstest;

    fn client(base: &str) -> HttpAccountValidationClient {
        HttpAccountValidationClient::new(
            Url::parse(base).expect("valid url"),
            Duration::from_millis(200),
        )
        .expect("client builds")
    }

    #[rstest]
    #[case("http://localhost:1080", "http://localhost:1080/accounts/42")]
    #[case("http://localhost:1080/", "http://localhost:1080/accounts/42")]
    #[case("http://validator/api/", "http://validator/api/accounts/42")]
    fn builds_account_url(#[case] base: &str, #[case] expected: &str) {
        let url = client(base)
            .account_url(AccountId::new(42))
            .expect("url builds");
        assert_eq!(url.as_str(), expected);
    }

    #[rstest]
    fn parses_reported_view() {
        let view = parse_view(br#"{"id":42,"accountType":"savings","status":"ACTIVE","name":"Ada"}"#)
            .expect("decodes");

        assert_eq!(view.id, Some(AccountId::new(42)));
        assert_eq!(view.account_type.as_deref(), Some("savings"));
        assert_eq!(view.status, Some(AccountStatus::Active));
    }

    #[rstest]
    fn unknown_status_is_dropped() {
        let view = parse_view(br#"{"status":"Frozen"}"#).expect("decodes");
        assert_eq!(view.status, None);
    }

    #[rstest]
    fn malformed_body_is_a_decode_error() {
        let err = parse_view(b"<html>").expect_err("not json");
        assert!(matches!(err, ValidationClientError::Decode { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn unreachable_service_is_a_transport_error() {
        // Port 9 (discard) is closed on test hosts.
        let err = client("http://127.0.0.1:9")
            .fetch(AccountId::new(1))
            .await
            .expect_err("nothing listening");
        assert!(matches!(
            err,
            ValidationClientError::Transport { .. } | ValidationClientError::Timeout { .. }
        ));
    }
}
