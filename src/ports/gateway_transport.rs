//! Gateway transport port for outbound form posts.
//!
//! Defines the contract for delivering signed, form-encoded requests to the
//! gateway. `HttpTransport` implements it over reqwest and `MockTransport`
//! replays scripted answers in tests; callers may plug in their own.
//!
//! # Design
//!
//! - **Form in, JSON out**: every gateway endpoint takes
//!   `application/x-www-form-urlencoded` and answers with JSON or a redirect
//! - **No status interpretation**: the service decides what a status means

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::domain::foundation::PayinError;
use crate::domain::requests::FormData;

/// Port for posting forms to the gateway.
#[async_trait]
pub trait GatewayTransport: Send + Sync {
    /// POST `form` to `path` (relative to the configured host).
    ///
    /// When `expect_redirect` is true the implementation must not follow
    /// redirects and should report the `Location` header in
    /// [`TransportResponse::redirect_url`].
    ///
    /// # Errors
    ///
    /// Returns `PayinError::Network` if the gateway could not be reached.
    async fn post_form(
        &self,
        path: &str,
        form: &FormData,
        expect_redirect: bool,
    ) -> Result<TransportResponse, PayinError>;
}

/// Raw gateway answer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,

    /// Parsed JSON body, if the body was JSON
    pub body: Option<serde_json::Value>,

    /// `Location` header of a redirect
    pub redirect_url: Option<String>,
}

impl TransportResponse {
    /// 200 response carrying a JSON body.
    pub fn json_body(body: serde_json::Value) -> Self {
        Self {
            status: 200,
            body: Some(body),
            redirect_url: None,
        }
    }

    /// 302 response pointing at `location`.
    pub fn redirect(location: impl Into<String>) -> Self {
        Self {
            status: 302,
            body: None,
            redirect_url: Some(location.into()),
        }
    }

    /// Response with a status and no body.
    pub fn status_only(status: u16) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    /// True for 2xx and 3xx statuses.
    pub fn is_success(&self) -> bool {
        (200..400).contains(&self.status)
    }

    /// Decodes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns `PayinError::Api` if there is no body or it does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, PayinError> {
        let body = self
            .body
            .clone()
            .ok_or_else(|| PayinError::api("Empty response body", self.status, None))?;
        serde_json::from_value(body).map_err(|e| {
            PayinError::api(
                format!("Unexpected response body: {}", e),
                self.status,
                self.body.as_ref().map(|b| b.to_string()),
            )
        })
    }
}
