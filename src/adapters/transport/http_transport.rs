//! reqwest-backed gateway transport.
//!
//! Posts `application/x-www-form-urlencoded` bodies to the configured host.
//! Redirect-expecting calls use a client that does not follow redirects so
//! the `Location` header can be handed back to the caller.
//!
//! # Configuration
//!
//! ```ignore
//! let config = PayinConfig::new(agent_id, secret).with_sandbox(true);
//! let transport = HttpTransport::new(&config)?;
//! let service = PayinService::new(config, Arc::new(transport));
//! ```

use async_trait::async_trait;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;

use crate::config::PayinConfig;
use crate::domain::foundation::PayinError;
use crate::domain::requests::FormData;
use crate::ports::{GatewayTransport, TransportResponse};

/// HTTP transport for the live gateway.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    http_client: reqwest::Client,
    manual_redirect_client: reqwest::Client,
}

impl HttpTransport {
    /// Builds clients honoring the configured host and timeout.
    ///
    /// # Errors
    ///
    /// Returns `PayinError::Network` if the TLS backend cannot be initialized.
    pub fn new(config: &PayinConfig) -> Result<Self, PayinError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| PayinError::network(e.to_string()))?;
        let manual_redirect_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .redirect(Policy::none())
            .build()
            .map_err(|e| PayinError::network(e.to_string()))?;

        Ok(Self {
            base_url: config.effective_base_url().to_string(),
            http_client,
            manual_redirect_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl GatewayTransport for HttpTransport {
    async fn post_form(
        &self,
        path: &str,
        form: &FormData,
        expect_redirect: bool,
    ) -> Result<TransportResponse, PayinError> {
        let url = format!("{}{}", self.base_url, path);
        let client = if expect_redirect {
            &self.manual_redirect_client
        } else {
            &self.http_client
        };

        tracing::debug!(url = %url, fields = form.len(), "Posting gateway form");
        let response = client
            .post(&url)
            .form(form.as_pairs())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(url = %url, error = %e, "Gateway request failed");
                PayinError::network(format!("Network error calling {}: {}", url, e))
            })?;

        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let text = response
            .text()
            .await
            .map_err(|e| PayinError::network(format!("Failed to read response from {}: {}", url, e)))?;

        Ok(read_response(status, location, &text, expect_redirect))
    }
}

/// Shapes a raw HTTP answer. Non-JSON bodies are kept as a JSON string.
fn read_response(
    status: u16,
    location: Option<String>,
    text: &str,
    expect_redirect: bool,
) -> TransportResponse {
    if expect_redirect && (300..400).contains(&status) {
        return TransportResponse {
            status,
            body: None,
            redirect_url: location,
        };
    }

    let body = if text.trim().is_empty() {
        None
    } else {
        Some(
            serde_json::from_str(text)
                .unwrap_or_else(|_| serde_json::Value::String(text.to_string())),
        )
    };

    TransportResponse {
        status,
        body,
        redirect_url: None,
    }
}
