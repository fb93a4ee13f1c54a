//! Gateway (merchant) configuration

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Production cabinet host.
pub const PRODUCTION_BASE_URL: &str = "https://lk.payin-payout.net";

/// Sandbox host used when `sandbox` is set.
pub const SANDBOX_BASE_URL: &str = "https://dev1.payin-payout.net";

const MAX_AGENT_ID: u32 = 999_999;
const MAX_TIMEOUT_MS: u64 = 300_000;

/// Merchant credentials and endpoint selection.
///
/// The secret never leaves the process: it only enters signature input
/// after being digested.
#[derive(Debug, Clone, Deserialize)]
pub struct PayinConfig {
    /// Merchant identifier issued by the gateway
    pub agent_id: u32,

    /// Shared signing secret
    pub secret: SecretString,

    /// Use the sandbox host instead of production
    #[serde(default)]
    pub sandbox: bool,

    /// Explicit host, overrides `sandbox`
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    30_000
}

impl PayinConfig {
    /// Production configuration with default timeout.
    pub fn new(agent_id: u32, secret: impl Into<String>) -> Self {
        Self {
            agent_id,
            secret: SecretString::new(secret.into()),
            sandbox: false,
            base_url: None,
            timeout_ms: default_timeout_ms(),
        }
    }

    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Host all requests are sent to, without a trailing slash.
    pub fn effective_base_url(&self) -> &str {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/'),
            None if self.sandbox => SANDBOX_BASE_URL,
            None => PRODUCTION_BASE_URL,
        }
    }

    /// Absolute URL for a gateway path such as `/api/shop`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.effective_base_url(), path)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Validate gateway configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.agent_id == 0 || self.agent_id > MAX_AGENT_ID {
            return Err(ValidationError::InvalidAgentId);
        }
        if self.secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("SECRET"));
        }
        if self.timeout_ms == 0 || self.timeout_ms > MAX_TIMEOUT_MS {
            return Err(ValidationError::InvalidTimeout);
        }
        if let Some(url) = &self.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidBaseUrl);
            }
        }
        Ok(())
    }
}
