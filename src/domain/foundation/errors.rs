//! Error types for gateway operations.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors returned by outbound gateway operations.
///
/// Signing and verification never produce these; they are total functions.
#[derive(Debug, Error)]
pub enum PayinError {
    /// The gateway answered with an error status or an unusable body.
    #[error("Gateway API error (HTTP {http_status}): {message}")]
    Api {
        message: String,
        http_status: u16,
        response_body: Option<String>,
    },

    /// The gateway could not be reached.
    #[error("Network error: {message}")]
    Network { message: String },

    /// A signature check failed.
    #[error("Signature verification failed: {0}")]
    Signature(String),

    /// Merchant configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl PayinError {
    /// Creates an API error.
    pub fn api(message: impl Into<String>, http_status: u16, response_body: Option<String>) -> Self {
        PayinError::Api {
            message: message.into(),
            http_status,
            response_body,
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        PayinError::Network {
            message: message.into(),
        }
    }

    /// Returns true if the operation may succeed when retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            PayinError::Network { .. } => true,
            PayinError::Api { http_status, .. } => *http_status >= 500,
            PayinError::Signature(_) | PayinError::Config(_) => false,
        }
    }

    /// HTTP status reported by the gateway, if any.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            PayinError::Api { http_status, .. } => Some(*http_status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_status_and_message() {
        let err = PayinError::api("HTTP 502: bad gateway", 502, Some("bad gateway".into()));
        assert_eq!(
            err.to_string(),
            "Gateway API error (HTTP 502): HTTP 502: bad gateway"
        );
        assert_eq!(err.http_status(), Some(502));
    }

    #[test]
    fn network_errors_are_retryable() {
        assert!(PayinError::network("connection reset").is_retryable());
    }

    #[test]
    fn server_side_api_errors_are_retryable() {
        assert!(PayinError::api("unavailable", 503, None).is_retryable());
        assert!(!PayinError::api("bad request", 400, None).is_retryable());
    }

    #[test]
    fn signature_errors_are_not_retryable() {
        let err = PayinError::Signature("mismatch".into());
        assert!(!err.is_retryable());
        assert_eq!(err.http_status(), None);
    }
}
