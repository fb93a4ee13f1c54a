//! Webhook error types for payment notifications.
//!
//! Every variant is a rejection: the delivery is untrusted and must not reach
//! business logic. Malformed payloads are treated like forged ones.

use http::StatusCode;
use thiserror::Error;

/// Errors that occur while accepting an inbound notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebhookError {
    /// The delivery carries no `sign` field.
    #[error("Missing signature")]
    MissingSignature,

    /// The recomputed signature does not match the claimed one.
    #[error("Invalid signature")]
    InvalidSignature,

    /// A required field is absent or not in the expected format.
    #[error("Malformed field: {0}")]
    MalformedField(&'static str),
}

impl WebhookError {
    /// Maps the error to the HTTP status returned to the gateway.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebhookError::MissingSignature
            | WebhookError::InvalidSignature
            | WebhookError::MalformedField(_) => StatusCode::FORBIDDEN,
        }
    }
}

/// Outcome of a notification handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WebhookResult {
    pub acknowledged: bool,
}

impl WebhookResult {
    pub fn acknowledged() -> Self {
        Self { acknowledged: true }
    }

    pub fn rejected() -> Self {
        Self {
            acknowledged: false,
        }
    }

    /// HTTP status for the handler outcome.
    pub fn status_code(&self) -> StatusCode {
        if self.acknowledged {
            StatusCode::OK
        } else {
            StatusCode::BAD_REQUEST
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_reason() {
        assert_eq!(WebhookError::MissingSignature.to_string(), "Missing signature");
        assert_eq!(WebhookError::InvalidSignature.to_string(), "Invalid signature");
        assert_eq!(
            WebhookError::MalformedField("paymentId").to_string(),
            "Malformed field: paymentId"
        );
    }

    #[test]
    fn every_error_is_forbidden() {
        for err in [
            WebhookError::MissingSignature,
            WebhookError::InvalidSignature,
            WebhookError::MalformedField("amount"),
        ] {
            assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        }
    }

    #[test]
    fn handler_result_status() {
        assert_eq!(WebhookResult::acknowledged().status_code(), StatusCode::OK);
        assert_eq!(WebhookResult::rejected().status_code(), StatusCode::BAD_REQUEST);
    }
}
