//! Webhook boundary guard.
//!
//! Turns an untrusted form delivery into a verified `PaymentNotification`
//! before any business logic sees it. Every rejection maps to
//! `403 Forbidden` via [`WebhookError::status_code`].

use std::collections::HashMap;

use crate::config::PayinConfig;
use crate::domain::notification::{NotificationVerifier, PaymentNotification, WebhookError};

/// Guard that admits only correctly signed notifications.
#[derive(Debug, Clone)]
pub struct WebhookGuard {
    verifier: NotificationVerifier,
}

impl WebhookGuard {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            verifier: NotificationVerifier::new(secret),
        }
    }

    pub fn from_config(config: &PayinConfig) -> Self {
        Self {
            verifier: NotificationVerifier::from_config(config),
        }
    }

    /// Checks a raw delivery.
    ///
    /// A payload that cannot be parsed is reported as `InvalidSignature`:
    /// the caller learns only that the delivery is untrusted.
    pub fn check(
        &self,
        form: &HashMap<String, String>,
    ) -> Result<PaymentNotification, WebhookError> {
        let order_id = form.get("orderId").map(String::as_str).unwrap_or_default();

        match self.verifier.verify_form(form) {
            Ok(notification) => {
                tracing::debug!(
                    order_id = %notification.order_id,
                    payment_id = notification.payment_id,
                    payment_status = %notification.payment_status,
                    "Payment notification verified"
                );
                Ok(notification)
            }
            Err(WebhookError::MalformedField(field)) => {
                tracing::warn!(
                    order_id = %order_id,
                    field = field,
                    "Rejected payment notification with malformed field"
                );
                Err(WebhookError::InvalidSignature)
            }
            Err(e) => {
                tracing::warn!(order_id = %order_id, reason = %e, "Rejected payment notification");
                Err(e)
            }
        }
    }
}
