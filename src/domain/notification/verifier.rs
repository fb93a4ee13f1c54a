//! Notification signature verification.
//!
//! Recomputes the notification signature over the delivery's own fields and
//! compares it with the claimed one. Verification is total: it returns a
//! boolean and never fails, so an attacker-controlled payload cannot crash it.

use std::collections::HashMap;

use secrecy::{ExposeSecret, SecretString};

use super::payment_notification::PaymentNotification;
use super::webhook_errors::WebhookError;
use crate::config::PayinConfig;
use crate::domain::foundation::PayinError;
use crate::domain::signature::Signable;

/// Returns true iff `notification.sign` matches the signature computed with `secret`.
///
/// The comparison runs in constant time.
pub fn verify_notification_sign(notification: &PaymentNotification, secret: &str) -> bool {
    notification
        .signing_params()
        .sign(secret)
        .matches(&notification.sign)
}

/// Parses and verifies a raw delivery. A payload that fails to parse is not trusted.
pub fn verify_notification_form(form: &HashMap<String, String>, secret: &str) -> bool {
    PaymentNotification::from_form(form)
        .map(|notification| verify_notification_sign(&notification, secret))
        .unwrap_or(false)
}

/// Verifier bound to the merchant secret.
#[derive(Debug, Clone)]
pub struct NotificationVerifier {
    secret: SecretString,
}

impl NotificationVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: SecretString::new(secret.into()),
        }
    }

    pub fn from_config(config: &PayinConfig) -> Self {
        Self {
            secret: config.secret.clone(),
        }
    }

    pub fn verify(&self, notification: &PaymentNotification) -> bool {
        verify_notification_sign(notification, self.secret.expose_secret())
    }

    /// Like [`verify`](Self::verify), but a mismatch is a `PayinError::Signature`.
    pub fn verify_or_err(&self, notification: &PaymentNotification) -> Result<(), PayinError> {
        if self.verify(notification) {
            Ok(())
        } else {
            Err(PayinError::Signature(format!(
                "notification for order {} is not signed by this merchant",
                notification.order_id
            )))
        }
    }

    /// Parses a raw delivery and checks its signature.
    ///
    /// # Errors
    ///
    /// - `MissingSignature` if `sign` is absent or empty
    /// - `MalformedField` if a required field cannot be parsed
    /// - `InvalidSignature` if the recomputed signature differs
    pub fn verify_form(
        &self,
        form: &HashMap<String, String>,
    ) -> Result<PaymentNotification, WebhookError> {
        if form.get("sign").map_or(true, |sign| sign.is_empty()) {
            return Err(WebhookError::MissingSignature);
        }

        let notification = PaymentNotification::from_form(form)?;
        if !self.verify(&notification) {
            return Err(WebhookError::InvalidSignature);
        }

        Ok(notification)
    }
}
