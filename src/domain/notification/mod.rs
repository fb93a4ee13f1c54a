//! Inbound payment notifications.
//!
//! # Module Structure
//!
//! - `payment_notification` - Typed notification and form parsing
//! - `verifier` - Signature verification (total, never fails)
//! - `webhook_errors` - Rejection reasons and HTTP mapping

mod payment_notification;
mod verifier;
mod webhook_errors;

pub use payment_notification::PaymentNotification;
pub use verifier::{verify_notification_form, verify_notification_sign, NotificationVerifier};
pub use webhook_errors::{WebhookError, WebhookResult};
