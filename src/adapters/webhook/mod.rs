//! Inbound webhook adapters.

mod guard;

pub use guard::WebhookGuard;
