//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `transport` - Gateway transport implementations (reqwest, recording mock)
//! - `webhook` - Inbound notification guard

pub mod transport;
pub mod webhook;

pub use transport::{HttpTransport, MockTransport, RecordedPost};
pub use webhook::WebhookGuard;
