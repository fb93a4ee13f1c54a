//! Foundation module - Shared gateway vocabulary.
//!
//! Contains the status and method codes the gateway speaks, its timestamp
//! format, and the error type returned by outbound operations.

mod agent_time;
mod codes;
mod errors;

pub use agent_time::{agent_time_now, format_agent_time, parse_agent_time, AGENT_TIME_FORMAT};
pub use codes::{Currency, DiscountType, P2PType, PaymentPreference, PaymentStatus, ProductUnit};
pub use errors::PayinError;
