//! payin-sdk - Client SDK for the Payin-Payout payment gateway
//!
//! This crate builds signed, form-encoded requests for payment registration,
//! token-based recurring charges, invoices and payment-method lookup, and it
//! verifies inbound payment notifications.
//!
//! Every request and notification is authenticated with the gateway's
//! signature scheme: `md5(field1#field2#...#md5(secret))` over a fixed,
//! operation-specific field list.
//!
//! # Example
//!
//! ```
//! use payin_sdk::domain::signature::{sign_token_v2, TokenV2SignParams};
//!
//! let sign = sign_token_v2(&TokenV2SignParams { agent_id: 8686, preference: 125 }, "mysecret");
//! assert_eq!(sign.as_str().len(), 32);
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
