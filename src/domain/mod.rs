//! Domain layer containing signing rules and gateway types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared codes (payment status, methods, currencies) and errors
//! - `signature` - Digest primitive, signature builder and the six signing variants
//! - `notification` - Inbound notification parsing and verification
//! - `requests` - Outbound request models and form encoding

pub mod foundation;
pub mod notification;
pub mod requests;
pub mod signature;
