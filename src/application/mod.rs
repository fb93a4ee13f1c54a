//! Application layer - Gateway operations.
//!
//! This layer orchestrates signing, form encoding and the transport port.

pub mod payin;

pub use payin::PayinService;
