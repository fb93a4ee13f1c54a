//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `GatewayTransport` - Delivery of signed form posts to the gateway

mod gateway_transport;

pub use gateway_transport::{GatewayTransport, TransportResponse};
