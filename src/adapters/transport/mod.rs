//! Gateway transport adapters.
//!
//! - `HttpTransport` - reqwest client for the live gateway
//! - `MockTransport` - scripted, recording transport for tests

mod http_transport;
mod mock_transport;

pub use http_transport::HttpTransport;
pub use mock_transport::{MockTransport, RecordedPost};
