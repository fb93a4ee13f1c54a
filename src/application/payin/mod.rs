//! Gateway operations.

mod payin_service;

pub use payin_service::PayinService;
