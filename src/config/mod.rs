//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `PAYIN` prefix and
//! nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use payin_sdk::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Gateway host: {}", config.gateway.effective_base_url());
//! ```

mod error;
mod gateway;

pub use error::{ConfigError, ValidationError};
pub use gateway::{PayinConfig, PRODUCTION_BASE_URL, SANDBOX_BASE_URL};

use serde::Deserialize;

/// Root configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Merchant credentials and endpoint selection
    pub gateway: PayinConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PAYIN` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `PAYIN__GATEWAY__AGENT_ID=8686` -> `gateway.agent_id = 8686`
    /// - `PAYIN__GATEWAY__SANDBOX=true` -> `gateway.sandbox = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or cannot be
    /// parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PAYIN")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.gateway.validate()
    }
}
