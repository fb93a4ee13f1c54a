//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Agent id must be between 1 and 999999")]
    InvalidAgentId,

    #[error("Request timeout must be between 1 and 300000 ms")]
    InvalidTimeout,

    #[error("Base URL must start with http:// or https://")]
    InvalidBaseUrl,
}
