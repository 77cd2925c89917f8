//! Configuration error types

use thiserror::Error;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors; all fatal before startup
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Required setting '{0}' is missing or empty")]
    Missing(&'static str),

    #[error("Setting '{name}' is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}
