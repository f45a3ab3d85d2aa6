//! Configuration error types.

use thiserror::Error;

use crate::logging::ParseLevelError;

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
    #[error("invalid LOG_LEVEL value: {0}")]
    InvalidLogLevel(#[from] ParseLevelError),
}
