//! Process configuration sourced from environment variables.
//!
//! Loads a `.env` file (if present) via dotenvy in `main`, then reads the
//! recognized variables once into an immutable snapshot. Malformed values
//! fail startup with a descriptive error instead of carrying an invalid
//! sentinel into the snapshot.

mod error;

pub use error::ConfigError;

use std::env;

use crate::logging::LogLevel;

const ENV_ENVIRONMENT: &str = "NODE_ENV";
const ENV_PORT: &str = "PORT";
const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_PORT: u16 = 3000;

/// Immutable snapshot of the settings read once at process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Deployment environment name, e.g. "development" or "production".
    pub environment: String,
    /// TCP port the server is expected to bind.
    pub port: u16,
    /// Verbosity the logger is constructed with.
    pub log_level: LogLevel,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Missing variables fall back to defaults
    /// (`development` / `3000` / `info`); present but malformed `PORT` or
    /// `LOG_LEVEL` values are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the snapshot from an arbitrary variable source.
    ///
    /// Tests pass a map-backed closure here so they never have to mutate
    /// the real process environment.
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment =
            lookup(ENV_ENVIRONMENT).unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        let port = match lookup(ENV_PORT) {
            Some(raw) => raw
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value: raw, source })?,
            None => DEFAULT_PORT,
        };

        let log_level = match lookup(ENV_LOG_LEVEL) {
            Some(raw) => raw.parse()?,
            None => LogLevel::Info,
        };

        Ok(Self {
            environment,
            port,
            log_level,
        })
    }
}
