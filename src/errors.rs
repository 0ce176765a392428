//! Centralized error handling.
//!
//! Configuration problems are detected once at startup and reported with
//! the name of the offending field.

use thiserror::Error;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration field {name} is empty")]
    EmptyField { name: &'static str },
}

/// Convenience alias for configuration results
pub type ConfigResult<T> = Result<T, ConfigError>;
