//! Crate-wide error definitions.

use thiserror::Error;

use crate::config::loader::ConfigError;

/// Errors raised while setting up the request logging middleware.
///
/// Everything here is fatal at construction time. Nothing in this crate
/// fails per request: an unsupported verbosity is rejected when the
/// configuration is parsed, and a provider that cannot produce a handle
/// aborts setup.
#[derive(Debug, Error)]
pub enum RequestLoggerError {
    /// The logging provider could not produce a named handle.
    #[error("failed to obtain logger handle \"{name}\": {reason}")]
    Handle { name: String, reason: String },

    /// Configuration could not be loaded or validated.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for setup operations.
pub type RequestLoggerResult<T> = Result<T, RequestLoggerError>;
