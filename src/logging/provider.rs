//! Logger provider abstraction.
//!
//! The middleware never logs through process-wide mutable state; it
//! receives a provider capability at construction and obtains named
//! handles from it once.

use std::sync::Arc;

use serde_json::Value;

use crate::error::RequestLoggerError;

/// A named logger handle with one callable per verbosity value.
///
/// Each method takes a human-readable message and optional structured
/// metadata. Handles must be safe to invoke from concurrent requests.
pub trait LogHandle: Send + Sync {
    fn debug(&self, message: &str, metadata: Option<&Value>);
    fn info(&self, message: &str, metadata: Option<&Value>);
    fn warn(&self, message: &str, metadata: Option<&Value>);
    fn error(&self, message: &str, metadata: Option<&Value>);
    fn log(&self, message: &str, metadata: Option<&Value>);
}

/// Capability for obtaining named logger handles.
pub trait LogProvider {
    /// Obtain a handle for the given logger name.
    ///
    /// A failure here is fatal to middleware setup; it is never retried
    /// and never deferred to request time.
    fn get_logger(&self, name: &str) -> Result<Arc<dyn LogHandle>, RequestLoggerError>;
}

/// Provider backed by the `tracing` ecosystem.
///
/// Handles emit events carrying the handle name as a structured field;
/// the installed subscriber decides rendering and transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogProvider;

impl LogProvider for TracingLogProvider {
    fn get_logger(&self, name: &str) -> Result<Arc<dyn LogHandle>, RequestLoggerError> {
        Ok(Arc::new(TracingLogHandle {
            name: name.to_string(),
        }))
    }
}

struct TracingLogHandle {
    name: String,
}

impl LogHandle for TracingLogHandle {
    fn debug(&self, message: &str, metadata: Option<&Value>) {
        match metadata {
            Some(meta) => tracing::debug!(logger = %self.name, metadata = %meta, "{}", message),
            None => tracing::debug!(logger = %self.name, "{}", message),
        }
    }

    fn info(&self, message: &str, metadata: Option<&Value>) {
        match metadata {
            Some(meta) => tracing::info!(logger = %self.name, metadata = %meta, "{}", message),
            None => tracing::info!(logger = %self.name, "{}", message),
        }
    }

    fn warn(&self, message: &str, metadata: Option<&Value>) {
        match metadata {
            Some(meta) => tracing::warn!(logger = %self.name, metadata = %meta, "{}", message),
            None => tracing::warn!(logger = %self.name, "{}", message),
        }
    }

    fn error(&self, message: &str, metadata: Option<&Value>) {
        match metadata {
            Some(meta) => tracing::error!(logger = %self.name, metadata = %meta, "{}", message),
            None => tracing::error!(logger = %self.name, "{}", message),
        }
    }

    // tracing has no bare "log" level; emitted at INFO.
    fn log(&self, message: &str, metadata: Option<&Value>) {
        match metadata {
            Some(meta) => tracing::info!(logger = %self.name, metadata = %meta, "{}", message),
            None => tracing::info!(logger = %self.name, "{}", message),
        }
    }
}
