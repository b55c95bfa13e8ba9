//! Paired inbound/outbound logger handles.

use std::sync::Arc;

use serde_json::Value;

use crate::config::schema::Verbosity;
use crate::error::RequestLoggerResult;
use crate::logging::provider::{LogHandle, LogProvider};

/// Handle name for inbound request emissions.
pub const INBOUND_LOGGER: &str = "http-in";

/// Handle name for outbound response emissions.
pub const OUTBOUND_LOGGER: &str = "http-out";

/// The two logger handles used by the middleware.
///
/// Both handles are obtained once at construction and shared read-only
/// by every in-flight request; no further handles are created after
/// setup.
pub struct DualLogger {
    input: Arc<dyn LogHandle>,
    output: Arc<dyn LogHandle>,
}

impl DualLogger {
    /// Obtain the inbound and outbound handles, in that order.
    ///
    /// A provider failure aborts setup.
    pub fn new(provider: &dyn LogProvider) -> RequestLoggerResult<Self> {
        let input = provider.get_logger(INBOUND_LOGGER)?;
        let output = provider.get_logger(OUTBOUND_LOGGER)?;
        Ok(Self { input, output })
    }

    /// Emit on the inbound handle at the given verbosity.
    pub fn emit_input(&self, verbosity: Verbosity, message: &str, metadata: Option<&Value>) {
        dispatch(self.input.as_ref(), verbosity, message, metadata);
    }

    /// Emit on the outbound handle at the given verbosity.
    pub fn emit_output(&self, verbosity: Verbosity, message: &str, metadata: Option<&Value>) {
        dispatch(self.output.as_ref(), verbosity, message, metadata);
    }
}

/// Select the handle method named by the verbosity value.
///
/// Exhaustive match: adding a verbosity without a corresponding handle
/// method is a compile error, not a request-time failure.
fn dispatch(handle: &dyn LogHandle, verbosity: Verbosity, message: &str, metadata: Option<&Value>) {
    match verbosity {
        Verbosity::Debug => handle.debug(message, metadata),
        Verbosity::Info => handle.info(message, metadata),
        Verbosity::Warn => handle.warn(message, metadata),
        Verbosity::Error => handle.error(message, metadata),
        Verbosity::Log => handle.log(message, metadata),
    }
}
