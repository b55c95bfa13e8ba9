//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Verbosity used for request/response emissions.
///
/// This is purely a dispatch key naming which method on a logger handle
/// is invoked; no severity ordering or comparison is applied anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Debug,
    Info,
    Warn,
    Error,
    Log,
}

impl Verbosity {
    /// Resolve an optional configured verbosity to the effective one.
    ///
    /// Absent configuration means INFO.
    pub fn resolve(configured: Option<Verbosity>) -> Verbosity {
        configured.unwrap_or(Verbosity::Info)
    }
}

/// Configuration for the request logging middleware.
///
/// Every field is independently optional; an empty config logs both
/// directions at INFO for every non-exempt path.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RequestLoggerConfig {
    /// Verbosity used for both emissions. INFO when absent.
    pub verbosity: Option<Verbosity>,

    /// Suppress the inbound emission.
    pub skip_input: bool,

    /// Suppress the outbound emission.
    pub skip_output: bool,

    /// Request path exempt from logging (matched by literal equality).
    pub skip: Option<String>,
}
