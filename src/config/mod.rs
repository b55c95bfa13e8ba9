//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (semantic checks)
//!     → RequestLoggerConfig (validated, immutable)
//!     → shared via Arc with every in-flight request
//! ```
//!
//! # Design Decisions
//! - Config is immutable once the middleware is constructed
//! - All fields have defaults to allow empty configs
//! - Unsupported verbosity values fail at parse time, never at request time

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{RequestLoggerConfig, Verbosity};
