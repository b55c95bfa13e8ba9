//! Middleware subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path, headers)
//!     → request_logger.rs (skip decision, inbound emission)
//!     → inner service (rest of the chain)
//!     → request_logger.rs (outbound emission)
//!     → Response returned unchanged
//! ```
//!
//! # Design Decisions
//! - One suspension point: awaiting the inner service
//! - Inner-service failures propagate verbatim, never logged here
//! - The skip decision is recomputed per request from immutable config

pub mod request_logger;
pub mod skip;

pub use request_logger::{register, RequestLogger, RequestLoggerLayer};
pub use skip::should_skip;
