//! Logging subsystem.
//!
//! # Data Flow
//! ```text
//! middleware emission
//!     → dual.rs (verbosity → handle method dispatch)
//!     → provider.rs (named LogHandle)
//!     → tracing subscriber (rendering, transport)
//! ```
//!
//! # Design Decisions
//! - Handles come from an injected provider, never from ambient globals
//! - Both handles are obtained exactly once, at middleware construction
//! - Verbosity dispatch is an exhaustive match, not reflective lookup

pub mod dual;
pub mod provider;

pub use dual::{DualLogger, INBOUND_LOGGER, OUTBOUND_LOGGER};
pub use provider::{LogHandle, LogProvider, TracingLogProvider};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// Filter directives come from `RUST_LOG`, falling back to the given
/// default. Intended for process startup; calling it twice panics, like
/// any double subscriber registration.
pub fn init(default_directive: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
