//! Tracing setup for the `narrative` binary.
//!
//! Loader diagnostics (multiple descriptors, unreadable files) are emitted as
//! `warn` events, so the default filter keeps them visible on stderr while
//! stdout stays reserved for command output.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "narrative=warn";

/// Initialize tracing subscriber.
///
/// Reads `RUST_LOG` env var. Defaults to `narrative=warn` if unset, which keeps
/// loader diagnostics and silences dependency chatter.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=narrative=debug narrative show features/checkout
/// ```
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
