//! Diagnostic tracing
//!
//! Game output goes to stdout; diagnostics go to stderr so the two never mix.
//! Controlled by `RUST_LOG`, defaulting to `warn`.
//!
//! # Example
//! ```bash
//! RUST_LOG=guessing_game=debug cargo run -- play
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber
///
/// Called once from `main`; panics if a global subscriber is already set.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
