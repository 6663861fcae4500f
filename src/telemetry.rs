//! Logging setup.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the embedding application, which can use these helpers.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `default_filter` (for example `"rawpix=warn"`).
///
/// # Panics
///
/// Panics if a global subscriber is already set. Use [`try_init`] where that
/// can happen.
pub fn init(default_filter: &str) {
    registry(default_filter).init();
}

/// Like [`init`], but returns an error instead of panicking when a global
/// subscriber is already installed.
pub fn try_init(default_filter: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    registry(default_filter).try_init()
}

fn registry(default_filter: &str) -> impl SubscriberInitExt {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().without_time())
}
