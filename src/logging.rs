//! Tracing installation for widget hosts.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_DIRECTIVE: &str = "info";

static TRACING_INSTALLED: Once = Once::new();

/// Installs a formatted tracing subscriber filtered by `RUST_LOG`
/// (default `info`). Later calls are no-ops.
pub fn install() {
    install_with(DEFAULT_DIRECTIVE);
}

/// Like [`install`], with a custom fallback directive such as `flick=debug`.
pub fn install_with(default_directive: &str) {
    TRACING_INSTALLED.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive));
        let result = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_ansi(false))
            .with(filter)
            .try_init();
        if result.is_err() {
            tracing::debug!(target: "flick::logging", "keeping the existing global subscriber");
        }
    });
}
