//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the crosscheck tracing/logging system.
///
/// Reads the `CROSSCHECK_LOG` environment variable for per-subsystem log
/// levels and falls back to `crosscheck=info` when it is not set or is
/// invalid. Intended for hosts without their own subscriber; calling it
/// multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("CROSSCHECK_LOG")
            .unwrap_or_else(|_| EnvFilter::new("crosscheck=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
