//! Tracing/logging initialization.
//!
//! Library crates emit diagnostics through `tracing` (gateway failures are
//! logged here rather than surfaced to the user); the binary calls `init`
//! once at startup.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Filter via RUST_LOG; compact human-readable output for the demo shell.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
