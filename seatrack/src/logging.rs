//! Logging infrastructure for SeaTrack.
//!
//! Console-only structured logging via `tracing`, configurable with the
//! RUST_LOG environment variable. The library itself emits only trace and
//! debug events; initialisation is left to binaries.

use tracing_subscriber::EnvFilter;

/// Initialize console logging.
///
/// Uses `RUST_LOG` when set, otherwise the supplied default directive
/// (e.g. "info" or "debug").
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(default_directive: &str) -> Result<(), String> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .map_err(|e| e.to_string())
}

// Testing actual log output needs integration tests: tracing uses a global
// subscriber that can only be installed once per process.
