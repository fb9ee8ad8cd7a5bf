//! Logger setup.
//!
//! Library code logs through the `log` facade. Binaries, benches and tests that want to
//! see those records install a `tracing-subscriber` formatter here; the `tracing-log`
//! bridge forwards `log` records into it.

use tracing_subscriber::EnvFilter;

fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Installs the global formatter.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logger(default_directive: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_directive))
        .with_target(true)
        .try_init()
        .is_ok()
}

/// Installs a formatter that writes through the test harness capture.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_logger() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("debug"))
        .with_test_writer()
        .try_init();
}
