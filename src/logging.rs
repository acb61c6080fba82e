//! Logging setup for hosts embedding the driver library.
//!
//! The drivers only emit `log` facade records (trace-level register
//! matches, debug-level layout decisions); hosts that want to see them can
//! initialize `env_logger` here or bring their own backend.

use log::{info, log_enabled, Level};

/// Initializes the logger with the `env_logger` crate.
///
/// Respects `RUST_LOG`. Call at most once per process.
pub fn init_logger() {
    env_logger::init();
}

/// Logs an informational message through the configured backend.
pub fn log_info(message: &str) {
    if log_enabled!(Level::Info) {
        info!("{message}");
    }
}
