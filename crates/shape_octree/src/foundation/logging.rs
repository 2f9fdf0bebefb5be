//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Reads the filter from `RUST_LOG`, defaulting to `info`. Call once from a
/// binary's `main`.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Initialize logging for tests
///
/// Safe to call from every test: later calls are ignored and output goes
/// through the test harness capture.
pub fn init_for_tests() {
    let _ = env_logger::builder().is_test(true).try_init();
}
