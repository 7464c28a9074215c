//! Unified test logging initialization.
//!
//! Both unit tests and integration tests route through this one entry point
//! so the subscriber is configured the same way everywhere.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize structured logging for tests.
///
/// Idempotent and race-safe; calling it from every test entry point is fine.
/// The filter is taken from `TEST_LOG`, then `RUST_LOG`, then falls back to
/// `"warn"` so passing test runs stay quiet.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
