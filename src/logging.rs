//! Tracing setup
//!
//! Logs go to stderr so they never interleave with report output on
//! stdout. The default level is quiet; set `RUST_LOG=saldo=debug` to see
//! storage and session events. The TUI never initializes logging because
//! stderr writes would tear the alternate screen.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize the global tracing subscriber. Safe to call more than once.
pub fn init_logging() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive("saldo=warn".parse().unwrap());

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
