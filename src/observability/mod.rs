//! Logging and crash reporting.
//!
//! Library code emits `tracing` spans/events (and `log` records from the
//! config loader, bridged into the same subscriber). The binary calls
//! [`init_tracing`] once at startup and [`install_panic_hook`] before any
//! command runs.

pub mod panic_hook;

pub use panic_hook::{install_panic_hook, set_command};

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `clarity=debug`.
pub const LOG_ENV: &str = "CLARITY_LOG";

static INIT: Once = Once::new();

/// Default level for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. `CLARITY_LOG`, then `RUST_LOG`, override
/// the verbosity-derived level. Idempotent.
pub fn init_tracing(verbosity: u8) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(verbosity >= 2)
            .try_init()
            .ok();
    });
}
