//! Diagnostics setup for the rfd binary.
//!
//! Log output goes to stderr so it never interleaves with the listing on stdout.
//! The filter is read from `RFD_LOG` (e.g. `RFD_LOG=debug`) and defaults to warnings only.

use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_ENV: &str = "RFD_LOG";

pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
