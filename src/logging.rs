//! Logging setup for the command line entry points.
//!
//! Library consumers install their own subscriber; the binary calls
//! [`initialize`] once at startup. Verbosity is controlled through the
//! `TINCT_LOG` environment variable using the usual filter syntax.

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TINCT_LOG";

/// Install the global tracing subscriber, writing to stderr so manifest
/// output on stdout stays clean. Safe to call more than once; later calls
/// are no-ops.
pub fn initialize() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let _ = subscriber.try_init();
}
