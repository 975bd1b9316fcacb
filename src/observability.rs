//! Logging setup.
//!
//! `tracing` events from the app and the core crate go to the browser
//! console through `tracing-web`. Timestamps are left to the devtools.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

use crate::config::DEFAULT_LOG_LEVEL;

/// Install the global subscriber with the given filter directive.
///
/// An invalid directive falls back to [`DEFAULT_LOG_LEVEL`]. Calling this
/// twice keeps the first subscriber.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
