//! Console logging for the attach and render passes.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

use crate::config::LOG_FILTER;

/// Route `tracing` events from this crate to the browser console.
///
/// Levels are shown by the console itself, so they are left out of the
/// formatted line. A page that loads the module twice keeps the first
/// subscriber.
pub fn init_logging() {
    let console = MakeWebConsoleWriter::new().with_pretty_level();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_level(false)
        .with_writer(console);

    let installed = tracing_subscriber::registry()
        .with(EnvFilter::new(LOG_FILTER))
        .with(fmt_layer)
        .try_init();

    if installed.is_ok() {
        tracing::debug!(filter = LOG_FILTER, "Console logging ready");
    }
}
