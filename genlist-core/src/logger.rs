//! Logging bootstrap using tracing.
//!
//! The list emits `tracing` events (growth, shifts, early traversal stops,
//! recorded failures). This module installs a subscriber that prints them to
//! stderr and forwards `log` crate records into tracing.
//!
//! # Example
//!
//! ```
//! use genlist_core::logger::init_logging;
//!
//! // Call once at startup; later calls are ignored.
//! init_logging("genlist-demo");
//! tracing::info!("ready");
//! ```

use std::sync::OnceLock;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initializes logging for the process.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. `name` is
/// recorded on the first event emitted after installation.
pub fn init_logging(name: &str) {
    LOGGER_INITIALIZED.get_or_init(|| {
        tracing_log::LogTracer::init().ok();

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_span_events(FmtSpan::NONE)
            .with_writer(std::io::stderr);

        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .is_ok();
        if installed {
            tracing::debug!(name, "logging initialized");
        }
    });
}
