//! Tracing initialization for the demo binary.

use std::path::Path;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize tracing with file output.
///
/// The TUI owns the terminal, so logs only ever go to a file; with no
/// `log_path` tracing stays uninitialized. The filter comes from
/// `RUST_LOG`, defaulting to `info`.
pub fn init(log_path: Option<&Path>) {
    let Some(path) = log_path else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(path) else {
        eprintln!("warning: failed to create log file: {}", path.display());
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
