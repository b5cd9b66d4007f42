//! Tracing initialization for the demo binary.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`. Set
/// `STOREFRONT_LOG` to a file path to log there instead of stderr;
/// if the file cannot be created, logging falls back to stderr.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Ok(log_path) = std::env::var("STOREFRONT_LOG") {
        if let Ok(file) = std::fs::File::create(&log_path) {
            let file_layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_level(true);
            tracing_subscriber::registry().with(filter).with(file_layer).init();
            return;
        }
        eprintln!("Warning: failed to create log file: {log_path}");
    }

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);
    tracing_subscriber::registry().with(filter).with(stderr_layer).init();
}
