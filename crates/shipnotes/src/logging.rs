//! Tracing setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Set up tracing with two layers:
/// - Console (stderr): RUST_LOG if set, otherwise warn, or debug/error with
///   `--verbose`/`--quiet`
/// - File: always debug-level JSON to ~/.shipnotes/logs/
///
/// Stdout is reserved for the tool output.
pub fn init_tracing(verbose: bool, quiet: bool) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_level(verbose, quiet)));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_filter);

    if let Some(log_dir) = log_directory() {
        let file_appender = tracing_appender::rolling::daily(&log_dir, "shipnotes.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let initialized = tracing_subscriber::registry()
            .with(console_layer)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_filter(EnvFilter::new("debug")),
            )
            .try_init()
            .is_ok();

        return initialized.then_some(guard);
    }

    // Fallback: console only
    let _ = tracing_subscriber::registry().with(console_layer).try_init();

    None
}

/// Default console level for the verbosity flags
fn console_level(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Returns the log directory path, creating it if needed.
fn log_directory() -> Option<std::path::PathBuf> {
    let log_dir = dirs::home_dir()?.join(".shipnotes").join("logs");
    std::fs::create_dir_all(&log_dir).ok()?;
    Some(log_dir)
}
