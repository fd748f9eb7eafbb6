//! Logging configuration using the tracing ecosystem.
//!
//! Logs go to a daily-rolling file rather than stderr so they never corrupt
//! the TUI. Levels are controlled through `RUST_LOG`.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Default log level if RUST_LOG is not set.
const DEFAULT_LOG_FILTER: &str = "spicy_table=info,warn";

/// Initialize the logging system.
///
/// Sets up a daily-rolling file appender in the platform data directory
/// (e.g. `~/.local/share/spicy-table/logs/` on Linux), with the filter taken
/// from `RUST_LOG` when present.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or the global
/// subscriber cannot be set.
pub fn init() -> anyhow::Result<()> {
    let log_dir = log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "spicy-table.log");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter);

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "spicy-table starting up");
    tracing::debug!(log_dir = %log_dir.display(), "Log directory");

    Ok(())
}

/// The platform-specific log directory.
fn log_directory() -> anyhow::Result<PathBuf> {
    let data_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("could not determine local data directory"))?;
    Ok(data_dir.join("spicy-table").join("logs"))
}
