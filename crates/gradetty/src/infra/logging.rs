//! Tracing setup that keeps the terminal free for the UI.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Subdirectory under the gradetty home where log files are stored.
pub const LOG_DIR: &str = "log";

/// Default log filename.
pub const LOG_FILE: &str = "gradetty.log";

/// Routes tracing output to an append-only log file.
///
/// Nothing is logged to stdout or stderr while the TUI owns the terminal.
/// The level filter honors `RUST_LOG` and defaults to `info`.
///
/// # Errors
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init_file_logging(log_path: &Path) -> Result<(), String> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| format!("Failed to create log directory: {err}"))?;
    }

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|err| format!("Failed to open log file: {err}"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| format!("Failed to install tracing subscriber: {err}"))?;

    Ok(())
}
