//! Roster - a single-screen user list
//!
//! This library provides the in-memory record store, the add-user form with
//! its validation, the pure row rendering used by the list, and the terminal
//! front-end built on top of them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod form;
pub mod settings;
pub mod store;
pub mod tui;
pub mod view;

use settings::Settings;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;

/// Result type alias for Roster operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Roster operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Settings could not be read or written
    #[error("Settings error: {0}")]
    Settings(String),

    /// Logging could not be initialised
    #[error("Logging error: {0}")]
    Logging(String),

    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Initialize logging to the file named in `settings`
///
/// The terminal owns stdout while the UI runs, so events go to a file
/// through a non-blocking writer. `RUST_LOG` takes precedence over
/// `settings.log_filter`. The returned guard flushes pending events when
/// dropped and must be held for the app lifetime.
pub fn init_logging(settings: &Settings) -> Result<WorkerGuard> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let path = Path::new(&settings.log_file);
    let logs_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| Error::Logging(format!("Log path has no file name: {}", settings.log_file)))?;
    std::fs::create_dir_all(logs_dir)?;

    let file_appender = tracing_appender::rolling::never(logs_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    Ok(guard)
}
