//! Contact Form - a validated contact form component
//!
//! This library provides the form core (field store, validator, submission gate),
//! a queryable presentation surface and a terminal front end built on ratatui.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod form;
pub mod settings;
pub mod surface;
pub mod tui;


use std::path::Path;
use std::sync::Mutex;

/// Result type alias for Contact Form operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Contact Form operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Settings load/save error
    #[error("Settings error: {0}")]
    Settings(String),

    /// Surface query matched zero or several elements
    #[error("Query error: {0}")]
    Query(String),

    /// Log subscriber setup error
    #[error("Logging error: {0}")]
    Logging(String),

    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Initialize logging to stdout
pub fn init() {
    tracing_subscriber::fmt::init();
}

/// Initialize logging into a file
///
/// The terminal front end owns stdout, so log output has to go elsewhere.
pub fn init_with_log_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| Error::Logging(format!("Failed to install log subscriber: {}", e)))?;

    Ok(())
}
