//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the Phrasebook translation store.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{PhrasebookError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the rolling file writer on drop and must be
/// held for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| PhrasebookError::Config(format!("Invalid log filter: {}", e)))?;

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "phrasebook.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|e| PhrasebookError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a phrase that was appended to a dictionary in auto-create mode
pub fn log_translation_added(language: &str, key: &str, value: &str) {
    info!(
        language = language,
        key = key,
        value = value,
        "Translation key added"
    );
}

/// Log a dictionary written by a save operation
pub fn log_dictionary_saved(language: &str, entries: usize, created: bool) {
    info!(
        language = language,
        entries = entries,
        created = created,
        "Translation dictionary saved"
    );
}

/// Log a dictionary that could not be loaded and was replaced by an empty one
pub fn log_dictionary_load_failed(language: &str, reason: &str) {
    error!(
        language = language,
        reason = reason,
        "Could not load translation file"
    );
}

/// Log a failed write; the caller degrades to its safe default
pub fn log_write_failed(operation: &str, language: Option<&str>, error: &str) {
    error!(
        operation = operation,
        language = language,
        error = error,
        "Translation write failed"
    );
}

/// Log an export file written to the temp area
pub fn log_export_written(logical_path: &str, entries: usize) {
    debug!(
        path = logical_path,
        entries = entries,
        "Translation export written"
    );
}

/// Log a cache entry removal
pub fn log_cache_invalidated(cache_key: &str, existed: bool) {
    debug!(cache_key = cache_key, existed = existed, "Cache entry invalidated");
}

/// Log a logical path the resolver refused or could not confirm
pub fn log_unresolved_path(logical_path: &str) {
    warn!(path = logical_path, "Logical path could not be resolved");
}
