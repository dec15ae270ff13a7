//! Error handling for Phrasebook
//!
//! This module defines the main error type used throughout the crate.
//! Store operations absorb these errors into safe defaults; they surface
//! only from configuration loading, internal helpers and the CLI.

use thiserror::Error;

/// Main error type for Phrasebook
#[derive(Error, Debug)]
pub enum PhrasebookError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Path could not be resolved: {logical_path}")]
    PathNotResolved { logical_path: String },

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Atomic file replace failed: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Result type alias for Phrasebook operations
pub type Result<T> = std::result::Result<T, PhrasebookError>;

impl PhrasebookError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            PhrasebookError::Io(_) => true,
            PhrasebookError::Serialization(_) => false,
            PhrasebookError::Config(_) => false,
            PhrasebookError::ConfigSource(_) => false,
            PhrasebookError::InvalidInput(_) => false,
            PhrasebookError::PathNotResolved { .. } => false,
            PhrasebookError::Task(_) => true,
            PhrasebookError::Persist(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PhrasebookError::Config(_) => ErrorSeverity::Critical,
            PhrasebookError::ConfigSource(_) => ErrorSeverity::Critical,
            PhrasebookError::InvalidInput(_) => ErrorSeverity::Info,
            PhrasebookError::PathNotResolved { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
