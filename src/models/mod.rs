//! Data models module
//!
//! This module contains the data structures returned by the translation store

pub mod response;
pub mod stats;

// Re-export commonly used models
pub use response::OperationResponse;
pub use stats::TranslationStats;
