//! Phrasebook
//!
//! Runtime text localization backed by per-language JSON dictionaries.
//! This library provides phrase lookup with an in-memory sliding-expiry
//! cache, merged bulk reads against the baseline dictionary, bulk saves
//! and sorted exports, along with the configuration and logging around them.

pub mod config;
pub mod cache;
pub mod models;
pub mod storage;
pub mod i18n;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{PhrasebookError, Result};

// Re-export main components for easy access
pub use cache::{DictionaryCache, MemoryCache};
pub use i18n::TranslationStore;
pub use models::{OperationResponse, TranslationStats};
pub use storage::{DataDirResolver, Dictionary, PathResolver};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
