//! Internationalization module
//!
//! This module handles runtime translation for the application: phrase
//! lookup with an auto-create mode, merged bulk reads against the baseline
//! dictionary, bulk saves and sorted exports.

pub mod locks;
pub mod store;

// Re-export commonly used i18n components
pub use locks::LanguageLocks;
pub use store::{TranslationStore, SAVE_SUCCESS_MESSAGE};
