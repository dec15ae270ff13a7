//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the crate.

use uuid::Uuid;

/// Generate a new UUID v4
pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Derive the dictionary key for a source phrase.
///
/// Distinct phrases that differ only by spaces versus underscores share a key.
pub fn translation_key(phrase: &str) -> String {
    phrase.replace(' ', "_")
}

/// Cache key under which a language's dictionary is stored
pub fn cache_key(language: &str) -> String {
    format!("lang_{}", language)
}

/// Check whether a language code is missing or blank
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
