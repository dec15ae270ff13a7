//! Translation statistics model

use serde::{Deserialize, Serialize};

/// Key counts for one language measured against the baseline dictionary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationStats {
    pub language: String,
    /// Keys in the baseline dictionary
    pub baseline_keys: usize,
    /// Keys in the language's own file
    pub language_keys: usize,
    /// Baseline keys the language file provides a value for
    pub overridden_keys: usize,
}

impl TranslationStats {
    /// Share of baseline keys covered by the language, in percent
    pub fn coverage_percent(&self) -> f64 {
        if self.baseline_keys == 0 {
            return 0.0;
        }
        self.overridden_keys as f64 * 100.0 / self.baseline_keys as f64
    }

    /// Keys in the language file that the baseline does not know about
    pub fn orphaned_keys(&self) -> usize {
        self.language_keys.saturating_sub(self.overridden_keys)
    }
}
