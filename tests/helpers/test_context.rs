//! Test context for translation store tests
//!
//! Each context owns a temporary data directory laid out the way the store
//! expects: `defaults/en_US.json` plus optional `translations/*.json`.

use std::path::PathBuf;
use std::sync::Arc;

use phrasebook::{DataDirResolver, Dictionary, MemoryCache, Settings, TranslationStore};
use tempfile::TempDir;

/// Baseline entries written to every fresh context
pub const BASELINE: &[(&str, &str)] = &[
    ("Add_Vehicle", "Add Vehicle"),
    ("Garage", "Garage"),
    ("Service_Records", "Service Records"),
    ("Settings", "Settings"),
];

/// Build a dictionary from literal pairs
pub fn dictionary(pairs: &[(&str, &str)]) -> Dictionary {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Temporary data directory plus the settings pointing at it
pub struct TestContext {
    pub temp_dir: TempDir,
    pub settings: Settings,
}

impl TestContext {
    /// Context with the baseline dictionary seeded
    pub fn new(auto_create: bool) -> Self {
        let ctx = Self::empty(auto_create);
        ctx.write_dictionary("defaults/en_US.json", &dictionary(BASELINE));
        ctx
    }

    /// Context without any dictionary files
    pub fn empty(auto_create: bool) -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

        let mut settings = Settings::default();
        settings.storage.data_dir = temp_dir.path().to_path_buf();
        settings.features.auto_create = auto_create;

        Self { temp_dir, settings }
    }

    /// Store over this context's data directory with a fresh cache
    pub fn store(&self) -> TranslationStore {
        TranslationStore::from_settings(&self.settings)
    }

    /// Store sharing `cache` with the caller, for inspecting cache size
    pub fn store_with_cache(&self, cache: Arc<MemoryCache>) -> TranslationStore {
        TranslationStore::new(
            &self.settings,
            Arc::new(DataDirResolver::new(self.settings.storage.data_dir.clone())),
            cache,
        )
    }

    /// Physical path for a path relative to the data directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.temp_dir.path().join(relative.trim_start_matches('/'))
    }

    /// Write raw file content, creating parent directories
    pub fn write_raw(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    pub fn write_dictionary(&self, relative: &str, dictionary: &Dictionary) {
        let content = serde_json::to_string(dictionary).expect("Failed to serialize dictionary");
        self.write_raw(relative, &content);
    }

    /// Write `translations/{language}.json`
    pub fn write_language(&self, language: &str, pairs: &[(&str, &str)]) {
        self.write_dictionary(&format!("translations/{}.json", language), &dictionary(pairs));
    }

    pub fn read_raw(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).expect("Failed to read file")
    }

    pub fn read_dictionary(&self, relative: &str) -> Dictionary {
        serde_json::from_str(&self.read_raw(relative)).expect("Failed to parse dictionary")
    }

    /// Parsed `translations/{language}.json`
    pub fn read_language(&self, language: &str) -> Dictionary {
        self.read_dictionary(&format!("translations/{}.json", language))
    }
}
