//! Translation store
//!
//! Resolves (language, phrase) pairs to translated text using per-language
//! JSON dictionaries. Lookups go through the dictionary cache; bulk reads
//! go straight to disk. No public operation returns an error: failures are
//! logged and degrade to the untranslated phrase, an empty dictionary, a
//! failed [`OperationResponse`] or an empty export path.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::cache::{shared, DictionaryCache, MemoryCache, SharedDictionary};
use crate::config::Settings;
use crate::i18n::locks::LanguageLocks;
use crate::models::{OperationResponse, TranslationStats};
use crate::storage::files::{self, read_dictionary, to_compact_json, to_pretty_json, write_atomic};
use crate::storage::{DataDirResolver, Dictionary, LoadOutcome, PathResolver};
use crate::utils::errors::{PhrasebookError, Result};
use crate::utils::helpers::{cache_key, generate_uuid, is_blank, translation_key};
use crate::utils::logging;

const TRANSLATIONS_DIR: &str = "/translations/";
const TEMP_DIR: &str = "/temp/";

/// Message returned after a successful save
pub const SAVE_SUCCESS_MESSAGE: &str = "Translation Updated";

/// File-backed translation dictionaries with a shared lookup cache
pub struct TranslationStore {
    resolver: Arc<dyn PathResolver>,
    cache: Arc<dyn DictionaryCache>,
    locks: LanguageLocks,
    default_language: String,
    cache_ttl: Duration,
    auto_create: bool,
}

impl TranslationStore {
    /// Create a store over injected collaborators
    pub fn new(
        settings: &Settings,
        resolver: Arc<dyn PathResolver>,
        cache: Arc<dyn DictionaryCache>,
    ) -> Self {
        Self {
            resolver,
            cache,
            locks: LanguageLocks::new(),
            default_language: settings.i18n.default_language.clone(),
            cache_ttl: Duration::from_secs(settings.i18n.cache_ttl_seconds),
            auto_create: settings.features.auto_create,
        }
    }

    /// Create a store rooted at the configured data directory with an in-memory cache
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings,
            Arc::new(DataDirResolver::new(settings.storage.data_dir.clone())),
            Arc::new(MemoryCache::new()),
        )
    }

    /// Baseline language code
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Whether unseen phrases are persisted and the baseline may be overwritten
    pub fn auto_create(&self) -> bool {
        self.auto_create
    }

    fn is_default(&self, language: &str) -> bool {
        language == self.default_language
    }

    fn default_logical_path(&self) -> String {
        format!("/defaults/{}.json", self.default_language)
    }

    /// Logical file for a non-baseline language. Codes containing a path
    /// separator have none, so they can never address a nested file.
    fn language_logical_path(language: &str) -> Option<String> {
        if language.contains(['/', '\\']) {
            return None;
        }
        Some(format!("{}{}.json", TRANSLATIONS_DIR, language))
    }

    /// Logical file backing a language's dictionary
    fn dictionary_logical_path(&self, language: &str) -> Option<String> {
        if self.is_default(language) {
            Some(self.default_logical_path())
        } else {
            Self::language_logical_path(language)
        }
    }

    /// Physical file for a language, `None` when it cannot be resolved
    /// (or, with `must_exist`, is not on disk)
    fn resolve_language(&self, language: &str, must_exist: bool) -> Option<std::path::PathBuf> {
        let logical_path = self.dictionary_logical_path(language)?;
        self.resolver.resolve(&logical_path, must_exist)
    }

    fn resolve_required(&self, logical_path: &str) -> Result<std::path::PathBuf> {
        self.resolver
            .resolve(logical_path, false)
            .ok_or_else(|| {
                logging::log_unresolved_path(logical_path);
                PhrasebookError::PathNotResolved {
                    logical_path: logical_path.to_string(),
                }
            })
    }

    /// Fetch the cached dictionary for `language`, loading it on a miss.
    /// Load failures are cached as an empty dictionary.
    async fn cached_dictionary(&self, language: &str, path: Option<&Path>) -> SharedDictionary {
        if let Some(dictionary) = self.cache.get(&cache_key(language)) {
            return dictionary;
        }

        let _guard = self.locks.lock(language).await;
        self.cached_dictionary_locked(language, path).await
    }

    /// Same as [`Self::cached_dictionary`] for callers already holding the
    /// language lock. Loading under the lock keeps a load that raced a save
    /// from caching the pre-save file.
    async fn cached_dictionary_locked(&self, language: &str, path: Option<&Path>) -> SharedDictionary {
        let key = cache_key(language);
        if let Some(dictionary) = self.cache.get(&key) {
            return dictionary;
        }

        let dictionary = match path {
            Some(path) => {
                let outcome = read_dictionary(path).await;
                if let Some(reason) = outcome.failure_reason() {
                    logging::log_dictionary_load_failed(language, &reason);
                }
                outcome.into_dictionary()
            }
            None => {
                logging::log_dictionary_load_failed(language, "path could not be resolved");
                Dictionary::new()
            }
        };

        debug!(language = language, keys = dictionary.len(), "Dictionary cached");
        self.cache.get_or_insert(&key, shared(dictionary), self.cache_ttl)
    }

    /// Translate `phrase` into `language`, returning the phrase itself when
    /// no translation exists.
    ///
    /// In auto-create mode an unknown phrase is added to the language's
    /// dictionary and the whole dictionary is written back, provided the
    /// backing file already exists.
    pub async fn translate(&self, language: &str, phrase: &str) -> String {
        let key = translation_key(phrase);
        let path = self.resolve_language(language, false);

        let dictionary = self.cached_dictionary(language, path.as_deref()).await;
        if let Some(value) = dictionary.read().await.get(&key) {
            return value.clone();
        }

        let Some(path) = path else {
            return phrase.to_string();
        };
        if !self.auto_create || !files::file_exists(&path).await {
            return phrase.to_string();
        }

        let _guard = self.locks.lock(language).await;

        // A save may have replaced the cache entry while we waited
        let dictionary = self.cached_dictionary_locked(language, Some(path.as_path())).await;
        let mut entries = dictionary.write().await;
        if let Some(value) = entries.get(&key) {
            return value.clone();
        }

        entries.insert(key.clone(), phrase.to_string());
        logging::log_translation_added(language, &key, phrase);

        let persisted = match to_compact_json(&*entries) {
            Ok(bytes) => write_atomic(&path, bytes).await,
            Err(e) => Err(e),
        };
        if let Err(e) = persisted {
            // Keep memory and disk in step
            entries.remove(&key);
            logging::log_write_failed("translate", Some(language), &e.to_string());
        }

        phrase.to_string()
    }

    /// Load the baseline dictionary straight from disk
    async fn load_default_dictionary(&self) -> Dictionary {
        let logical_path = self.default_logical_path();
        let Some(path) = self.resolver.resolve(&logical_path, true) else {
            logging::log_dictionary_load_failed(&self.default_language, "file not found");
            return Dictionary::new();
        };

        let outcome = read_dictionary(&path).await;
        if let Some(reason) = outcome.failure_reason() {
            logging::log_dictionary_load_failed(&self.default_language, &reason);
        }
        outcome.into_dictionary()
    }

    /// Full dictionary for `language`, bypassing the cache.
    ///
    /// The baseline dictionary defines the key set: the language's file only
    /// overrides values for keys the baseline already has. An unresolvable
    /// or malformed language file yields an empty dictionary.
    pub async fn get_translations(&self, language: &str) -> Dictionary {
        let mut baseline = self.load_default_dictionary().await;
        if self.is_default(language) {
            return baseline;
        }

        let Some(path) = self.resolve_language(language, true) else {
            logging::log_dictionary_load_failed(language, "file not found");
            return Dictionary::new();
        };

        match read_dictionary(&path).await {
            LoadOutcome::Loaded(overlay) => {
                for (key, value) in overlay {
                    if let Some(slot) = baseline.get_mut(&key) {
                        *slot = value;
                    }
                }
                baseline
            }
            outcome => {
                let reason = outcome.failure_reason().unwrap_or_default();
                logging::log_dictionary_load_failed(language, &reason);
                Dictionary::new()
            }
        }
    }

    /// Replace the dictionary for `language` with `translations`
    pub async fn save_translation(&self, language: &str, translations: &Dictionary) -> OperationResponse {
        let is_default = self.is_default(language);
        if is_default && !self.auto_create {
            return OperationResponse::failed(format!(
                "The translation file name {} is reserved.",
                self.default_language
            ));
        }
        if is_blank(language) {
            return OperationResponse::failed("File name is not provided.");
        }
        if translations.is_empty() {
            return OperationResponse::failed("Translation has no data.");
        }

        match self.write_dictionary(language, translations).await {
            Ok(created) => {
                logging::log_dictionary_saved(language, translations.len(), created);
                OperationResponse::succeed(SAVE_SUCCESS_MESSAGE)
            }
            Err(e) => {
                logging::log_write_failed("save", Some(language), &e.to_string());
                OperationResponse::failed_generic()
            }
        }
    }

    /// Write a dictionary file, returning whether it was newly created
    async fn write_dictionary(&self, language: &str, translations: &Dictionary) -> Result<bool> {
        let key = cache_key(language);
        let _guard = self.locks.lock(language).await;

        // Drop the entry up front, whichever branch runs, so an empty
        // dictionary cached by an earlier failed load cannot outlive the save
        logging::log_cache_invalidated(&key, self.cache.remove(&key));

        let logical_path = self.dictionary_logical_path(language).ok_or_else(|| {
            PhrasebookError::InvalidInput(format!("Language code is not a plain file name: {}", language))
        })?;
        let path = self.resolve_required(&logical_path)?;
        let bytes = to_compact_json(translations)?;

        let created = !files::file_exists(&path).await;
        if created {
            if let Some(directory) = path.parent() {
                files::ensure_dir(directory).await?;
            }
        }
        write_atomic(&path, bytes).await?;

        Ok(created)
    }

    /// Write a key-sorted, indented copy of `translations` to the temp area
    /// and return its logical path, or an empty string on failure.
    /// Removing the file afterwards is up to the caller.
    pub async fn export_translation(&self, translations: &Dictionary) -> String {
        match self.write_export(translations).await {
            Ok(logical_path) => logical_path,
            Err(e) => {
                logging::log_write_failed("export", None, &e.to_string());
                String::new()
            }
        }
    }

    async fn write_export(&self, translations: &Dictionary) -> Result<String> {
        let temp_dir = self.resolve_required(TEMP_DIR)?;
        files::ensure_dir(&temp_dir).await?;

        let logical_path = format!("{}{}.json", TEMP_DIR, generate_uuid());
        let path = self.resolve_required(&logical_path)?;

        let sorted: BTreeMap<&String, &String> = translations.iter().collect();
        write_atomic(&path, to_pretty_json(&sorted)?).await?;

        logging::log_export_written(&logical_path, sorted.len());
        Ok(logical_path)
    }

    /// Language codes with a dictionary on disk, baseline included, sorted
    pub async fn available_languages(&self) -> Vec<String> {
        let mut languages = vec![self.default_language.clone()];

        if let Some(directory) = self.resolver.resolve(TRANSLATIONS_DIR, true) {
            match Self::list_dictionary_files(&directory).await {
                Ok(found) => languages.extend(found),
                Err(e) => warn!(error = %e, "Could not list translation files"),
            }
        }

        languages.sort();
        languages.dedup();
        languages
    }

    async fn list_dictionary_files(directory: &Path) -> Result<Vec<String>> {
        let mut found = Vec::new();
        let mut entries = tokio::fs::read_dir(directory).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                found.push(stem.to_string());
            }
        }

        Ok(found)
    }

    /// Key counts for `language` against the baseline, read from disk
    pub async fn stats(&self, language: &str) -> TranslationStats {
        let baseline = self.load_default_dictionary().await;

        let own = if self.is_default(language) {
            baseline.clone()
        } else {
            match self.resolve_language(language, true) {
                Some(path) => read_dictionary(&path).await.into_dictionary(),
                None => Dictionary::new(),
            }
        };

        let overridden_keys = own.keys().filter(|key| baseline.contains_key(*key)).count();

        TranslationStats {
            language: language.to_string(),
            baseline_keys: baseline.len(),
            language_keys: own.len(),
            overridden_keys,
        }
    }
}
