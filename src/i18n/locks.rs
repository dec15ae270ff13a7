//! Per-language write locks
//!
//! Serializes the read-modify-write sequences that touch a language's
//! dictionary file: auto-created keys and explicit saves. A language's
//! mutex is dropped from the map once the last holder or waiter releases it.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// One async mutex per language code, created on first use
#[derive(Debug, Default)]
pub struct LanguageLocks {
    locks: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

/// Exclusive access to one language until dropped
pub struct LanguageGuard<'a> {
    locks: &'a LanguageLocks,
    language: String,
    guard: Option<OwnedMutexGuard<()>>,
}

impl LanguageLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `language`
    pub async fn lock(&self, language: &str) -> LanguageGuard<'_> {
        let lock = {
            let mut locks = self.locks.lock();
            locks
                .entry(language.to_string())
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };

        LanguageGuard {
            locks: self,
            language: language.to_string(),
            guard: Some(lock.lock_owned().await),
        }
    }

    /// Number of languages with a live mutex
    pub fn len(&self) -> usize {
        self.locks.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.lock().is_empty()
    }

    /// Forget `language` when the map holds the only reference left
    fn release(&self, language: &str) {
        let mut locks = self.locks.lock();
        let unused = locks
            .get(language)
            .map_or(false, |lock| Arc::strong_count(lock) == 1);
        if unused {
            locks.remove(language);
        }
    }
}

impl Drop for LanguageGuard<'_> {
    fn drop(&mut self) {
        self.guard.take();
        self.locks.release(&self.language);
    }
}
