//! Dictionary file I/O
//!
//! Reads classify their failure instead of returning it so callers can log
//! and fall back. Every write replaces the target atomically: the content
//! goes to a temp file in the same directory, is synced, then renamed over
//! the destination. The replacement keeps the destination's permissions;
//! new files get `0644` on unix.

use std::collections::HashMap;
use std::fs::Permissions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::utils::errors::{PhrasebookError, Result};

/// A flat key to text mapping for one language
pub type Dictionary = HashMap<String, String>;

/// Result of reading a dictionary file
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(Dictionary),
    Missing,
    Unreadable(std::io::Error),
    Malformed(serde_json::Error),
}

impl LoadOutcome {
    /// Collapse into a dictionary, empty on any failure
    pub fn into_dictionary(self) -> Dictionary {
        match self {
            LoadOutcome::Loaded(dictionary) => dictionary,
            _ => Dictionary::new(),
        }
    }

    /// Human-readable failure reason, `None` when loaded
    pub fn failure_reason(&self) -> Option<String> {
        match self {
            LoadOutcome::Loaded(_) => None,
            LoadOutcome::Missing => Some("file not found".to_string()),
            LoadOutcome::Unreadable(e) => Some(format!("read failed: {}", e)),
            LoadOutcome::Malformed(e) => Some(format!("malformed JSON: {}", e)),
        }
    }
}

/// Read and parse a dictionary file
pub async fn read_dictionary(path: &Path) -> LoadOutcome {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return LoadOutcome::Missing,
        Err(e) => return LoadOutcome::Unreadable(e),
    };

    // A bare `null` document counts as an empty dictionary
    match serde_json::from_str::<Option<Dictionary>>(&content) {
        Ok(dictionary) => {
            let dictionary = dictionary.unwrap_or_default();
            debug!(path = %path.display(), keys = dictionary.len(), "Dictionary file parsed");
            LoadOutcome::Loaded(dictionary)
        }
        Err(e) => LoadOutcome::Malformed(e),
    }
}

/// Check whether a file exists, treating lookup errors as absence
pub async fn file_exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

/// Create a directory and its parents if missing
pub async fn ensure_dir(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path).await?;
    Ok(())
}

/// Atomically replace `path` with `contents`
pub async fn write_atomic(path: &Path, contents: Vec<u8>) -> Result<()> {
    let path: PathBuf = path.to_path_buf();
    tokio::task::spawn_blocking(move || write_atomic_blocking(&path, &contents)).await?
}

fn write_atomic_blocking(path: &Path, contents: &[u8]) -> Result<()> {
    let directory = path.parent().ok_or_else(|| {
        PhrasebookError::InvalidInput(format!("No parent directory for {}", path.display()))
    })?;

    let permissions = std::fs::metadata(path)
        .ok()
        .map(|metadata| metadata.permissions())
        .or_else(new_file_permissions);

    let mut temp = NamedTempFile::new_in(directory)?;
    temp.write_all(contents)?;
    if let Some(permissions) = permissions {
        temp.as_file().set_permissions(permissions)?;
    }
    temp.as_file().sync_all()?;
    temp.persist(path)?;

    debug!(path = %path.display(), bytes = contents.len(), "File replaced");
    Ok(())
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}

/// Serialize a dictionary in the compact on-disk form
pub fn to_compact_json<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

/// Serialize a dictionary in the indented export form
pub fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(value)?)
}
