//! Logical path resolution
//!
//! Translation files are addressed by logical paths such as
//! `/translations/de_DE.json`. A resolver maps them to physical locations
//! and can optionally confirm that the target exists.

use std::path::{Component, Path, PathBuf};

use tracing::trace;

/// Maps logical storage paths to physical ones.
pub trait PathResolver: Send + Sync {
    /// Resolve `logical_path`. When `must_exist` is set, `None` is returned
    /// for targets that are not present on disk. `None` is also returned for
    /// paths that cannot be resolved at all.
    fn resolve(&self, logical_path: &str, must_exist: bool) -> Option<PathBuf>;
}

/// Resolver rooted at a single data directory
#[derive(Debug, Clone)]
pub struct DataDirResolver {
    root: PathBuf,
}

impl DataDirResolver {
    /// Create a resolver for the given data directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Physical data directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Convert a logical path into a relative one, refusing anything that
    /// could leave the data directory
    fn relative(logical_path: &str) -> Option<PathBuf> {
        let trimmed = logical_path.trim_start_matches('/');
        if trimmed.contains('\\') {
            return None;
        }

        let mut relative = PathBuf::new();
        for component in Path::new(trimmed).components() {
            match component {
                Component::Normal(part) => relative.push(part),
                Component::CurDir => {}
                _ => return None,
            }
        }

        Some(relative)
    }
}

impl PathResolver for DataDirResolver {
    fn resolve(&self, logical_path: &str, must_exist: bool) -> Option<PathBuf> {
        let relative = Self::relative(logical_path)?;
        let physical = self.root.join(relative);

        if must_exist && !physical.exists() {
            trace!(path = logical_path, "Logical path does not exist");
            return None;
        }

        Some(physical)
    }
}
