//! Storage module
//!
//! Logical path resolution and dictionary file I/O.

pub mod files;
pub mod paths;

pub use files::{Dictionary, LoadOutcome};
pub use paths::{DataDirResolver, PathResolver};
