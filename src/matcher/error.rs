//! Error types for prefix loading.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error raised when a prefix source cannot be fully read.
///
/// The load is fatal and non-retrying: a matcher whose load failed is in an
/// unknown state and must be discarded by the caller.
#[derive(Debug, Error)]
#[error("Prefix file could not be loaded: {path}")]
pub struct PrefixLoadError {
    /// The prefix file that failed to load.
    pub path: PathBuf,

    /// The underlying I/O failure.
    #[source]
    pub source: std::io::Error,
}

impl PrefixLoadError {
    pub(crate) fn new(path: &Path, source: std::io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            source,
        }
    }
}
