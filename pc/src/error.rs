//! Catalog error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading prompt files
///
/// Neither kind aborts a load: both are logged and collected into the
/// [`LoadReport`](crate::LoadReport), leaving the catalog usable.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    LoadIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid prompt header in {path}: {reason}")]
    HeaderParse { path: PathBuf, reason: String },
}

impl CatalogError {
    /// Path of the file or directory the error refers to
    pub fn path(&self) -> &PathBuf {
        match self {
            CatalogError::LoadIo { path, .. } => path,
            CatalogError::HeaderParse { path, .. } => path,
        }
    }

    /// Check if this error came from the file system rather than file content
    pub fn is_io(&self) -> bool {
        matches!(self, CatalogError::LoadIo { .. })
    }
}
