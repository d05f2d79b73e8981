//! Storage error types
//!
//! Loading tables and writing results are plain file I/O. Every failure
//! carries the path it happened on.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Table file {0} has no header line")]
    MissingHeader(PathBuf),
}

impl StorageError {
    /// Returns the path the error refers to
    pub fn path(&self) -> &PathBuf {
        match self {
            StorageError::Open { path, .. }
            | StorageError::Read { path, .. }
            | StorageError::Write { path, .. } => path,
            StorageError::MissingHeader(path) => path,
        }
    }
}
