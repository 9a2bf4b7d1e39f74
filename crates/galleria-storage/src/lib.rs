//! Local-disk storage for uploaded images.
//!
//! [`LocalStorage`] owns the upload directory and performs durable writes;
//! [`naming::storage_filename`] derives collision-resistant on-disk names.

mod local;
pub mod naming;

pub use local::LocalStorage;

use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Invalid storage filename: {0}")]
    InvalidFilename(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
