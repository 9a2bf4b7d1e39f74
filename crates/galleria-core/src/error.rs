//! Error types module
//!
//! All request-level failures are unified under the `AppError` enum. Each
//! variant knows its HTTP status, a stable machine-readable label, and the
//! level it should be logged at. The HTTP layer owns the conversion to a
//! response body; this module stays transport-agnostic.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues like resource limits
    Warn,
    /// Error level - for unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No file uploaded")]
    NoFileProvided,

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: u64, max: u64 },

    #[error("Disk write failed: {0}")]
    IoWrite(String),

    #[error("Failed to persist image metadata: {0}")]
    MetadataPersist(String),

    #[error("Failed to list images: {0}")]
    ListFailed(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code for this error. Client mistakes map to 4xx, server
    /// and upstream faults to 5xx.
    pub fn http_status_code(&self) -> u16 {
        match self {
            AppError::NoFileProvided => 400,
            AppError::UnsupportedMediaType(_) => 400,
            AppError::FileTooLarge { .. } => 413,
            AppError::InvalidInput(_) => 400,
            AppError::IoWrite(_) => 500,
            AppError::MetadataPersist(_) => 500,
            AppError::ListFailed(_) => 500,
            AppError::Internal(_) => 500,
        }
    }

    /// Stable machine-readable label, used as the `error` field of the
    /// response body.
    pub fn error_label(&self) -> &'static str {
        match self {
            AppError::NoFileProvided => "no_file_provided",
            AppError::UnsupportedMediaType(_) => "unsupported_media_type",
            AppError::FileTooLarge { .. } => "file_too_large",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::IoWrite(_) => "io_write_error",
            AppError::MetadataPersist(_) => "metadata_persist_error",
            AppError::ListFailed(_) => "list_failed",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// Log level for this error
    pub fn log_level(&self) -> LogLevel {
        match self {
            AppError::NoFileProvided
            | AppError::UnsupportedMediaType(_)
            | AppError::InvalidInput(_) => LogLevel::Debug,
            AppError::FileTooLarge { .. } => LogLevel::Warn,
            AppError::IoWrite(_)
            | AppError::MetadataPersist(_)
            | AppError::ListFailed(_)
            | AppError::Internal(_) => LogLevel::Error,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::IoWrite(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
