use crate::{StorageError, StorageResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage for uploaded files.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance rooted at `base_path`.
    ///
    /// The directory is created if absent; an existing directory is not an
    /// error.
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create upload directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolve a generated filename to its on-disk path.
    ///
    /// Filenames come from `naming::storage_filename` and are flat; anything
    /// that could escape the upload directory is rejected.
    fn path_for(&self, filename: &str) -> StorageResult<PathBuf> {
        if filename.is_empty()
            || filename.contains("..")
            || filename.contains('/')
            || filename.contains('\\')
        {
            return Err(StorageError::InvalidFilename(filename.to_string()));
        }
        Ok(self.base_path.join(filename))
    }

    /// Write `data` to `<base>/<filename>` in full and fsync before
    /// returning. A failure at any point leaves no usable artifact worth a
    /// metadata record; callers must not persist one.
    pub async fn save(&self, filename: &str, data: &[u8]) -> StorageResult<PathBuf> {
        let path = self.path_for(filename)?;
        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(data).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            size_bytes = data.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Stored upload on disk"
        );

        Ok(path)
    }

    /// Check whether a stored file exists.
    pub async fn exists(&self, filename: &str) -> StorageResult<bool> {
        let path = self.path_for(filename)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }
}
