//! Upload intake pipeline
//!
//! Turns one inbound multipart file field into one durable file plus one
//! metadata record: extract → validate → store on disk → persist record.
//!
//! The two writes are not atomic: a store failure after the disk write
//! leaves the file in place and surfaces `metadata_persist_error` to the
//! caller. Rejections (missing file, disallowed MIME, oversized body)
//! happen before anything reaches disk.

use axum::extract::Multipart;
use galleria_core::constants::UPLOADS_MOUNT;
use galleria_core::models::{ImageRecord, NewImageRecord};
use galleria_core::AppError;
use galleria_metastore::StoreClient;
use galleria_storage::{naming, LocalStorage};

use crate::state::AppState;
use crate::validation::{validate_content_type, validate_file_size};

/// Upload intake service
///
/// Holds the storage and store handles injected at process start; one
/// instance per request is cheap (both handles are shallow clones).
pub struct IntakeService {
    storage: LocalStorage,
    metastore: StoreClient,
    max_upload_bytes: u64,
}

struct ExtractedFile {
    data: Vec<u8>,
    original_name: String,
    content_type: String,
}

impl IntakeService {
    pub fn new(state: &AppState) -> Self {
        Self {
            storage: state.storage.clone(),
            metastore: state.metastore.clone(),
            max_upload_bytes: state.config.max_upload_bytes,
        }
    }

    /// Complete intake workflow for one upload request.
    pub async fn handle_upload(&self, multipart: Multipart) -> Result<ImageRecord, AppError> {
        let file = self.extract_and_validate(multipart).await?;

        let storage_filename = naming::storage_filename(&file.original_name);

        self.storage
            .save(&storage_filename, &file.data)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, filename = %storage_filename, "Failed to write upload to disk");
                AppError::IoWrite(e.to_string())
            })?;

        let location = location_for(&storage_filename);

        let new_record = NewImageRecord {
            name: file.original_name,
            location,
            mime_type: file.content_type,
        };

        // The file stays on disk if this fails; there is no rollback linking
        // the two writes.
        let record = self
            .metastore
            .create_image(&new_record)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    location = %new_record.location,
                    "Failed to persist image record; uploaded file left on disk"
                );
                AppError::MetadataPersist(e.to_string())
            })?;

        tracing::info!(
            record_id = %record.id,
            name = %record.name,
            location = %record.location,
            mime_type = %record.mime_type,
            "Image uploaded"
        );

        Ok(record)
    }

    /// Extract the single `file` field and run the pre-storage checks.
    ///
    /// The declared content type is validated before the field body is read,
    /// so a disallowed upload is abandoned as early as the transport allows.
    /// The size ceiling is checked once the body is buffered, still before
    /// any disk write.
    async fn extract_and_validate(
        &self,
        mut multipart: Multipart,
    ) -> Result<ExtractedFile, AppError> {
        let mut extracted: Option<ExtractedFile> = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
        {
            let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

            if field_name == "file" {
                if extracted.is_some() {
                    return Err(AppError::InvalidInput(
                        "Multiple file fields are not allowed; send exactly one field named 'file'"
                            .to_string(),
                    ));
                }

                let original_name = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_default();

                validate_content_type(&content_type)?;

                let data = field.bytes().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read file data: {}", e))
                })?;

                validate_file_size(data.len() as u64, self.max_upload_bytes)?;

                extracted = Some(ExtractedFile {
                    data: data.to_vec(),
                    original_name,
                    content_type,
                });
            }
        }

        extracted.ok_or(AppError::NoFileProvided)
    }
}

/// Build the public location for a stored filename: the uploads mount plus
/// the filename, always with exactly one leading slash.
fn location_for(storage_filename: &str) -> String {
    format!(
        "{}/{}",
        UPLOADS_MOUNT,
        storage_filename.trim_start_matches('/')
    )
}
