//! Upload validation: MIME allow-listing and the size ceiling.
//!
//! Both checks run before any byte of the upload reaches disk. The declared
//! content type is trusted as-declared; there is no byte-level sniffing, so
//! a mislabeled payload passes the filter. The allow-list is the security
//! boundary for what this deployment accepts, nothing more.

use galleria_core::constants::ALLOWED_IMAGE_MIME_TYPES;
use galleria_core::AppError;

/// Normalize a MIME type by stripping parameters (e.g. "image/jpeg; charset=utf-8" -> "image/jpeg").
fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

/// Accept or reject a declared MIME type against the fixed allow-list.
pub fn validate_content_type(content_type: &str) -> Result<(), AppError> {
    let normalized = normalize_mime_type(content_type).to_lowercase();
    if !ALLOWED_IMAGE_MIME_TYPES.iter().any(|ct| normalized == *ct) {
        return Err(AppError::UnsupportedMediaType(format!(
            "'{}' is not allowed. Allowed types: {}",
            content_type,
            ALLOWED_IMAGE_MIME_TYPES.join(", ")
        )));
    }
    Ok(())
}

/// Enforce the upload size ceiling.
pub fn validate_file_size(size: u64, max: u64) -> Result<(), AppError> {
    if size > max {
        return Err(AppError::FileTooLarge { size, max });
    }
    Ok(())
}
