//! Application-wide constants.

/// Declared MIME types accepted for upload. Fixed set; anything else is
/// rejected before a single byte reaches disk.
pub const ALLOWED_IMAGE_MIME_TYPES: &[&str] =
    &["image/jpeg", "image/jpg", "image/png", "image/gif"];

/// Upload size ceiling in bytes (10 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Mount segment under which stored files are served back to clients.
pub const UPLOADS_MOUNT: &str = "/uploads";

/// Name of the metadata store collection holding image records.
pub const IMAGES_COLLECTION: &str = "images";
