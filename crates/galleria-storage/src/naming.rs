//! Storage filename generation.
//!
//! On-disk names are derived from upload time and a random salt so that no
//! external state (and therefore no locking) is needed, even under
//! concurrent requests. The original client filename contributes only its
//! extension; everything else about it is untrusted and discarded.

use std::path::Path;

use chrono::Utc;
use rand::Rng;

/// Upper bound (exclusive) for the random salt. Wide enough that two
/// generations within the same millisecond collide with negligible
/// probability; a physical collision surfaces later as a store write
/// rejection, not silent data loss.
const SALT_RANGE: u64 = 1_000_000_000_000;

/// Derive the on-disk filename for an upload: `{millis}-{salt}[.{ext}]`.
///
/// The extension is taken from `original_name`, lowercased and stripped of
/// anything that is not ASCII alphanumeric. Names without a usable extension
/// get none. The output alphabet is `[0-9a-z.-]`, safe on any filesystem.
pub fn storage_filename(original_name: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let salt: u64 = rand::rng().random_range(0..SALT_RANGE);

    match sanitized_extension(original_name) {
        Some(ext) => format!("{}-{}.{}", millis, salt, ext),
        None => format!("{}-{}", millis, salt),
    }
}

fn sanitized_extension(original_name: &str) -> Option<String> {
    let ext: String = Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())?
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();

    if ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}
