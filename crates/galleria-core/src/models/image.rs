use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored image: the metadata record held by the external store.
///
/// `id`, `created`, and `updated` are assigned by the store on creation and
/// never touched afterwards. `location` is the server-relative path the file
/// is served from (e.g. `/uploads/1717000000000-123456789.png`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: String,
    pub name: String,
    pub location: String,
    pub mime_type: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

/// Create payload for a new image record. The store fills in the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewImageRecord {
    pub name: String,
    pub location: String,
    pub mime_type: String,
}
