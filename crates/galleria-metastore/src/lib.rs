//! HTTP client for the external metadata store.
//!
//! The store is a hosted record service exposing one collection of image
//! records over a PocketBase-style records API. This client covers the three
//! calls the application makes: create a record, list all records newest
//! first, and a health probe used as a startup diagnostic. No retries; a
//! failed call surfaces immediately to the one request that made it.

use galleria_core::constants::IMAGES_COLLECTION;
use galleria_core::models::{ImageRecord, NewImageRecord};
use serde::Deserialize;
use std::time::Duration;

/// Safety net on the underlying client so an unresponsive store cannot pin
/// a request forever. Not a request-level policy.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Listing is unpaginated by contract; ask the store for one oversized page.
const LIST_PAGE_SIZE: u32 = 500;

/// Metadata store operation errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("metadata store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("metadata store returned {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("failed to decode metadata store response: {0}")]
    Decode(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Page envelope the store wraps list responses in.
#[derive(Debug, Deserialize)]
struct RecordPage {
    items: Vec<ImageRecord>,
}

/// Client for the metadata store, built once at process start and shared by
/// the intake pipeline and the listing service.
#[derive(Clone, Debug)]
pub struct StoreClient {
    client: reqwest::Client,
    base_url: String,
}

impl StoreClient {
    pub fn new(base_url: &str) -> StoreResult<Self> {
        let client = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;

        Ok(StoreClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn records_url(&self) -> String {
        format!(
            "{}/api/collections/{}/records",
            self.base_url, IMAGES_COLLECTION
        )
    }

    /// Create one image record. Returns the stored record including the
    /// store-assigned `id`/`created`/`updated`.
    pub async fn create_image(&self, record: &NewImageRecord) -> StoreResult<ImageRecord> {
        let response = self
            .client
            .post(self.records_url())
            .json(record)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        response
            .json::<ImageRecord>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    /// List every image record, newest first (`created` descending). An
    /// empty collection is an empty vec, not an error.
    pub async fn list_images(&self) -> StoreResult<Vec<ImageRecord>> {
        let per_page = LIST_PAGE_SIZE.to_string();
        let response = self
            .client
            .get(self.records_url())
            .query(&[("sort", "-created"), ("perPage", per_page.as_str())])
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let page = response
            .json::<RecordPage>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        Ok(page.items)
    }

    /// One-shot health probe. Used as a startup diagnostic only; never gates
    /// request handling.
    pub async fn health(&self) -> StoreResult<()> {
        let response = self
            .client
            .get(format!("{}/api/health", self.base_url))
            .send()
            .await?;

        Self::check_status(response).await.map(drop)
    }

    async fn check_status(response: reqwest::Response) -> StoreResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        Err(StoreError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
