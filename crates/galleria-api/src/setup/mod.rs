//! Application setup and initialization
//!
//! All initialization logic lives here, out of main.rs: telemetry, the
//! upload directory, the metadata store client, and the router.

pub mod routes;
pub mod server;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use galleria_core::Config;
use galleria_metastore::StoreClient;
use galleria_storage::LocalStorage;

use crate::state::AppState;

/// Delay before the one-shot metadata store diagnostic probe fires.
const STORE_PROBE_DELAY: Duration = Duration::from_secs(5);

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry()
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!(
        store_url = %config.store_url,
        upload_dir = %config.upload_dir,
        "Configuration loaded"
    );

    // Creates the upload directory if absent; idempotent.
    let storage = LocalStorage::new(&config.upload_dir)
        .await
        .context("Failed to prepare upload directory")?;

    let metastore =
        StoreClient::new(&config.store_url).context("Failed to build metadata store client")?;

    let state = Arc::new(AppState {
        config: config.clone(),
        storage,
        metastore,
    });

    spawn_store_diagnostic(state.metastore.clone());

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}

/// One-shot reachability probe against the metadata store, fired a fixed
/// time after startup. Diagnostic only: logs the outcome and never retries
/// or gates request handling.
fn spawn_store_diagnostic(store: StoreClient) {
    tokio::spawn(async move {
        tokio::time::sleep(STORE_PROBE_DELAY).await;
        match store.health().await {
            Ok(()) => {
                tracing::info!(store_url = %store.base_url(), "Metadata store reachable");
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    store_url = %store.base_url(),
                    "Metadata store health probe failed"
                );
            }
        }
    });
}
