//! Application state.
//!
//! Dependencies are constructed once at process start and injected into
//! handlers through `Arc<AppState>`; there is no global client handle.

use galleria_core::Config;
use galleria_metastore::StoreClient;
use galleria_storage::LocalStorage;

/// Main application state shared across requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: LocalStorage,
    pub metastore: StoreClient,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
