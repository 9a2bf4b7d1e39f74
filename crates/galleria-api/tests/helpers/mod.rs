//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p galleria-api`. The external
//! metadata store is replaced by an in-process mock (axum router on an
//! ephemeral port) speaking the same records API.

pub mod fixtures;
pub mod store;

use std::sync::Arc;

use axum_test::TestServer;
use galleria_api::setup::routes;
use galleria_api::state::AppState;
use galleria_core::constants::MAX_UPLOAD_BYTES;
use galleria_core::Config;
use galleria_metastore::StoreClient;
use galleria_storage::LocalStorage;
use tempfile::TempDir;

use self::store::MockStore;

/// Test application: server, mock store, and owned resources.
pub struct TestApp {
    pub server: TestServer,
    pub store: MockStore,
    pub upload_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Number of files currently in the upload directory.
    pub fn stored_file_count(&self) -> usize {
        std::fs::read_dir(self.upload_dir.path())
            .expect("read upload dir")
            .count()
    }

    /// Read a stored file back by its public location (`/uploads/<name>`).
    pub fn read_stored_file(&self, location: &str) -> Vec<u8> {
        let filename = location
            .strip_prefix("/uploads/")
            .expect("location starts with /uploads/");
        std::fs::read(self.upload_dir.path().join(filename)).expect("read stored file")
    }
}

/// Setup test app with an isolated upload dir and a fresh mock store.
pub async fn setup_test_app() -> TestApp {
    let mock_store = store::spawn_mock_store().await;

    let upload_dir = tempfile::tempdir().expect("Failed to create temp upload directory");

    let config = Config {
        server_port: 0,
        store_url: mock_store.base_url.clone(),
        upload_dir: upload_dir.path().to_string_lossy().into_owned(),
        static_dir: "../../static".to_string(),
        max_upload_bytes: MAX_UPLOAD_BYTES,
    };

    let storage = LocalStorage::new(&config.upload_dir)
        .await
        .expect("Failed to create local storage");
    let metastore = StoreClient::new(&config.store_url).expect("Failed to create store client");

    let state = Arc::new(AppState {
        config: config.clone(),
        storage,
        metastore,
    });

    let app = routes::setup_routes(&config, state).expect("Failed to setup routes");
    let server = TestServer::new(app).expect("Failed to create test server");

    TestApp {
        server,
        store: mock_store,
        upload_dir,
    }
}
