//! In-process mock of the external metadata store.
//!
//! Speaks the same records API the real store does: create appends a record
//! with server-assigned `id`/`created`/`updated`, list returns a page
//! envelope sorted by `created` descending. Failure modes can be toggled to
//! exercise the error paths.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Duration, Utc};
use galleria_core::models::{ImageRecord, NewImageRecord};

#[derive(Clone)]
struct MockStoreState {
    records: Arc<Mutex<Vec<ImageRecord>>>,
    fail_create: Arc<AtomicBool>,
    fail_list: Arc<AtomicBool>,
    next_id: Arc<AtomicI64>,
    base_time: DateTime<Utc>,
}

/// Handle to a running mock store.
pub struct MockStore {
    pub base_url: String,
    state: MockStoreState,
}

impl MockStore {
    /// Make subsequent create calls fail with a 500.
    pub fn fail_create(&self, fail: bool) {
        self.state.fail_create.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent list calls fail with a 500.
    pub fn fail_list(&self, fail: bool) {
        self.state.fail_list.store(fail, Ordering::SeqCst);
    }

    /// Number of records currently held.
    pub fn record_count(&self) -> usize {
        self.state.records.lock().expect("records lock").len()
    }
}

/// Bind the mock store to an ephemeral port and serve it in the background.
pub async fn spawn_mock_store() -> MockStore {
    let state = MockStoreState {
        records: Arc::new(Mutex::new(Vec::new())),
        fail_create: Arc::new(AtomicBool::new(false)),
        fail_list: Arc::new(AtomicBool::new(false)),
        next_id: Arc::new(AtomicI64::new(0)),
        base_time: Utc::now(),
    };

    let router = Router::new()
        .route(
            "/api/collections/images/records",
            get(list_records).post(create_record),
        )
        .route("/api/health", get(health))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock store");
    let addr = listener.local_addr().expect("mock store addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve mock store");
    });

    MockStore {
        base_url: format!("http://{}", addr),
        state,
    }
}

async fn create_record(
    State(state): State<MockStoreState>,
    Json(new_record): Json<NewImageRecord>,
) -> Response {
    if state.fail_create.load(Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "message": "store unavailable" })),
        )
            .into_response();
    }

    let n = state.next_id.fetch_add(1, Ordering::SeqCst);
    // Strictly increasing timestamps so ordering assertions are stable even
    // when two creates land in the same millisecond.
    let timestamp = state.base_time + Duration::seconds(n);

    let record = ImageRecord {
        id: format!("rec{:012}", n),
        name: new_record.name,
        location: new_record.location,
        mime_type: new_record.mime_type,
        created: timestamp,
        updated: timestamp,
    };

    state
        .records
        .lock()
        .expect("records lock")
        .push(record.clone());

    Json(record).into_response()
}

async fn list_records(State(state): State<MockStoreState>) -> Response {
    if state.fail_list.load(Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "message": "store unavailable" })),
        )
            .into_response();
    }

    let mut items = state.records.lock().expect("records lock").clone();
    items.sort_by(|a, b| b.created.cmp(&a.created));

    Json(serde_json::json!({
        "page": 1,
        "perPage": 500,
        "totalItems": items.len(),
        "items": items,
    }))
    .into_response()
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "code": 200, "message": "API is healthy." }))
}
