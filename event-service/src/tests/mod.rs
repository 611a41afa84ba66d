use axum::Router;
use gatherly_shared::seed::seed_demo_data;
use gatherly_shared::store::memory::MemoryEventStore;
use gatherly_shared::store::UserStore;
use gatherly_shared::test_utils::test_logging::init_test_logging;
use std::sync::Arc;

use crate::routes::create_router_with_store;

mod guest_handlers_test;
mod user_handlers_test;

/// Sets up a router over a freshly seeded in-memory store.
pub async fn create_test_app() -> (Router, Arc<MemoryEventStore>) {
    init_test_logging();

    let store = Arc::new(MemoryEventStore::new());
    seed_demo_data(store.as_ref())
        .await
        .expect("failed to seed test store");

    let app = create_router_with_store(store.clone(), "");
    (app, store)
}

/// Resolves a seeded user's id by email.
pub async fn seeded_user_id(store: &MemoryEventStore, email: &str) -> String {
    store
        .get_user_by_identifier(email)
        .await
        .expect("seeded user missing")
        .id
}

/// Builds an unauthenticated JSON request, for the auth handshake endpoints.
pub fn json_request(
    method: &str,
    path: &str,
    body: serde_json::Value,
) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(path)
        .header("content-type", "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .expect("failed to build test request")
}
