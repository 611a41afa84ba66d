use gatherly_shared::models::{Guest, MiniEvent};
use gatherly_shared::test_utils::test_logging::init_test_logging;
use serde_json::json;
use std::sync::Arc;

use crate::api::{ApiClient, ApiError};
use crate::resources::ResourceController;

fn guest_json(id: &str, name: &str, relationship: &str) -> serde_json::Value {
    json!({
        "id": id,
        "userId": "john-1",
        "name": name,
        "relationship": relationship,
        "dietaryRestrictions": [],
        "createdAt": "2024-01-01T00:00:00+00:00"
    })
}

fn mini_event_json(id: &str, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "type": "game",
        "maxParticipants": 50,
        "isActive": true,
        "createdAt": "2024-01-01T00:00:00+00:00"
    })
}

#[tokio::test]
async fn refresh_sends_bearer_token_and_loads_collection() {
    init_test_logging();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/guests")
        .match_header("authorization", "Bearer demo-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([guest_json("g-1", "Plus One", "partner")]).to_string())
        .create_async()
        .await;

    let api = Arc::new(ApiClient::new(server.url()));
    api.set_token("demo-token");
    let mut guests = ResourceController::<Guest>::new(api);

    guests.refresh().await.unwrap();

    mock.assert_async().await;
    assert_eq!(guests.items().len(), 1);
    assert_eq!(guests.items()[0].name, "Plus One");
    assert!(guests.last_error().is_none());
}

#[tokio::test]
async fn create_appends_after_server_confirms() {
    init_test_logging();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/guests")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(guest_json("g-2", "Cousin", "cousin").to_string())
        .create_async()
        .await;

    let api = Arc::new(ApiClient::new(server.url()));
    let mut guests = ResourceController::<Guest>::new(api);

    let created = guests
        .create(json!({ "name": "Cousin", "relationship": "cousin" }))
        .await
        .unwrap();

    assert_eq!(created.id, "g-2");
    assert_eq!(guests.items().len(), 1);
}

#[tokio::test]
async fn update_applies_locally_only_after_server_resolves() {
    init_test_logging();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/guests")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([guest_json("g-1", "Plus One", "partner")]).to_string())
        .create_async()
        .await;
    server
        .mock("PUT", "/guests/g-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(guest_json("g-1", "Plus One", "sibling").to_string())
        .create_async()
        .await;

    let api = Arc::new(ApiClient::new(server.url()));
    let mut guests = ResourceController::<Guest>::new(api);
    guests.refresh().await.unwrap();
    assert_eq!(guests.items()[0].relationship.as_deref(), Some("partner"));

    guests
        .update("g-1", json!({ "relationship": "sibling" }))
        .await
        .unwrap();

    assert_eq!(guests.items()[0].relationship.as_deref(), Some("sibling"));
}

#[tokio::test]
async fn failed_update_leaves_local_state_untouched() {
    init_test_logging();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/guests")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([guest_json("g-1", "Plus One", "partner")]).to_string())
        .create_async()
        .await;
    server
        .mock("PUT", "/guests/g-1")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(json!({ "error": "Internal server error" }).to_string())
        .create_async()
        .await;

    let api = Arc::new(ApiClient::new(server.url()));
    let mut guests = ResourceController::<Guest>::new(api);
    guests.refresh().await.unwrap();

    let err = guests
        .update("g-1", json!({ "relationship": "sibling" }))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::RequestFailed { status: 500, .. }));
    assert_eq!(guests.items()[0].relationship.as_deref(), Some("partner"));
    assert!(guests.last_error().is_some());
}

#[tokio::test]
async fn remove_drops_item_after_server_confirms() {
    init_test_logging();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/guests")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([guest_json("g-1", "Plus One", "partner")]).to_string())
        .create_async()
        .await;
    server
        .mock("DELETE", "/guests/g-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "message": "Guest deleted successfully" }).to_string())
        .create_async()
        .await;

    let api = Arc::new(ApiClient::new(server.url()));
    let mut guests = ResourceController::<Guest>::new(api);
    guests.refresh().await.unwrap();

    guests.remove("g-1").await.unwrap();
    assert!(guests.items().is_empty());
}

#[tokio::test]
async fn failed_delete_keeps_item() {
    init_test_logging();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/guests")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([guest_json("g-1", "Plus One", "partner")]).to_string())
        .create_async()
        .await;
    server
        .mock("DELETE", "/guests/g-1")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(json!({ "error": "Guest not found" }).to_string())
        .create_async()
        .await;

    let api = Arc::new(ApiClient::new(server.url()));
    let mut guests = ResourceController::<Guest>::new(api);
    guests.refresh().await.unwrap();

    let err = guests.remove("g-1").await.unwrap_err();
    assert!(matches!(err, ApiError::RequestFailed { status: 404, .. }));
    assert_eq!(guests.items().len(), 1);
}

#[tokio::test]
async fn join_mini_event_returns_participation() {
    init_test_logging();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/mini-events/e-1/join")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "p-1",
                "userId": "john-1",
                "miniEventId": "e-1",
                "status": "registered",
                "createdAt": "2024-01-01T00:00:00+00:00"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let api = Arc::new(ApiClient::new(server.url()));
    let mut events = ResourceController::<MiniEvent>::new(api);

    let participation = events.join("e-1").await.unwrap();
    assert_eq!(participation.mini_event_id, "e-1");
}

#[tokio::test]
async fn duplicate_join_is_a_conflict_not_a_duplicate() {
    init_test_logging();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/mini-events")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([mini_event_json("e-1", "Trivia Night")]).to_string())
        .create_async()
        .await;
    server
        .mock("POST", "/mini-events/e-1/join")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(json!({ "error": "Already participating in this event" }).to_string())
        .create_async()
        .await;

    let api = Arc::new(ApiClient::new(server.url()));
    let mut events = ResourceController::<MiniEvent>::new(api);
    events.refresh().await.unwrap();

    let err = events.join("e-1").await.unwrap_err();
    assert!(matches!(err, ApiError::RequestFailed { status: 400, .. }));
    // The event list itself is unaffected by the rejected join
    assert_eq!(events.items().len(), 1);
    assert_eq!(
        events.last_error().unwrap(),
        "Request failed with status 400: Already participating in this event"
    );
}

#[tokio::test]
async fn transport_failure_is_network_unavailable() {
    init_test_logging();
    // Nothing listens here
    let api = Arc::new(ApiClient::new("http://127.0.0.1:1".to_string()));
    let mut guests = ResourceController::<Guest>::new(api);

    let err = guests.refresh().await.unwrap_err();
    assert!(matches!(err, ApiError::NetworkUnavailable(_)));
    assert!(guests.items().is_empty());
}
