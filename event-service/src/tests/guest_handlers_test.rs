use axum::http::StatusCode;
use gatherly_shared::auth::create_test_request;
use gatherly_shared::store::GuestStore;
use serde_json::json;
use tower::ServiceExt;

use gatherly_shared::test_utils::http_test_utils::response_to_json;

use super::create_test_app;

#[tokio::test]
async fn test_create_and_list_guests_scoped_to_owner() {
    let (app, _store) = create_test_app().await;

    let payload = json!({
        "name": "Plus One",
        "age": 29,
        "relationship": "partner",
        "dietaryRestrictions": ["vegan"]
    });

    let response = app
        .clone()
        .oneshot(create_test_request(
            "POST",
            "/guests",
            "user-a",
            Some(payload),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let created = response_to_json(response).await;
    assert_eq!(created["name"], "Plus One");
    assert_eq!(created["userId"], "user-a");
    assert_eq!(created["relationship"], "partner");

    // Owner sees the companion
    let response = app
        .clone()
        .oneshot(create_test_request("GET", "/guests", "user-a", None))
        .await
        .unwrap();
    let list = response_to_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    // Another user sees nothing
    let response = app
        .oneshot(create_test_request("GET", "/guests", "user-b", None))
        .await
        .unwrap();
    let list = response_to_json(response).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_guest_requires_name() {
    let (app, _store) = create_test_app().await;

    let response = app
        .oneshot(create_test_request(
            "POST",
            "/guests",
            "user-a",
            Some(json!({ "name": "" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_guest_changes_relationship() {
    let (app, store) = create_test_app().await;

    let response = app
        .clone()
        .oneshot(create_test_request(
            "POST",
            "/guests",
            "user-a",
            Some(json!({ "name": "Cousin", "relationship": "cousin" })),
        ))
        .await
        .unwrap();
    let created = response_to_json(response).await;
    let guest_id = created["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(create_test_request(
            "PUT",
            &format!("/guests/{}", guest_id),
            "user-a",
            Some(json!({ "relationship": "sibling" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated = response_to_json(response).await;
    assert_eq!(updated["relationship"], "sibling");
    assert_eq!(updated["name"], "Cousin");

    let stored = store.get_guest(&guest_id).await.unwrap();
    assert_eq!(stored.relationship.as_deref(), Some("sibling"));
}

#[tokio::test]
async fn test_cross_user_guest_access_is_reported_as_not_found() {
    let (app, store) = create_test_app().await;

    let response = app
        .clone()
        .oneshot(create_test_request(
            "POST",
            "/guests",
            "user-a",
            Some(json!({ "name": "Private Guest" })),
        ))
        .await
        .unwrap();
    let created = response_to_json(response).await;
    let guest_id = created["id"].as_str().unwrap().to_string();

    // Update by a different user: 404, not 403
    let response = app
        .clone()
        .oneshot(create_test_request(
            "PUT",
            &format!("/guests/{}", guest_id),
            "user-b",
            Some(json!({ "name": "Hijacked" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Delete by a different user: 404 as well, and the record survives
    let response = app
        .oneshot(create_test_request(
            "DELETE",
            &format!("/guests/{}", guest_id),
            "user-b",
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let stored = store.get_guest(&guest_id).await.unwrap();
    assert_eq!(stored.name, "Private Guest");
}

#[tokio::test]
async fn test_delete_guest_by_owner() {
    let (app, store) = create_test_app().await;

    let response = app
        .clone()
        .oneshot(create_test_request(
            "POST",
            "/guests",
            "user-a",
            Some(json!({ "name": "Short Stay" })),
        ))
        .await
        .unwrap();
    let created = response_to_json(response).await;
    let guest_id = created["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(create_test_request(
            "DELETE",
            &format!("/guests/{}", guest_id),
            "user-a",
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_to_json(response).await;
    assert_eq!(body["message"], "Guest deleted successfully");

    assert!(store.get_guest(&guest_id).await.is_err());
}
