use axum::http::StatusCode;
use gatherly_shared::auth::{create_test_request, create_test_request_with_role};
use gatherly_shared::models::Role;
use serde_json::json;
use tower::ServiceExt;

use gatherly_shared::test_utils::http_test_utils::response_to_json;

use super::{create_test_app, seeded_user_id};

#[tokio::test]
async fn test_get_users_requires_admin() {
    let (app, _store) = create_test_app().await;

    let response = app
        .clone()
        .oneshot(create_test_request("GET", "/users", "user-a", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .oneshot(create_test_request_with_role(
            "GET",
            "/users",
            "admin-user",
            Role::Admin,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let users = response_to_json(response).await;
    assert_eq!(users.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_rsvp_stats_counts_seeded_users() {
    let (app, _store) = create_test_app().await;

    let response = app
        .oneshot(create_test_request_with_role(
            "GET",
            "/users/rsvp-stats",
            "admin-user",
            Role::Admin,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let stats = response_to_json(response).await;
    assert_eq!(stats["accepted"], 3);
    assert_eq!(stats["pending"], 1);
    assert_eq!(stats["declined"], 1);
}

#[tokio::test]
async fn test_profile_includes_companions() {
    let (app, store) = create_test_app().await;
    let john = seeded_user_id(&store, "john@example.com").await;

    app.clone()
        .oneshot(create_test_request(
            "POST",
            "/guests",
            &john,
            Some(json!({ "name": "Plus One" })),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(create_test_request("GET", "/users/profile", &john, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let profile = response_to_json(response).await;
    assert_eq!(profile["email"], "john@example.com");
    assert_eq!(profile["travelDetails"]["flightNumber"], "AA123");
    assert_eq!(profile["guests"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_profile_merges_partial_fields() {
    let (app, store) = create_test_app().await;
    let jane = seeded_user_id(&store, "jane@example.com").await;

    let response = app
        .oneshot(create_test_request(
            "PUT",
            "/users/profile",
            &jane,
            Some(json!({
                "rsvpStatus": "accepted",
                "travelDetails": {
                    "arrivalDate": "2024-03-15T00:00:00Z",
                    "accommodation": "City Inn"
                }
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated = response_to_json(response).await;
    assert_eq!(updated["rsvpStatus"], "accepted");
    assert_eq!(updated["travelDetails"]["accommodation"], "City Inn");
    // Untouched fields are preserved, and identity fields can't change
    assert_eq!(updated["id"], jane);
    assert_eq!(updated["email"], "jane@example.com");
    assert_eq!(updated["isVerified"], false);
    assert_eq!(updated["name"], "Jane Doe");
}

#[tokio::test]
async fn test_admin_verifies_user() {
    let (app, store) = create_test_app().await;
    let jane = seeded_user_id(&store, "jane@example.com").await;

    // Guests cannot verify anyone
    let response = app
        .clone()
        .oneshot(create_test_request(
            "PATCH",
            &format!("/users/{}/verify", jane),
            "user-a",
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .oneshot(create_test_request_with_role(
            "PATCH",
            &format!("/users/{}/verify", jane),
            "admin-user",
            Role::Admin,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let verified = response_to_json(response).await;
    assert_eq!(verified["isVerified"], true);
}

#[tokio::test]
async fn test_verify_unknown_user_returns_not_found() {
    let (app, _store) = create_test_app().await;

    let response = app
        .oneshot(create_test_request_with_role(
            "PATCH",
            "/users/no-such-user/verify",
            "admin-user",
            Role::Admin,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
