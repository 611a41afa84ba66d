use axum::{
    extract::Request,
    middleware,
    routing::{get, patch, post, put},
    Router,
};
use log::{info, warn};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::{
    auth_handlers::{login, verify_otp},
    guest_handlers::{create_guest, delete_guest, get_guests, update_guest},
    mini_event_handlers::{
        create_mini_event, delete_mini_event, get_mini_events, join_mini_event, my_participations,
        update_mini_event,
    },
    schedule_handlers::{
        create_schedule_item, delete_schedule_item, get_schedule, update_schedule_item,
    },
    user_handlers::{get_profile, get_users, rsvp_stats, update_profile, verify_user},
};
use gatherly_shared::auth::{auth_middleware, require_admin};
use gatherly_shared::store::EventStore;

/// Creates the API router over a given store implementation
pub fn create_router_with_store<S>(store: Arc<S>, prefix: &str) -> Router
where
    S: EventStore + 'static,
{
    info!("Setting up API routes with prefix: '{}'", prefix);

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Logging middleware to trace all requests
    async fn logging_middleware(
        req: Request,
        next: axum::middleware::Next,
    ) -> impl axum::response::IntoResponse {
        info!(
            "Router received request: method={}, uri={}",
            req.method(),
            req.uri()
        );
        next.run(req).await
    }

    // Routes available to any authenticated user
    let guest_routes = Router::new()
        .route("/users/profile", get(get_profile).put(update_profile))
        .route("/guests", get(get_guests).post(create_guest))
        .route("/guests/:id", put(update_guest).delete(delete_guest))
        .route("/schedule", get(get_schedule))
        .route("/mini-events", get(get_mini_events))
        .route("/mini-events/my-participations", get(my_participations))
        .route("/mini-events/:id/join", post(join_mini_event));

    // Admin-only management routes
    let admin_routes = Router::new()
        .route("/users", get(get_users))
        .route("/users/rsvp-stats", get(rsvp_stats))
        .route("/users/:id/verify", patch(verify_user))
        .route("/schedule", post(create_schedule_item))
        .route(
            "/schedule/:id",
            put(update_schedule_item).delete(delete_schedule_item),
        )
        .route("/mini-events", post(create_mini_event))
        .route(
            "/mini-events/:id",
            put(update_mini_event).delete(delete_mini_event),
        )
        .layer(middleware::from_fn(require_admin));

    let protected_routes = guest_routes
        .merge(admin_routes)
        .layer(middleware::from_fn(auth_middleware))
        .with_state(store.clone());

    // The auth handshake is the only unauthenticated surface
    let auth_routes = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/verify-otp", post(verify_otp))
        .with_state(store);

    let api_routes = protected_routes.merge(auth_routes);

    // Create the main router
    let router = if prefix.is_empty() {
        // For tests, don't nest the routes
        api_routes
            .layer(cors)
            .layer(middleware::from_fn(logging_middleware))
    } else {
        Router::new()
            .nest(prefix, api_routes)
            .layer(cors)
            .layer(middleware::from_fn(logging_middleware))
    };

    // Add a fallback handler for 404s
    router.fallback(|req: Request| async move {
        warn!("No route matched for: {} {}", req.method(), req.uri());
        (
            axum::http::StatusCode::NOT_FOUND,
            "The requested resource was not found".to_string(),
        )
    })
}
