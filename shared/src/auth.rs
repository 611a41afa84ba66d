use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Extension, Json,
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use log::{debug, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::models::{Role, User};

static JWT_SECRET: Lazy<String> =
    Lazy::new(|| std::env::var("JWT_SECRET").unwrap_or_else(|_| "gatherly-dev-secret".to_string()));

const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub email: String,
    pub role: Role,
    pub exp: i64,
}

/// Signs a bearer token for the given user, valid for 24 hours.
pub fn create_token(user: &User) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: user.id.clone(),
        email: user.email.clone(),
        role: user.role,
        exp: chrono::Utc::now().timestamp() + TOKEN_TTL_SECS,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
}

pub fn decode_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(JWT_SECRET.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}

/// Middleware guarding all protected routes. Extracts and validates the bearer
/// token, then injects the caller's user id and role as request extensions.
pub async fn auth_middleware(mut req: Request, next: Next) -> Response {
    let header = match req.headers().get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        Some(value) => value,
        None => {
            warn!(
                "Missing Authorization header for {} {}",
                req.method(),
                req.uri()
            );
            return unauthorized("Authentication required");
        }
    };

    let token = match header.strip_prefix("Bearer ") {
        Some(token) => token,
        None => {
            warn!("Malformed Authorization header");
            return unauthorized("Authentication required");
        }
    };

    let claims = match decode_token(token) {
        Ok(claims) => claims,
        Err(e) => {
            warn!("Token validation failed: {}", e);
            return unauthorized("Invalid or expired token");
        }
    };

    debug!("Authenticated request for user {}", claims.sub);

    req.extensions_mut().insert(claims.sub.clone());
    req.extensions_mut().insert(claims.role);

    next.run(req).await
}

/// Middleware for admin-only routes. Must run after `auth_middleware`.
pub async fn require_admin(Extension(role): Extension<Role>, req: Request, next: Next) -> Response {
    if role != Role::Admin {
        warn!("Non-admin caller rejected for {} {}", req.method(), req.uri());
        return (
            StatusCode::FORBIDDEN,
            Json(serde_json::json!({ "error": "Admin access required" })),
        )
            .into_response();
    }
    next.run(req).await
}

/// Builds a request carrying a valid bearer token for `user_id`, for use in
/// handler tests.
#[cfg(feature = "test_utils")]
pub fn create_test_request(
    method: &str,
    path: &str,
    user_id: &str,
    body: Option<serde_json::Value>,
) -> Request<axum::body::Body> {
    create_test_request_with_role(method, path, user_id, Role::Guest, body)
}

#[cfg(feature = "test_utils")]
pub fn create_test_request_with_role(
    method: &str,
    path: &str,
    user_id: &str,
    role: Role,
    body: Option<serde_json::Value>,
) -> Request<axum::body::Body> {
    use crate::models::{now_str, RsvpStatus};

    let user = User {
        id: user_id.to_string(),
        email: format!("{}@test.local", user_id),
        name: user_id.to_string(),
        phone: None,
        role,
        is_verified: true,
        rsvp_status: RsvpStatus::Pending,
        travel_details: None,
        dietary_restrictions: vec![],
        emergency_contact: None,
        created_at: now_str(),
    };
    let token = create_token(&user).expect("failed to sign test token");

    let builder = Request::builder()
        .method(method)
        .uri(path)
        .header(AUTHORIZATION, format!("Bearer {}", token))
        .header("content-type", "application/json");

    match body {
        Some(json) => builder
            .body(axum::body::Body::from(json.to_string()))
            .expect("failed to build test request"),
        None => builder
            .body(axum::body::Body::empty())
            .expect("failed to build test request"),
    }
}
