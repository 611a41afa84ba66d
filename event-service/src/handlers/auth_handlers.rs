use axum::{extract::State, Json};
use gatherly_shared::auth::create_token;
use gatherly_shared::store::UserStore;
use log::{info, warn};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::{LoginRequest, LoginResponse, VerifyOtpRequest, VerifyOtpResponse};

/// Demo second factor. A real deployment would deliver a one-time code out of
/// band (SMS/email); no such channel exists here.
pub const DEMO_OTP: &str = "123456";

// POST /auth/login
pub async fn login<S>(
    State(store): State<Arc<S>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>>
where
    S: UserStore,
{
    let identifier = request.identifier.trim();
    if identifier.is_empty() {
        return Err(AppError::bad_request("Identifier is required".to_string()));
    }

    let user = store
        .get_user_by_identifier(identifier)
        .await
        .map_err(|_| AppError::not_found("User not found".to_string()))?;

    info!("OTP challenge issued for user {}", user.id);

    Ok(Json(LoginResponse {
        user_id: user.id,
        message: "OTP sent successfully".to_string(),
    }))
}

// POST /auth/verify-otp
pub async fn verify_otp<S>(
    State(store): State<Arc<S>>,
    Json(request): Json<VerifyOtpRequest>,
) -> Result<Json<VerifyOtpResponse>>
where
    S: UserStore,
{
    if request.user_id.is_empty() || request.otp.is_empty() {
        return Err(AppError::bad_request(
            "User id and OTP are required".to_string(),
        ));
    }

    if request.otp != DEMO_OTP {
        warn!("Invalid OTP attempt for user {}", request.user_id);
        return Err(AppError::bad_request("Invalid OTP".to_string()));
    }

    let user = store
        .get_user(&request.user_id)
        .await
        .map_err(|_| AppError::not_found("User not found".to_string()))?;

    // A token is issued even when the account still awaits admin approval; the
    // client gates every view on `isVerified` instead of failing the login.
    let token = create_token(&user)
        .map_err(|e| AppError::internal(format!("Failed to sign token: {}", e)))?;

    info!("User {} authenticated (verified={})", user.id, user.is_verified);

    Ok(Json(VerifyOtpResponse {
        token,
        user,
        message: "Login successful".to_string(),
    }))
}
