use gatherly_shared::models::User;
use log::{error, info};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::api::{ApiClient, ApiError};
use crate::session::{SessionStore, AUTH_TOKEN_KEY, CURRENT_USER_KEY};
use crate::view::{self, Screen, ViewId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    Anonymous,
    PendingVerification,
    Authenticated,
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Session expired. Please try again.")]
    SessionExpired,

    #[error("Invalid OTP. Please try again.")]
    InvalidCode,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Outcome of a successful OTP verification. Both variants establish a
/// session; `PendingApproval` means the account still awaits admin
/// verification and every protected view resolves to the access-denied screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    Verified,
    PendingApproval,
}

/// What the view layer consumes: every controller error collapses into a
/// displayable message, nothing propagates as a panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowResult {
    pub success: bool,
    pub message: String,
}

impl FlowResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn err(error: &AuthError) -> Self {
        Self {
            success: false,
            message: error.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
struct PendingAuth {
    user_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginPayload {
    user_id: String,
    message: String,
}

#[derive(Deserialize)]
struct VerifyPayload {
    token: String,
    user: User,
}

/// Orchestrates login → OTP verification → session establishment, and owns
/// the session: resource controllers read the token through the API client
/// but only this controller ever writes it.
pub struct AuthFlow {
    api: Arc<ApiClient>,
    storage: Arc<dyn SessionStore>,
    user: Option<User>,
    pending: Option<PendingAuth>,
    loading: bool,
    current_view: ViewId,
}

impl AuthFlow {
    /// Builds the controller and restores a persisted session if the storage
    /// holds one. A corrupt snapshot is discarded rather than propagated.
    pub fn new(api: Arc<ApiClient>, storage: Arc<dyn SessionStore>) -> Self {
        let mut flow = Self {
            api,
            storage,
            user: None,
            pending: None,
            loading: false,
            current_view: ViewId::Home,
        };
        flow.restore();
        flow
    }

    fn restore(&mut self) {
        let token = self.storage.get(AUTH_TOKEN_KEY);
        let snapshot = self.storage.get(CURRENT_USER_KEY);

        if let (Some(token), Some(snapshot)) = (token, snapshot) {
            match serde_json::from_str::<User>(&snapshot) {
                Ok(user) => {
                    self.api.set_token(&token);
                    info!("Restored session for user {}", user.id);
                    self.user = Some(user);
                }
                Err(e) => {
                    error!("Error parsing stored user: {}", e);
                    self.storage.remove(AUTH_TOKEN_KEY);
                    self.storage.remove(CURRENT_USER_KEY);
                }
            }
        }
    }

    pub fn phase(&self) -> AuthPhase {
        if self.user.is_some() {
            AuthPhase::Authenticated
        } else if self.pending.is_some() {
            AuthPhase::PendingVerification
        } else {
            AuthPhase::Anonymous
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn current_view(&self) -> ViewId {
        self.current_view
    }

    pub fn set_current_view(&mut self, view: ViewId) {
        self.current_view = view;
    }

    /// Resolves what should be on screen right now. Verification is
    /// re-checked on every call, so an admin revoking approval takes effect
    /// the next time the user navigates.
    pub fn resolve_screen(&self) -> Screen {
        view::resolve(
            self.loading,
            self.phase(),
            self.user.as_ref(),
            self.current_view,
        )
    }

    /// Starts the handshake: looks the identifier up and leaves the flow in
    /// `PendingVerification`. The resolved account is kept private; only the
    /// user-facing message is returned.
    pub async fn login(&mut self, identifier: &str) -> Result<String, AuthError> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(AuthError::Validation(
                "Please enter your email or phone number".to_string(),
            ));
        }

        self.loading = true;
        let result = self
            .api
            .post::<LoginPayload>("/auth/login", json!({ "identifier": identifier }))
            .await;
        self.loading = false;

        let payload = result.map_err(|e| match e {
            ApiError::RequestFailed { status: 404, message } => AuthError::NotFound(message),
            other => AuthError::Api(other),
        })?;

        self.pending = Some(PendingAuth {
            user_id: payload.user_id,
        });

        Ok(payload.message)
    }

    /// Completes the handshake. Only valid while a login is pending: a stale
    /// or replayed code after `logout()` fails with `SessionExpired`. On a
    /// wrong code the pending identity is kept so the user can retry.
    pub async fn verify_otp(&mut self, otp: &str) -> Result<VerifyOutcome, AuthError> {
        let pending = self.pending.clone().ok_or(AuthError::SessionExpired)?;

        if otp.trim().is_empty() {
            return Err(AuthError::Validation("Please enter the code".to_string()));
        }

        self.loading = true;
        let result = self
            .api
            .post::<VerifyPayload>(
                "/auth/verify-otp",
                json!({ "userId": pending.user_id, "otp": otp }),
            )
            .await;
        self.loading = false;

        let payload = result.map_err(|e| match e {
            ApiError::RequestFailed { status: 400, .. } => AuthError::InvalidCode,
            ApiError::RequestFailed { status: 404, message } => AuthError::NotFound(message),
            other => AuthError::Api(other),
        })?;

        self.api.set_token(&payload.token);
        self.storage.set(AUTH_TOKEN_KEY, &payload.token);
        self.persist_user(&payload.user);

        info!(
            "Session established for user {} (verified={})",
            payload.user.id, payload.user.is_verified
        );

        let outcome = if payload.user.is_verified {
            VerifyOutcome::Verified
        } else {
            VerifyOutcome::PendingApproval
        };

        self.user = Some(payload.user);
        self.pending = None;

        Ok(outcome)
    }

    /// Tears the session down unconditionally: storage, token, pending
    /// identity, and view selection all reset.
    pub fn logout(&mut self) {
        self.storage.remove(AUTH_TOKEN_KEY);
        self.storage.remove(CURRENT_USER_KEY);
        self.api.clear_token();
        self.user = None;
        self.pending = None;
        self.current_view = ViewId::Home;
        info!("Logged out");
    }

    /// Merges partial profile fields via the API and replaces the local
    /// snapshot with the server's copy, so the persisted session never drifts
    /// from server truth.
    pub async fn update_user(&mut self, updates: serde_json::Value) -> Result<(), AuthError> {
        if self.user.is_none() {
            return Err(AuthError::SessionExpired);
        }

        let updated = self
            .api
            .put::<User>("/users/profile", updates)
            .await
            .map_err(|e| {
                error!("Error updating user: {}", e);
                AuthError::Api(e)
            })?;

        self.persist_user(&updated);
        self.user = Some(updated);

        Ok(())
    }

    fn persist_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(snapshot) => self.storage.set(CURRENT_USER_KEY, &snapshot),
            Err(e) => error!("Failed to serialize user snapshot: {}", e),
        }
    }
}
