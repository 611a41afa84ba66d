use log::error;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::sync::RwLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("Request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    /// No response at all (connection refused, DNS failure, dropped socket).
    #[error("Connection error. Please try again.")]
    NetworkUnavailable(String),

    #[error("Unexpected response payload: {0}")]
    InvalidResponse(String),
}

/// Single point of outbound HTTP. Attaches the bearer token when one is held
/// and translates failures into [`ApiError`]; callers never see raw transport
/// errors.
pub struct ApiClient {
    base_url: String,
    http: Client,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
            token: RwLock::new(None),
        }
    }

    /// Replaces the held bearer token. The auth flow controller is the only
    /// intended caller; persistence is its job, not this client's.
    pub fn set_token(&self, token: &str) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.to_string());
        }
    }

    pub fn clear_token(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|slot| slot.clone())
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.http.request(method, &url);
        if let Some(token) = self.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| {
            error!("API request error for {}: {}", url, e);
            ApiError::NetworkUnavailable(e.to_string())
        })?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::NetworkUnavailable(e.to_string()))?;
        let payload: serde_json::Value =
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

        if !status.is_success() {
            let message = payload
                .get("error")
                .and_then(|v| v.as_str())
                .unwrap_or("API request failed")
                .to_string();
            return Err(ApiError::RequestFailed {
                status: status.as_u16(),
                message,
            });
        }

        Ok(payload)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let payload = self.request(Method::GET, path, None).await?;
        serde_json::from_value(payload).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<T, ApiError> {
        let payload = self.request(Method::POST, path, Some(body)).await?;
        serde_json::from_value(payload).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<T, ApiError> {
        let payload = self.request(Method::PUT, path, Some(body)).await?;
        serde_json::from_value(payload).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.request(Method::DELETE, path, None).await?;
        Ok(())
    }
}
