//! Login submission: endpoint resolution, backend seam, and stub mode.
//!
//! Browser (`csr`): [`HttpLoginBackend`] performs a real `POST` via
//! `gloo-net`. Native builds get an unavailable backend, so tests inject
//! their own [`LoginBackend`].
//!
//! ERROR HANDLING
//! ==============
//! Backend failures are logged with detail and surfaced as [`SubmitError`].
//! The page turns every `SubmitError` into one generic message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use super::types::{ApiError, LoginRequest, LoginResponse};
use crate::config::ApiConfig;

/// Path appended to the base URL.
pub const LOGIN_PATH: &str = "/auth/login";

/// Message shown when no base URL is configured.
pub const STUB_MESSAGE: &str =
    "Logged in (stub). Configure REACT_APP_API_BASE or REACT_APP_BACKEND_URL for API.";

/// Submission failed; detail is for logs only.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("login request failed: {0}")]
    Api(#[from] ApiError),
}

/// Build `{base}/auth/login`. `base` is expected without a trailing slash.
pub fn login_endpoint(base: &str) -> String {
    format!("{base}{LOGIN_PATH}")
}

fn success_message(server_message: &str) -> String {
    format!("Success: {server_message}")
}

// =============================================================================
// BACKEND SEAM
// =============================================================================

/// Performs the login request. Enables fakes in tests.
///
/// Futures are `?Send` because browser fetch futures are not `Send`.
#[async_trait::async_trait(?Send)]
pub trait LoginBackend: Send + Sync {
    /// Send `request` to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails, the server responds
    /// with a non-success status, or the body cannot be parsed.
    async fn login(&self, endpoint: &str, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
}

/// JSON-over-HTTP backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpLoginBackend;

#[async_trait::async_trait(?Send)]
impl LoginBackend for HttpLoginBackend {
    async fn login(&self, endpoint: &str, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(endpoint)
                .json(request)
                .map_err(|e| ApiError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status { status: resp.status() });
            }
            resp.json::<LoginResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (endpoint, request);
            Err(ApiError::Unavailable)
        }
    }
}

// =============================================================================
// CLIENT
// =============================================================================

/// Configuration plus backend, provided to the page through context.
#[derive(Clone)]
pub struct AuthClient {
    config: ApiConfig,
    backend: Arc<dyn LoginBackend>,
}

impl AuthClient {
    pub fn new(config: ApiConfig, backend: Arc<dyn LoginBackend>) -> Self {
        Self { config, backend }
    }

    /// Client backed by [`HttpLoginBackend`].
    pub fn http(config: ApiConfig) -> Self {
        Self::new(config, Arc::new(HttpLoginBackend))
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Resolved login endpoint, or `None` in stub mode.
    pub fn endpoint(&self) -> Option<String> {
        self.config.base_url.as_deref().map(login_endpoint)
    }

    /// Submit a validated payload and return the status message to show.
    ///
    /// Stub mode logs the payload and never calls the backend.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] if the backend call fails.
    pub async fn submit(&self, request: &LoginRequest) -> Result<String, SubmitError> {
        let Some(endpoint) = self.endpoint() else {
            log::info!("login payload (stub): {request:?}");
            return Ok(STUB_MESSAGE.to_owned());
        };

        log::debug!("POST {endpoint}");
        match self.backend.login(&endpoint, request).await {
            Ok(resp) => Ok(success_message(&resp.message)),
            Err(e) => {
                log::warn!("login to {endpoint} failed: {e}");
                Err(e.into())
            }
        }
    }
}
