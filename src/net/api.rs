//! REST calls for the login and signup endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The response body is decoded whatever the HTTP status: the backend
//! reports rejections as `{"success": false, ...}` with a non-2xx code.
//! Only an unreachable server or an undecodable body becomes an `ApiError`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use serde::Serialize;

use super::types::{AuthResponse, LoginRequest, SignupRequest};
use crate::config::AuthConfig;

/// Transport-level failure of an auth request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("response decode failed (status {status}): {message}")]
    Decode { status: u16, message: String },

    #[error("auth API not available outside the browser")]
    Unavailable,
}

/// Backend collaborator for the auth page.
pub trait AuthApi {
    /// `POST /login`.
    fn login(&self, request: &LoginRequest) -> impl Future<Output = Result<AuthResponse, ApiError>>;

    /// `POST /signup`.
    fn signup(&self, request: &SignupRequest) -> impl Future<Output = Result<AuthResponse, ApiError>>;
}

/// `AuthApi` backed by `fetch` through `gloo-net`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthApi {
    login_url: String,
    signup_url: String,
}

impl HttpAuthApi {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            login_url: config.login_endpoint.clone(),
            signup_url: config.signup_endpoint.clone(),
        }
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    pub fn signup_url(&self) -> &str {
        &self.signup_url
    }
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        post_json(&self.login_url, request).await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError> {
        post_json(&self.signup_url, request).await
    }
}

/// Decode a response body into an `AuthResponse`.
///
/// # Errors
///
/// Returns `ApiError::Decode` carrying `status` when the body is not a
/// valid auth response.
pub fn decode_auth_response(status: u16, body: &str) -> Result<AuthResponse, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode { status, message: e.to_string() })
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed(url: &str, message: impl ToString) -> ApiError {
    ApiError::Request { url: url.to_owned(), message: message.to_string() }
}

/// `POST` `body` as JSON to `url` and decode the auth response.
async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| request_failed(url, e))?
            .send()
            .await
            .map_err(|e| request_failed(url, e))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| request_failed(url, e))?;
        if !resp.ok() {
            log::debug!("{url} answered status {status}");
        }
        decode_auth_response(status, &text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err(ApiError::Unavailable)
    }
}
