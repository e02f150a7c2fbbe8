//! Wire DTOs for the `/login` and `/signup` endpoints.
//!
//! DESIGN
//! ======
//! Field names match the backend's JSON keys exactly so serde needs no
//! renames. Responses are lenient: a missing `message` decodes as empty and
//! a missing or empty `redirect_url` means "no redirect".

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

/// Body of `POST /signup`.
///
/// `confirm_password` is sent even though it was already matched client-side
/// so the server can re-validate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Response body shared by both endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

impl AuthResponse {
    /// Redirect target, treating an empty string as absent.
    pub fn redirect_target(&self) -> Option<&str> {
        self.redirect_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}
