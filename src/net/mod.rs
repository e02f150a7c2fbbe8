//! Networking for the auth endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP exchange behind the `AuthApi` trait and `types`
//! defines the JSON schema shared with the backend.

pub mod api;
pub mod types;
