//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped wiring and delegates behavior to the
//! controller.

pub mod auth;
