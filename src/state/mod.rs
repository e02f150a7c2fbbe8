//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data mutated through methods, so behavior can be tested
//! without a browser. Rendering reads it through the `AuthView` boundary.

pub mod auth_view;
