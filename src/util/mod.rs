//! Helpers shared by the controller and the page.

pub mod browser;
pub mod timer;
pub mod validation;
