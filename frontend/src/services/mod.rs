//! Backend services.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`analyze`] - resume analysis submission
//! - [`roles`] - target-role profile listing

pub mod analyze;
pub mod roles;

pub use analyze::*;
pub use roles::*;
