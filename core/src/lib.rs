//! # ExpoPass Core
//!
//! Core business logic and domain layer for the ExpoPass backend.
//! This crate contains the OTP entry entity, the verification service,
//! the store and delivery trait seams, and the domain error types.

pub mod domain;
pub mod errors;
pub mod services;
pub mod time;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
pub use time::{Clock, ManualClock, SystemClock};
