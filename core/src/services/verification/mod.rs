//! Verification service module for phone-based visitor verification
//!
//! This module provides the passcode verification workflow:
//! - Code issuance into the OTP store
//! - Code hand-off to the outbound delivery channel
//! - Code verification with single-use consumption
//! - Debug peek for non-production environments

mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::VerificationServiceConfig;
pub use service::VerificationService;
pub use traits::{DeliveryChannel, OtpStore};
pub use types::{SendCodeResult, VerifyCodeResult};
