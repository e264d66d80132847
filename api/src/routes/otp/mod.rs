//! OTP route handlers
//!
//! This module contains the visitor verification endpoints:
//! - Requesting a verification code (issue + deliver)
//! - Verifying a code
//! - Peeking at a live code (non-production only)

pub mod debug_code;
pub mod request_code;
pub mod verify_code;
