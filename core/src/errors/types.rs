//! Specific error enums for verification and delivery operations.

use thiserror::Error;

/// Verification-related errors
#[derive(Error, Debug)]
pub enum VerificationError {
    #[error("Invalid phone format: {phone}")]
    InvalidPhoneFormat { phone: String },
}

/// Outbound delivery channel errors
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Delivery channel failure: {message}")]
    ChannelFailure { message: String },

    #[error("Delivery channel unavailable: {channel}")]
    ChannelUnavailable { channel: String },
}
