//! Domain-specific error types and error handling.
//!
//! Absence of a code and code mismatch are ordinary boolean outcomes of the
//! store, not errors; these types cover the failures that remain (malformed
//! input at the service boundary and delivery channel faults).

mod types;

// Re-export all error types
pub use types::{DeliveryError, VerificationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

pub type DomainResult<T> = Result<T, DomainError>;
