//! Traits for OTP storage and delivery channel integration

use async_trait::async_trait;
use chrono::Duration;

use crate::errors::DomainResult;

/// Trait for the process-wide one-time passcode store.
///
/// The store holds at most one live entry per identifier. None of the
/// operations error: absence, expiry and mismatch are ordinary outcomes,
/// and each call is atomic with respect to the underlying map.
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Generate a fresh code for the identifier, replacing any prior entry,
    /// and return it. Always succeeds.
    async fn issue(&self, identifier: &str, ttl: Duration) -> String;

    /// Check a candidate against the stored entry.
    ///
    /// Returns true and consumes the entry on an exact match. An expired
    /// entry is purged and reported as absent. A mismatch leaves the entry
    /// intact so the caller may retry before expiry.
    async fn verify(&self, identifier: &str, candidate: &str) -> bool;

    /// Return the live code without consuming or validating it.
    ///
    /// Debug and testing aid only; must never be wired into a
    /// production-facing surface.
    async fn peek(&self, identifier: &str) -> Option<String>;
}

/// Trait for the outbound code delivery channel (WhatsApp boundary)
#[async_trait]
pub trait DeliveryChannel: Send + Sync {
    /// Deliver a verification code to a phone number, returning the
    /// provider message id
    async fn deliver_code(&self, phone: &str, code: &str) -> DomainResult<String>;

    /// Name of the channel, for logging and diagnostics
    fn channel_name(&self) -> &str;
}
