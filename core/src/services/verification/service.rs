//! Main verification service implementation

use chrono::Duration;
use std::sync::Arc;

use ep_shared::utils::phone::{is_valid_phone, mask_phone_number};

use crate::domain::entities::otp_entry::CODE_LENGTH;
use crate::errors::{DomainResult, VerificationError};

use super::config::VerificationServiceConfig;
use super::traits::{DeliveryChannel, OtpStore};
use super::types::{SendCodeResult, VerifyCodeResult};

/// Verification service for visitor phone verification
///
/// Orchestrates the flow between the HTTP boundary, the OTP store and the
/// outbound delivery channel. The service owns no state of its own; all
/// lifecycle lives in the store.
pub struct VerificationService<D: DeliveryChannel, S: OtpStore> {
    /// Channel that carries codes to the visitor
    delivery_channel: Arc<D>,
    /// Store holding live codes
    otp_store: Arc<S>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<D: DeliveryChannel, S: OtpStore> VerificationService<D, S> {
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `delivery_channel` - Delivery channel implementation
    /// * `otp_store` - OTP store implementation
    /// * `config` - Service configuration
    pub fn new(
        delivery_channel: Arc<D>,
        otp_store: Arc<S>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            delivery_channel,
            otp_store,
            config,
        }
    }

    /// Issue a verification code and hand it to the delivery channel
    ///
    /// This method:
    /// 1. Validates the phone number format (E.164)
    /// 2. Issues a new code, replacing any live code for this phone
    /// 3. Sends the code through the delivery channel
    ///
    /// The code itself never appears in the result; callers only learn the
    /// provider message id and the code lifetime.
    ///
    /// # Errors
    ///
    /// * `DomainError::Verification` - If the phone number is malformed
    /// * `DomainError::Delivery` - If the channel fails to send. The issued
    ///   entry stays live; a re-request overwrites it.
    pub async fn send_code(&self, phone: &str) -> DomainResult<SendCodeResult> {
        if !is_valid_phone(phone) {
            tracing::warn!(
                phone = %mask_phone_number(phone),
                event = "invalid_phone_format",
                "Rejected code request for malformed phone number"
            );
            return Err(VerificationError::InvalidPhoneFormat {
                phone: mask_phone_number(phone),
            }
            .into());
        }

        let ttl = Duration::seconds(self.config.code_ttl_seconds as i64);
        let code = self.otp_store.issue(phone, ttl).await;

        tracing::info!(
            phone = %mask_phone_number(phone),
            event = "otp_issued",
            ttl_seconds = self.config.code_ttl_seconds,
            "Issued verification code"
        );

        let message_id = self
            .delivery_channel
            .deliver_code(phone, &code)
            .await
            .map_err(|e| {
                tracing::error!(
                    phone = %mask_phone_number(phone),
                    channel = self.delivery_channel.channel_name(),
                    error = %e,
                    event = "otp_delivery_failed",
                    "Failed to deliver verification code"
                );
                e
            })?;

        tracing::info!(
            phone = %mask_phone_number(phone),
            channel = self.delivery_channel.channel_name(),
            message_id = %message_id,
            event = "otp_delivered",
            "Verification code handed to delivery channel"
        );

        Ok(SendCodeResult {
            message_id,
            expires_in_seconds: self.config.code_ttl_seconds,
        })
    }

    /// Verify a candidate code for a phone number
    ///
    /// A malformed candidate (wrong length or non-digits) is reported as an
    /// ordinary failed verification without touching the store. Mismatch,
    /// absence and expiry are likewise plain `verified: false` outcomes,
    /// never errors.
    pub async fn verify_code(&self, phone: &str, code: &str) -> DomainResult<VerifyCodeResult> {
        if code.len() != CODE_LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
            tracing::warn!(
                phone = %mask_phone_number(phone),
                event = "invalid_code_format",
                code_length = code.len(),
                "Rejected malformed verification code"
            );
            return Ok(VerifyCodeResult { verified: false });
        }

        let verified = self.otp_store.verify(phone, code).await;

        if verified {
            tracing::info!(
                phone = %mask_phone_number(phone),
                event = "otp_verified",
                "Verification code accepted and consumed"
            );
        } else {
            tracing::warn!(
                phone = %mask_phone_number(phone),
                event = "otp_verification_failed",
                "Verification code rejected"
            );
        }

        Ok(VerifyCodeResult { verified })
    }

    /// Return the live code for a phone number without consuming it
    ///
    /// Debug aid for non-production environments; the HTTP layer must not
    /// mount this in production.
    pub async fn peek_code(&self, phone: &str) -> Option<String> {
        self.otp_store.peek(phone).await
    }
}
