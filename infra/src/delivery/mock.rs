//! Mock WhatsApp Delivery Channel
//!
//! A mock implementation of the delivery channel for development and
//! testing. Messages are logged to the console instead of being sent.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use ep_core::errors::{DeliveryError, DomainResult};
use ep_core::services::verification::DeliveryChannel;
use ep_shared::utils::phone::mask_phone_number;

/// Mock delivery channel for development and testing
///
/// This implementation:
/// - Logs outbound messages to console
/// - Generates mock message IDs
/// - Tracks message count for testing
#[derive(Clone)]
pub struct MockWhatsAppChannel {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print messages to console
    console_output: bool,
}

impl MockWhatsAppChannel {
    /// Create a new mock channel
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
            console_output: true,
        }
    }

    /// Create a mock channel with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Reset the message counter
    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }
}

impl Default for MockWhatsAppChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeliveryChannel for MockWhatsAppChannel {
    async fn deliver_code(&self, phone: &str, code: &str) -> DomainResult<String> {
        let masked_phone = mask_phone_number(phone);

        if self.simulate_failure {
            warn!(
                phone = %masked_phone,
                "Mock channel simulating delivery failure"
            );
            return Err(DeliveryError::ChannelUnavailable {
                channel: self.channel_name().to_string(),
            }
            .into());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        let message = format!("Your ExpoPass verification code is {}", code);

        if self.console_output {
            // Console output for development - show full message
            println!("\n{}", "=".repeat(60));
            println!("MOCK WHATSAPP CHANNEL - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {} (masked: {})", phone, masked_phone);
            println!("Message ID: {}", message_id);
            println!("Content: {}", message);
            println!("{}\n", "=".repeat(60));
        }

        // Structured logging for non-console environments
        info!(
            target: "delivery_channel",
            provider = "mock",
            phone = %masked_phone,
            message_id = %message_id,
            message_length = message.len(),
            "Verification message sent (mock)"
        );

        // Simulate network delay
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        Ok(message_id)
    }

    fn channel_name(&self) -> &str {
        "whatsapp-mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ep_core::errors::DomainError;

    #[tokio::test]
    async fn test_mock_delivery_success() {
        let channel = MockWhatsAppChannel::with_options(false, false);
        let result = channel.deliver_code("+911234567890", "123456").await;

        assert!(result.is_ok());
        let message_id = result.unwrap();
        assert!(message_id.starts_with("mock_"));
        assert_eq!(channel.get_message_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_delivery_simulated_failure() {
        let channel = MockWhatsAppChannel::with_options(false, true);
        let result = channel.deliver_code("+911234567890", "123456").await;

        assert!(matches!(result, Err(DomainError::Delivery(_))));
        assert_eq!(channel.get_message_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_delivery_counter() {
        let channel = MockWhatsAppChannel::with_options(false, false);

        for i in 1..=3 {
            let _ = channel.deliver_code("+911234567890", "123456").await;
            assert_eq!(channel.get_message_count(), i);
        }

        channel.reset_counter();
        assert_eq!(channel.get_message_count(), 0);
    }

    #[test]
    fn test_channel_name() {
        let channel = MockWhatsAppChannel::new();
        assert_eq!(channel.channel_name(), "whatsapp-mock");
    }
}
