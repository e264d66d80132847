//! Delivery channel module
//!
//! Outbound delivery of verification codes to visitors. The WhatsApp
//! Business API integration lives behind the same [`DeliveryChannel`] seam
//! and is deployed separately; this crate ships the mock channel used in
//! development and tests.
//!
//! [`DeliveryChannel`]: ep_core::services::verification::DeliveryChannel

pub mod mock;

pub use mock::MockWhatsAppChannel;

use ep_shared::config::DeliveryConfig;
use tracing::warn;

/// Create a delivery channel from configuration
///
/// Unknown providers fall back to the mock channel rather than failing
/// startup; the choice is logged.
pub fn create_delivery_channel(config: &DeliveryConfig) -> MockWhatsAppChannel {
    match config.provider.as_str() {
        "mock" => MockWhatsAppChannel::with_options(config.console_output, false),
        other => {
            warn!(
                provider = other,
                "Unknown delivery provider, falling back to mock channel"
            );
            MockWhatsAppChannel::with_options(config.console_output, false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_builds_mock_for_mock_provider() {
        let config = DeliveryConfig {
            provider: "mock".to_string(),
            console_output: false,
        };
        let channel = create_delivery_channel(&config);
        assert_eq!(channel.get_message_count(), 0);
    }

    #[test]
    fn test_factory_falls_back_on_unknown_provider() {
        let config = DeliveryConfig {
            provider: "carrier-pigeon".to_string(),
            console_output: false,
        };
        let channel = create_delivery_channel(&config);
        assert_eq!(channel.get_message_count(), 0);
    }
}
