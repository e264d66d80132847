//! OTP verification and delivery channel configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Default lifetime for an issued verification code (5 minutes)
pub const DEFAULT_CODE_TTL_SECONDS: u64 = 300;

/// Configuration for the OTP verification service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Seconds before an issued code expires
    #[serde(default = "default_code_ttl")]
    pub code_ttl_seconds: u64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: default_code_ttl(),
        }
    }
}

impl VerificationConfig {
    /// Load verification configuration from environment variables
    pub fn from_env() -> Self {
        let code_ttl_seconds = env::var("OTP_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CODE_TTL_SECONDS);
        Self { code_ttl_seconds }
    }
}

/// Configuration for the outbound code delivery channel
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeliveryConfig {
    /// Channel provider name ("mock" is the only in-tree provider;
    /// the WhatsApp integration lives behind the same trait boundary)
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Whether the provider should echo sent messages to the console
    #[serde(default = "default_console_output")]
    pub console_output: bool,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            console_output: default_console_output(),
        }
    }
}

impl DeliveryConfig {
    /// Load delivery configuration from environment variables
    pub fn from_env() -> Self {
        let provider = env::var("DELIVERY_CHANNEL").unwrap_or_else(|_| default_provider());
        let console_output = env::var("DELIVERY_CONSOLE_OUTPUT")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or_else(|_| default_console_output());
        Self {
            provider,
            console_output,
        }
    }
}

fn default_code_ttl() -> u64 {
    DEFAULT_CODE_TTL_SECONDS
}

fn default_provider() -> String {
    String::from("mock")
}

fn default_console_output() -> bool {
    true
}
