//! Configuration for the verification service

use ep_shared::config::verification::DEFAULT_CODE_TTL_SECONDS;

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Seconds before an issued code expires
    pub code_ttl_seconds: u64,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: DEFAULT_CODE_TTL_SECONDS,
        }
    }
}

impl From<&ep_shared::config::VerificationConfig> for VerificationServiceConfig {
    fn from(config: &ep_shared::config::VerificationConfig) -> Self {
        Self {
            code_ttl_seconds: config.code_ttl_seconds,
        }
    }
}
