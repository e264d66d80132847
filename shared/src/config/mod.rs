//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection
//! - `server` - HTTP server and CORS configuration
//! - `verification` - OTP verification and delivery channel configuration

pub mod environment;
pub mod server;
pub mod verification;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use environment::Environment;
pub use server::{CorsConfig, ServerConfig};
pub use verification::{DeliveryConfig, VerificationConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// OTP verification configuration
    #[serde(default)]
    pub verification: VerificationConfig,

    /// Delivery channel configuration
    #[serde(default)]
    pub delivery: DeliveryConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            verification: VerificationConfig::default(),
            delivery: DeliveryConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `ENVIRONMENT`, `SERVER_HOST`/`SERVER_PORT`, `OTP_TTL_SECONDS`
    /// and `DELIVERY_CHANNEL`, falling back to defaults for anything unset.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            cors: if environment.is_production() {
                CorsConfig::default()
            } else {
                CorsConfig::development()
            },
            verification: VerificationConfig::from_env(),
            delivery: DeliveryConfig::from_env(),
        }
    }
}
