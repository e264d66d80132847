//! Shared utilities and common types for the ExpoPass server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - API response structures
//! - Utility functions (phone validation, masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CorsConfig, DeliveryConfig, Environment, ServerConfig, VerificationConfig,
};
pub use types::ApiResponse;
pub use utils::phone;
