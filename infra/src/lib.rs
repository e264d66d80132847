//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the ExpoPass visitor
//! verification service. It provides the concrete implementations behind the
//! core trait seams:
//!
//! - **Store**: process-local in-memory OTP store (codes die with the process)
//! - **Delivery**: outbound code delivery channels (WhatsApp boundary)

// Re-export core types for convenience
pub use ep_core::errors::*;

/// Store module - in-memory OTP storage
pub mod store;

/// Delivery module - outbound code delivery channels
pub mod delivery;
