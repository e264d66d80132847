//! Types for verification service results

/// Result of issuing and delivering a verification code
#[derive(Debug, Clone)]
pub struct SendCodeResult {
    /// The delivery provider's message id
    pub message_id: String,
    /// Seconds until the issued code expires
    pub expires_in_seconds: u64,
}

/// Result of verifying a code
#[derive(Debug, Clone)]
pub struct VerifyCodeResult {
    /// Whether the candidate matched a live code
    pub verified: bool,
}
