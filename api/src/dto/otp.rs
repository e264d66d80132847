use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RequestCodeRequest {
    /// Phone number in E.164 format
    /// Example: "+911234567890"
    #[validate(length(min = 8, max = 16))]
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    /// Phone number in E.164 format
    #[validate(length(min = 8, max = 16))]
    pub phone: String,

    /// 6-digit verification code
    #[validate(length(equal = 6))]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestCodeResponse {
    /// Whether the code was handed to the delivery channel
    pub delivered: bool,
    /// Delivery provider message id
    pub message_id: String,
    /// Seconds until the issued code expires
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyCodeResponse {
    /// Whether the code matched and was consumed
    pub ok: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PeekCodeQuery {
    /// Phone number to inspect
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeekCodeResponse {
    /// Phone number that was inspected
    pub phone: String,
    /// The live code, if any
    pub code: Option<String>,
}
