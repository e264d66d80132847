use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use ep_core::services::verification::{DeliveryChannel, OtpStore};
use ep_shared::types::response::ApiResponse;
use ep_shared::utils::phone::mask_phone_number;

use crate::app::AppState;
use crate::dto::otp::{VerifyCodeRequest, VerifyCodeResponse};

/// Handler for POST /api/v1/otp/verify
///
/// Checks a candidate code for a phone number. A match consumes the code.
/// Mismatch, absence and expiry are ordinary `ok: false` outcomes, not
/// errors; the caller translates them into a user-facing retry message.
///
/// # Request Body
///
/// ```json
/// { "phone": "+911234567890", "code": "123456" }
/// ```
pub async fn verify_code<D, S>(
    state: web::Data<AppState<D, S>>,
    request: web::Json<VerifyCodeRequest>,
) -> HttpResponse
where
    D: DeliveryChannel + 'static,
    S: OtpStore + 'static,
{
    let request_id = Uuid::new_v4().to_string();

    if let Err(validation_errors) = request.0.validate() {
        tracing::warn!(
            request_id = %request_id,
            errors = ?validation_errors,
            "Validation failed for verify request"
        );
        // A malformed candidate can never match a live code
        return HttpResponse::Ok().json(
            ApiResponse::success(VerifyCodeResponse { ok: false }).with_request_id(request_id),
        );
    }

    tracing::info!(
        request_id = %request_id,
        phone = %mask_phone_number(&request.phone),
        "Processing code verification"
    );

    match state
        .verification_service
        .verify_code(&request.phone, &request.code)
        .await
    {
        Ok(result) => HttpResponse::Ok().json(
            ApiResponse::success(VerifyCodeResponse {
                ok: result.verified,
            })
            .with_request_id(request_id),
        ),
        Err(error) => {
            tracing::error!(
                request_id = %request_id,
                phone = %mask_phone_number(&request.phone),
                error = %error,
                "Unexpected error during verification"
            );
            HttpResponse::InternalServerError().json(
                ApiResponse::<VerifyCodeResponse>::error("Internal server error")
                    .with_request_id(request_id),
            )
        }
    }
}
