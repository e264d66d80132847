use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use ep_core::errors::DomainError;
use ep_core::services::verification::{DeliveryChannel, OtpStore};
use ep_shared::types::response::ApiResponse;
use ep_shared::utils::phone::mask_phone_number;

use crate::app::AppState;
use crate::dto::otp::{RequestCodeRequest, RequestCodeResponse};

/// Handler for POST /api/v1/otp/request
///
/// Issues a verification code for the given phone number and hands it to
/// the delivery channel. The code itself never appears in the response.
///
/// # Request Body
///
/// ```json
/// { "phone": "+911234567890" }
/// ```
///
/// # Responses
///
/// * `200` - Code issued and handed to the delivery channel
/// * `400` - Malformed request or invalid phone format
/// * `502` - Delivery channel failure
pub async fn request_code<D, S>(
    state: web::Data<AppState<D, S>>,
    request: web::Json<RequestCodeRequest>,
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
            "Validation failed for code request"
        );
        return HttpResponse::BadRequest().json(
            ApiResponse::<RequestCodeResponse>::error("Invalid phone number format")
                .with_request_id(request_id),
        );
    }

    tracing::info!(
        request_id = %request_id,
        phone = %mask_phone_number(&request.phone),
        "Processing verification code request"
    );

    match state.verification_service.send_code(&request.phone).await {
        Ok(result) => HttpResponse::Ok().json(
            ApiResponse::success(RequestCodeResponse {
                delivered: true,
                message_id: result.message_id,
                expires_in: result.expires_in_seconds,
            })
            .with_request_id(request_id),
        ),
        Err(DomainError::Verification(_)) | Err(DomainError::Validation { .. }) => {
            HttpResponse::BadRequest().json(
                ApiResponse::<RequestCodeResponse>::error("Invalid phone number format")
                    .with_request_id(request_id),
            )
        }
        Err(DomainError::Delivery(error)) => {
            tracing::error!(
                request_id = %request_id,
                phone = %mask_phone_number(&request.phone),
                error = %error,
                "Delivery channel failed"
            );
            HttpResponse::BadGateway().json(
                ApiResponse::<RequestCodeResponse>::error("Failed to deliver verification code")
                    .with_request_id(request_id),
            )
        }
        Err(error) => {
            tracing::error!(
                request_id = %request_id,
                phone = %mask_phone_number(&request.phone),
                error = %error,
                "Unexpected error while requesting code"
            );
            HttpResponse::InternalServerError().json(
                ApiResponse::<RequestCodeResponse>::error("Internal server error")
                    .with_request_id(request_id),
            )
        }
    }
}
