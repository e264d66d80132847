use actix_web::{web, HttpResponse};

use ep_core::services::verification::{DeliveryChannel, OtpStore};
use ep_shared::types::response::ApiResponse;
use ep_shared::utils::phone::mask_phone_number;

use crate::app::AppState;
use crate::dto::otp::{PeekCodeQuery, PeekCodeResponse};

/// Handler for GET /api/v1/otp/debug?phone=
///
/// Returns the live code for a phone number without consuming it. This
/// route is only mounted in non-production environments (see
/// `configure_api`); in production it does not exist.
pub async fn debug_code<D, S>(
    state: web::Data<AppState<D, S>>,
    query: web::Query<PeekCodeQuery>,
) -> HttpResponse
where
    D: DeliveryChannel + 'static,
    S: OtpStore + 'static,
{
    let code = state.verification_service.peek_code(&query.phone).await;

    tracing::debug!(
        phone = %mask_phone_number(&query.phone),
        has_code = code.is_some(),
        "Debug peek at stored code"
    );

    HttpResponse::Ok().json(ApiResponse::success(PeekCodeResponse {
        phone: query.phone.clone(),
        code,
    }))
}
