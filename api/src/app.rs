//! Application state and route configuration
//!
//! This module holds the shared application state and the route tree used
//! by both the server binary and the integration tests.

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use ep_core::services::verification::{DeliveryChannel, OtpStore, VerificationService};
use ep_shared::config::Environment;

use crate::routes::otp::{debug_code, request_code, verify_code};

/// Application state that holds shared services
pub struct AppState<D, S>
where
    D: DeliveryChannel,
    S: OtpStore,
{
    pub verification_service: Arc<VerificationService<D, S>>,
}

/// Register the API routes
///
/// The debug peek endpoint is only mounted when the environment allows
/// debug surfaces; in production the route does not exist at all.
pub fn configure_api<D, S>(cfg: &mut web::ServiceConfig, environment: Environment)
where
    D: DeliveryChannel + 'static,
    S: OtpStore + 'static,
{
    let mut otp_scope = web::scope("/otp")
        .route("/request", web::post().to(request_code::request_code::<D, S>))
        .route("/verify", web::post().to(verify_code::verify_code::<D, S>));

    if environment.is_debug() {
        otp_scope = otp_scope.route("/debug", web::get().to(debug_code::debug_code::<D, S>));
    }

    cfg.service(
        web::scope("/api/v1")
            .service(otp_scope)
            .route("/", web::get().to(api_info)),
    )
    .route("/health", web::get().to(health_check));
}

/// Health check endpoint handler
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "expo-pass-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// API documentation endpoint
pub async fn api_info() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "ExpoPass Verification API v1",
        "endpoints": {
            "health": "/health",
            "otp": {
                "request": {
                    "path": "/api/v1/otp/request",
                    "method": "POST",
                    "description": "Issue a verification code and deliver it to the visitor",
                    "request_body": {
                        "phone": "string (E.164 format)"
                    },
                    "responses": {
                        "200": "Code issued and handed to the delivery channel",
                        "400": "Invalid phone format",
                        "502": "Delivery channel failure"
                    }
                },
                "verify": {
                    "path": "/api/v1/otp/verify",
                    "method": "POST",
                    "description": "Verify a code; a match consumes the code",
                    "request_body": {
                        "phone": "string (E.164 format)",
                        "code": "string (6 digits)"
                    },
                    "responses": {
                        "200": "Always, with data.ok reporting the outcome"
                    }
                }
            }
        }
    }))
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
