//! Integration tests for the OTP verification routes

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};
use std::sync::Arc;

use ep_api::app::{configure_api, AppState};
use ep_core::services::verification::{VerificationService, VerificationServiceConfig};
use ep_infra::delivery::MockWhatsAppChannel;
use ep_infra::store::MemoryOtpStore;
use ep_shared::config::Environment;

const PHONE: &str = "+911234567890";

fn test_state(simulate_failure: bool) -> web::Data<AppState<MockWhatsAppChannel, MemoryOtpStore>> {
    let service = VerificationService::new(
        Arc::new(MockWhatsAppChannel::with_options(false, simulate_failure)),
        Arc::new(MemoryOtpStore::with_system_clock()),
        VerificationServiceConfig::default(),
    );
    web::Data::new(AppState {
        verification_service: Arc::new(service),
    })
}

macro_rules! init_app {
    ($state:expr, $environment:expr) => {
        test::init_service(
            App::new().app_data($state.clone()).configure(|cfg| {
                configure_api::<MockWhatsAppChannel, MemoryOtpStore>(cfg, $environment)
            }),
        )
        .await
    };
}

/// Fetch the live code for a phone through the debug surface
macro_rules! peek_code {
    ($app:expr, $phone:expr) => {{
        let req = test::TestRequest::get()
            .uri(&format!(
                "/api/v1/otp/debug?phone={}",
                $phone.replace('+', "%2B")
            ))
            .to_request();
        let body: Value = test::call_and_read_body_json(&$app, req).await;
        body["data"]["code"].as_str().map(|s| s.to_string())
    }};
}

#[actix_web::test]
async fn test_health_endpoint() {
    let state = test_state(false);
    let app = init_app!(state, Environment::Development);

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "expo-pass-api");
}

#[actix_web::test]
async fn test_request_and_verify_round_trip() {
    let state = test_state(false);
    let app = init_app!(state, Environment::Development);

    // Request a code
    let req = test::TestRequest::post()
        .uri("/api/v1/otp/request")
        .set_json(json!({ "phone": PHONE }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["delivered"], true);
    assert_eq!(body["data"]["expires_in"], 300);
    assert!(body["data"]["message_id"]
        .as_str()
        .unwrap()
        .starts_with("mock_"));

    // The code is never present in the request response
    assert!(body["data"].get("code").is_none());

    // Fetch it through the debug surface and verify
    let code = peek_code!(app, PHONE).expect("code should be live");
    assert_eq!(code.len(), 6);

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/verify")
        .set_json(json!({ "phone": PHONE, "code": code }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["ok"], true);

    // Single use: the same code is rejected on a second attempt
    let req = test::TestRequest::post()
        .uri("/api/v1/otp/verify")
        .set_json(json!({ "phone": PHONE, "code": code }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["ok"], false);
}

#[actix_web::test]
async fn test_request_with_invalid_phone() {
    let state = test_state(false);
    let app = init_app!(state, Environment::Development);

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/request")
        .set_json(json!({ "phone": "12345" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_request_with_non_e164_phone() {
    let state = test_state(false);
    let app = init_app!(state, Environment::Development);

    // Long enough to pass DTO validation, rejected by the E.164 check
    let req = test::TestRequest::post()
        .uri("/api/v1/otp/request")
        .set_json(json!({ "phone": "911234567890" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_verify_unknown_phone_is_ordinary_false() {
    let state = test_state(false);
    let app = init_app!(state, Environment::Development);

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/verify")
        .set_json(json!({ "phone": PHONE, "code": "123456" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["ok"], false);
}

#[actix_web::test]
async fn test_wrong_code_leaves_entry_verifiable() {
    let state = test_state(false);
    let app = init_app!(state, Environment::Development);

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/request")
        .set_json(json!({ "phone": PHONE }))
        .to_request();
    test::call_service(&app, req).await;

    let code = peek_code!(app, PHONE).unwrap();
    let wrong = if code == "222222" { "333333" } else { "222222" };

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/verify")
        .set_json(json!({ "phone": PHONE, "code": wrong }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["ok"], false);

    // The live entry survived the mismatch
    let req = test::TestRequest::post()
        .uri("/api/v1/otp/verify")
        .set_json(json!({ "phone": PHONE, "code": code }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["ok"], true);
}

#[actix_web::test]
async fn test_malformed_code_is_ordinary_false() {
    let state = test_state(false);
    let app = init_app!(state, Environment::Development);

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/verify")
        .set_json(json!({ "phone": PHONE, "code": "12ab56" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["ok"], false);
}

#[actix_web::test]
async fn test_delivery_failure_maps_to_bad_gateway() {
    let state = test_state(true);
    let app = init_app!(state, Environment::Development);

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/request")
        .set_json(json!({ "phone": PHONE }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[actix_web::test]
async fn test_debug_route_absent_in_production() {
    let state = test_state(false);
    let app = init_app!(state, Environment::Production);

    let req = test::TestRequest::get()
        .uri("/api/v1/otp/debug?phone=%2B911234567890")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
