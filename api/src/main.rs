use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use ep_core::services::verification::{VerificationService, VerificationServiceConfig};
use ep_infra::delivery::{create_delivery_channel, MockWhatsAppChannel};
use ep_infra::store::MemoryOtpStore;
use ep_shared::config::AppConfig;

mod app;
mod dto;
mod middleware;
mod routes;

use app::{configure_api, not_found, AppState};
use middleware::cors::create_cors;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting ExpoPass verification API server");

    // Load configuration
    let config = AppConfig::from_env();
    let environment = config.environment;
    let cors_config = config.cors.clone();
    let bind_address = config.server.bind_address();

    info!(
        environment = %environment,
        bind_address = %bind_address,
        "Configuration loaded"
    );

    // Wire up the verification service: delivery channel + in-memory store.
    // Store contents are process-local and die on restart; codes are
    // short-lived so a restart simply forces a re-request.
    let delivery_channel = Arc::new(create_delivery_channel(&config.delivery));
    let otp_store = Arc::new(MemoryOtpStore::with_system_clock());
    let verification_service = Arc::new(VerificationService::new(
        delivery_channel,
        otp_store,
        VerificationServiceConfig::from(&config.verification),
    ));

    let state = web::Data::new(AppState {
        verification_service,
    });

    if environment.is_debug() {
        info!("Debug peek endpoint enabled at /api/v1/otp/debug");
    }

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(create_cors(environment, &cors_config))
            .app_data(state.clone())
            .configure(|cfg| {
                configure_api::<MockWhatsAppChannel, MemoryOtpStore>(cfg, environment)
            })
            .default_service(web::route().to(not_found))
    })
    .bind(&bind_address)?
    .run()
    .await
}
