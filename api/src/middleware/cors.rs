//! CORS middleware configuration for cross-origin requests.
//!
//! The configuration is environment-aware: permissive in development for
//! easier testing, restricted to configured origins in production.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use tracing::info;

use ep_shared::config::{CorsConfig, Environment};

/// Creates a CORS middleware instance for the current environment.
///
/// In production only the origins listed in the configuration are allowed;
/// anywhere else any origin is accepted.
pub fn create_cors(environment: Environment, config: &CorsConfig) -> Cors {
    if environment.is_production() {
        create_production_cors(config)
    } else {
        create_development_cors(config)
    }
}

/// Permissive configuration for development and staging
fn create_development_cors(config: &CorsConfig) -> Cors {
    info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(config.max_age as usize)
        .supports_credentials()
}

/// Restrictive configuration for production
fn create_production_cors(config: &CorsConfig) -> Cors {
    info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(config.max_age as usize);

    for origin in &config.allowed_origins {
        if !origin.is_empty() {
            info!(origin = origin.as_str(), "Adding allowed origin");
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}
