//! Application factory
//!
//! Builds the actix-web application from shared state so the binary and the
//! integration tests serve exactly the same routes.

use std::collections::HashMap;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, web, App, HttpResponse};

use mv_core::repositories::UserRepository;
use mv_core::services::VerificationNotifier;
use mv_shared::config::CorsConfig;
use mv_shared::types::{HealthResponse, HealthStatus, ServiceHealth};

use crate::handlers::{json_error_handler, not_found};
use crate::middleware::create_cors;
use crate::routes::user::{check_verification, register, verify_email, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<R, N>(
    app_state: web::Data<AppState<R, N>>,
    cors_config: &CorsConfig,
    max_payload_size: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: UserRepository + ?Sized + 'static,
    N: VerificationNotifier + ?Sized + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .wrap(create_cors(cors_config))
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check::<R, N>))
        .service(
            web::scope("/user")
                .route("/register", web::post().to(register::<R, N>))
                .route(
                    "/verify-email/{username}/{verification_token}",
                    web::get().to(verify_email::<R, N>),
                )
                .route(
                    "/check-verification/{username}",
                    web::get().to(check_verification::<R, N>),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check<R, N>(state: web::Data<AppState<R, N>>) -> HttpResponse
where
    R: UserRepository + ?Sized + 'static,
    N: VerificationNotifier + ?Sized + 'static,
{
    let service = &state.verification_service;

    let mut services = HashMap::new();
    services.insert("store".to_string(), service.store_health().await);
    services.insert(
        "mail".to_string(),
        ServiceHealth {
            status: HealthStatus::Healthy,
            message: Some(format!("provider: {}", service.notifier_name())),
        },
    );

    let health = HealthResponse::from_services(services, env!("CARGO_PKG_VERSION"));

    if health.status == HealthStatus::Unhealthy {
        HttpResponse::ServiceUnavailable().json(health)
    } else {
        HttpResponse::Ok().json(health)
    }
}
