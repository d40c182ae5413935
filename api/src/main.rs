use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::info;

use mv_api::app::create_app;
use mv_api::config::load_config;
use mv_api::routes::user::AppState;
use mv_core::repositories::{InMemoryUserRepository, UserRepository};
use mv_core::services::{VerificationService, VerificationServiceConfig};
use mv_infra::database::{DatabasePool, MySqlUserRepository};
use mv_infra::mail::create_notifier;
use mv_shared::config::{AppConfig, LogFormat, StoreBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().context("failed to load configuration")?;

    init_logger(&config);

    info!(
        "Starting MailVerify API Server ({} environment)",
        config.environment
    );

    let repository = create_repository(&config).await?;
    let notifier = create_notifier(&config.mail, config.environment);
    info!("Using {} mail provider", notifier.provider_name());

    let verification_service = VerificationService::with_config(
        repository,
        notifier,
        VerificationServiceConfig::from(&config.verification),
    )
    .context("invalid verification settings")?;

    let app_state = web::Data::new(AppState::new(verification_service));
    let cors_config = config.cors.clone();
    let max_payload_size = config.server.max_payload_size;

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server =
        HttpServer::new(move || create_app(app_state.clone(), &cors_config, max_payload_size))
            .keep_alive(Duration::from_secs(config.server.keep_alive));

    // 0 keeps actix's default of one worker per physical core
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}

/// Initialize env_logger; `RUST_LOG` overrides the configured level
fn init_logger(config: &AppConfig) {
    let env = env_logger::Env::new().default_filter_or(config.logging.level.as_str());
    let mut builder = env_logger::Builder::from_env(env);

    if config.logging.format == LogFormat::Compact {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{} {} {}: {}",
                buf.timestamp(),
                record.level(),
                record.target(),
                record.args()
            )
        });
    }

    builder.init();
}

async fn create_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn UserRepository>> {
    match config.store.backend {
        StoreBackend::Memory => {
            info!("Using in-memory user store");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
        StoreBackend::MySql => {
            let pool = DatabasePool::new(config.database.clone())
                .await
                .context("failed to connect to MySQL")?;
            info!("MySQL pool ready, {}", pool.statistics());
            Ok(Arc::new(MySqlUserRepository::new(pool.get_pool().clone())))
        }
    }
}
