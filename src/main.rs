use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use prefs_assistant::adapters::http::{build_router, HttpSettings, PreferencesAppState};
use prefs_assistant::adapters::{
    InMemoryPreferenceRepository, JwtConfig, JwtSessionValidator, PostgresPreferenceRepository,
};
use prefs_assistant::application::UserLocks;
use prefs_assistant::config::{AppConfig, DatabaseConfig};
use prefs_assistant::ports::PreferenceRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let repository = build_repository(&config).await?;
    let locks = Arc::new(UserLocks::from_flag(config.features.serialize_user_updates));
    let state = PreferencesAppState::new(repository, locks);

    let mut jwt = JwtConfig::new(config.auth.jwt_secret.clone()).with_leeway(config.auth.leeway_secs);
    if let Some(issuer) = &config.auth.issuer {
        jwt = jwt.with_issuer(issuer);
    }
    if let Some(audience) = &config.auth.audience {
        jwt = jwt.with_audience(audience);
    }
    let validator = Arc::new(JwtSessionValidator::new(jwt));

    let settings = HttpSettings {
        request_timeout: config.server.request_timeout(),
        cors_origins: config.server.cors_origins_list(),
    };
    let app = build_router(state, validator, &settings);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        serialize_user_updates = config.features.serialize_user_updates,
        "Server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

async fn build_repository(
    config: &AppConfig,
) -> Result<Arc<dyn PreferenceRepository>, Box<dyn std::error::Error>> {
    if config.features.in_memory_store {
        tracing::warn!("Using in-memory preference store; data is lost on restart");
        return Ok(Arc::new(InMemoryPreferenceRepository::new()));
    }

    let pool = connect(&config.database).await?;
    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
    }
    Ok(Arc::new(PostgresPreferenceRepository::new(pool)))
}

async fn connect(db: &DatabaseConfig) -> Result<sqlx::PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(db.max_connections)
        .acquire_timeout(db.acquire_timeout())
        .connect(&db.url)
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
