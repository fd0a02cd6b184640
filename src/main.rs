//! Kinoteka Server — Media Catalog REST Backend
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use kinoteka_core::config::AppConfig;
use kinoteka_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from TOML files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("KINOTEKA_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Kinoteka v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db = kinoteka_database::DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    kinoteka_database::migration::run_migrations(db.pool()).await?;
    tracing::info!("Database migrations complete");

    // ── Step 2: Initialize repositories ──────────────────────────
    let user_repo = Arc::new(kinoteka_database::repositories::user::UserRepository::new(
        db.pool().clone(),
    ));
    let actor_repo = Arc::new(
        kinoteka_database::repositories::actor::ActorRepository::new(db.pool().clone()),
    );
    let movie_repo = Arc::new(
        kinoteka_database::repositories::movie::MovieRepository::new(db.pool().clone()),
    );

    // ── Step 3: Initialize auth system ───────────────────────────
    tracing::info!("Initializing authentication system...");
    let password_hasher = Arc::new(kinoteka_auth::password::hasher::PasswordHasher::new(
        &config.auth,
    ));
    let jwt_encoder = Arc::new(kinoteka_auth::jwt::encoder::JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(kinoteka_auth::jwt::decoder::JwtDecoder::new(&config.auth));
    let auth_service = Arc::new(kinoteka_auth::service::AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&jwt_encoder),
    ));

    // ── Step 4: Initialize services ──────────────────────────────
    tracing::info!("Initializing services...");
    let actor_service = Arc::new(kinoteka_service::actor::service::ActorService::new(
        Arc::clone(&actor_repo),
    ));
    let movie_service = Arc::new(kinoteka_service::movie::service::MovieService::new(
        Arc::clone(&movie_repo),
        Arc::clone(&actor_repo),
    ));
    tracing::info!("Services initialized");

    // ── Step 5: Build and start HTTP server ──────────────────────
    let app_state = kinoteka_api::state::AppState {
        // Configuration
        config: Arc::new(config.clone()),

        // Infrastructure
        db: db.clone(),

        // Auth
        jwt_decoder: Arc::clone(&jwt_decoder),
        auth_service: Arc::clone(&auth_service),

        // Services
        actor_service: Arc::clone(&actor_service),
        movie_service: Arc::clone(&movie_service),
    };

    let app = kinoteka_api::router::build_router(app_state);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Kinoteka server listening on {}", addr);

    // ── Step 6: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    db.close().await;

    tracing::info!("Kinoteka server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
