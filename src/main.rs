//! WatchBox Server — users and folders CRUD backend
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use watchbox_api::AppState;
use watchbox_core::config::AppConfig;
use watchbox_core::error::AppError;
use watchbox_database::{DatabasePool, PgUnitOfWork};
use watchbox_entity::unit_of_work::UnitOfWork;
use watchbox_service::{FolderService, PasswordHasher, UserService};

#[tokio::main]
async fn main() {
    let env = std::env::var("WATCHBOX_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
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
    tracing::info!("Starting WatchBox v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database).await?;
    watchbox_database::migration::run_migrations(db.pool()).await?;

    // ── Step 2: Unit of work and services ────────────────────────
    let uow: Arc<dyn UnitOfWork> = Arc::new(PgUnitOfWork::new(db.pool().clone()));
    let password_hasher = Arc::new(PasswordHasher::new());
    let user_service = Arc::new(UserService::new(Arc::clone(&uow), Arc::clone(&password_hasher)));
    let folder_service = Arc::new(FolderService::new(Arc::clone(&uow)));

    // ── Step 3: Build and start HTTP server ──────────────────────
    let state = AppState {
        config: Arc::new(config.clone()),
        user_service,
        folder_service,
    };

    let app = watchbox_api::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("WatchBox server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    tracing::info!("WatchBox server shut down gracefully");
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
