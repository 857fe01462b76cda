//! Server assembly and lifecycle.

use std::sync::Arc;

use tracing::info;

use campushub_auth::SessionCleanup;
use campushub_core::AppResult;
use campushub_core::config::AppConfig;
use campushub_core::error::AppError;
use campushub_database::{DatabasePool, MemoryStore, migration, store::Stores};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the store bundle for the configured backend.
pub async fn build_stores(config: &AppConfig) -> AppResult<Stores> {
    match config.database.backend.as_str() {
        "memory" => {
            info!("Using in-memory store backend");
            Ok(Stores::memory(Arc::new(MemoryStore::new())))
        }
        "postgres" => {
            let pool = DatabasePool::connect(&config.database).await?;
            migration::run_migrations(pool.pool()).await?;
            Ok(Stores::postgres(pool.into_pool()))
        }
        other => Err(AppError::configuration(format!(
            "Unknown database backend: '{other}'"
        ))),
    }
}

/// Runs the HTTP server until a shutdown signal arrives.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    let stores = build_stores(&config).await?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let cleanup = SessionCleanup::new(Arc::clone(&stores.sessions));
    let cleanup_interval = config.session.cleanup_interval();
    let state = AppState::build(config, stores);
    let app = build_router(state);

    tokio::spawn(cleanup.run_periodic(cleanup_interval));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("CampusHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!("CampusHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
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
