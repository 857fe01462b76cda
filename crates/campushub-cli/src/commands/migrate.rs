//! `migrate` command.

use campushub_core::config::AppConfig;
use campushub_core::error::AppError;
use campushub_database::{DatabasePool, migration};

/// Run all pending migrations against the configured database.
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    let pool = DatabasePool::connect(&config.database).await?;
    migration::run_migrations(pool.pool()).await?;
    pool.close().await;
    println!("Migrations complete.");
    Ok(())
}
