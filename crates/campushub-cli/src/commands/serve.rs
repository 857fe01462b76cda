//! `serve` command.

use campushub_core::config::AppConfig;
use campushub_core::error::AppError;

/// Start the HTTP server.
pub async fn execute(config: AppConfig) -> Result<(), AppError> {
    campushub_api::run_server(config).await
}
