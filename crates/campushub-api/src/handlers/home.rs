//! Public landing and health endpoints.

use axum::Json;

use crate::dto::response::MessageResponse;

/// Landing page.
pub async fn index() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to CampusHub"))
}

/// Liveness check.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
