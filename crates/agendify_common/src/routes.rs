// --- File: crates/agendify_common/src/routes.rs ---

use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Routes shared by every deployment of the backend.
pub fn routes() -> Router {
    Router::new().route("/health", get(health))
}
