//! Health check handler.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
///
/// Only fixed labels are reported; the underlying error goes to the log.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

impl HealthResponse {
    const HEALTHY: Self = Self {
        status: "healthy",
        database: "up",
    };

    const DEGRADED: Self = Self {
        status: "degraded",
        database: "unreachable",
    };
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Ping the database; 503 when it cannot be reached.
pub async fn health_check(State(state): State<AppState>) -> Response {
    match state.db.ping().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::HEALTHY)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Database ping failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(HealthResponse::DEGRADED)).into_response()
        }
    }
}
