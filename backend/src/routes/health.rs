//! Health check endpoints
//!
//! - /health - Basic health check
//! - /health/ready - Readiness probe (checks the database)
//! - /health/live - Liveness probe (always OK while the server runs)

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use storefront_shared::ApiResponse;

/// Health payload
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthStatus {
    fn new(status: &'static str) -> Self {
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Basic health check endpoint
pub async fn health_check() -> Json<ApiResponse<HealthStatus>> {
    Json(ApiResponse::success("Service is healthy", HealthStatus::new("healthy")))
}

/// Readiness probe - 503 while the database is unreachable
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<HealthStatus>>) {
    match db::health_check(state.db()).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success("Service is ready", HealthStatus::new("ready"))),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse {
                success: false,
                message: "Database is unavailable".to_string(),
                data: Some(HealthStatus::new("not_ready")),
                error: Some("DATABASE_UNAVAILABLE".to_string()),
            }),
        ),
    }
}

/// Liveness probe
pub async fn liveness_check() -> Json<ApiResponse<HealthStatus>> {
    Json(ApiResponse::success("Service is alive", HealthStatus::new("alive")))
}
