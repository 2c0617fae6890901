//! Health check endpoint
//!
//! `GET /health` verifies the server is running and the database answers.

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use taskboard_shared::db::pool;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Crate version
    pub version: String,

    /// Database connectivity
    pub database: String,
}

/// Reports liveness and database connectivity.
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let database = match pool::health_check(&state.db).await {
        Ok(()) => "connected".to_string(),
        Err(e) => {
            tracing::warn!("health check database probe failed: {}", e);
            "unavailable".to_string()
        }
    };

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
    }))
}
