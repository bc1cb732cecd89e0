//! Liveness endpoint.

use axum::extract::State;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, HealthDto};

/// Pings the database and reports the build version and uptime.
///
/// # Endpoint
/// `GET /health`
pub async fn health(
    State(state): State<Arc<AppState>>,
) -> Result<ApiResponse<HealthDto>, ApiError> {
    state
        .store
        .ping()
        .await
        .map_err(|e| ApiError::DatabaseError(e.to_string()))?;

    Ok(ApiResponse::success(HealthDto {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime: state.start_time.elapsed().as_secs(),
    }))
}
