//! Health check endpoint.
//!
//! Returns 200 OK if PostgreSQL is reachable, 503 Service Unavailable otherwise.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::routing::EndpointTable;
use crate::state::AppState;

const HEALTH: &str = "/health";

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    postgres: bool,
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let postgres = state.postgres_healthy().await;

    let (status, status_code) = if postgres {
        ("healthy", StatusCode::OK)
    } else {
        ("unhealthy", StatusCode::SERVICE_UNAVAILABLE)
    };

    (status_code, Json(HealthResponse { status, postgres }))
}

/// Declare the health endpoint.
pub fn declare(endpoints: &mut EndpointTable) {
    endpoints.add("health.check", HEALTH);
}

/// Create the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route(HEALTH, get(health_check))
}
