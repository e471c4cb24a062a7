//! Health check handlers
//!
//! Ping endpoint plus a readiness probe with dependency health.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::response::MessageBody;
use crate::state::AppState;

/// Basic ping check (liveness probe)
///
/// GET /api/ping
pub async fn ping() -> Json<MessageBody> {
    Json(MessageBody::new("API works!"))
}

/// Readiness response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessBody {
    pub status: &'static str,
    pub database: bool,
}

/// Readiness check with dependency health
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessBody>) {
    // Check database connectivity
    let db_healthy = state
        .service_context()
        .pool()
        .acquire()
        .await
        .map(|_| true)
        .unwrap_or(false);

    let status = if db_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ReadinessBody {
            status: if db_healthy { "ready" } else { "degraded" },
            database: db_healthy,
        }),
    )
}
