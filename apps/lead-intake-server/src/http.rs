//! Liveness and readiness endpoints.

use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::DatabaseConnection;
use serde::Serialize;

#[derive(Clone)]
struct ProbeState {
    db: DatabaseConnection,
    started_at: Instant,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    uptime_seconds: u64,
}

#[derive(Debug, Serialize)]
struct ReadyResponse {
    ready: bool,
    database_ok: bool,
}

/// Router serving `/health` and `/ready`.
pub fn router(db: DatabaseConnection, started_at: Instant) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .with_state(ProbeState { db, started_at })
}

/// Always 200 while the process is serving.
async fn health_handler(State(state): State<ProbeState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}

/// 200 when the backup database answers a ping, 503 otherwise.
async fn ready_handler(State(state): State<ProbeState>) -> Response {
    let database_ok = match state.db.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness probe: database ping failed");
            false
        }
    };

    let response = ReadyResponse {
        ready: database_ok,
        database_ok,
    };
    let status = if database_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(response)).into_response()
}
