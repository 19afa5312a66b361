//! Probe endpoints under `/api`

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::{HealthCheckFuture, MessageResponse, run_health_checks};
use serde_json::Value;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/test", get(test))
        .route("/ready", get(ready))
        .with_state(state)
}

/// Liveness check kept for existing clients
#[utoipa::path(
    get,
    path = "/test",
    tag = "Health",
    responses((status = 200, description = "Server is up", body = MessageResponse))
)]
pub async fn test() -> Json<MessageResponse> {
    Json(MessageResponse::new("testing"))
}

/// Readiness check - verifies MongoDB answers a ping
#[utoipa::path(
    get,
    path = "/ready",
    tag = "Health",
    responses(
        (status = 200, description = "MongoDB reachable; `mongodb` is `connected`"),
        (status = 503, description = "MongoDB unreachable; `mongodb` is `disconnected`")
    )
)]
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let mongodb: HealthCheckFuture<'_> = Box::pin(async {
        database::mongodb::ping(&state.db)
            .await
            .map_err(|e| e.to_string())
    });
    run_health_checks(vec![("mongodb", mongodb)]).await
}
