use axum::{extract::State, Json};
use serde::Serialize;
use tracing::warn;
use super::AppState;

/// Body of `GET /api/health`. Always served with 200; `status` carries the verdict.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let response = match state.store.count().await {
        Ok(count) => HealthResponse {
            status: "ok",
            database: "connected",
            records_count: Some(count),
            error: None,
        },
        Err(e) => {
            warn!(error = %e, "health check could not reach the database");
            HealthResponse {
                status: "error",
                database: "disconnected",
                records_count: None,
                error: Some(e.to_string()),
            }
        }
    };

    Json(response)
}
