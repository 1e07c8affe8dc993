use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::app::AppState;
use crate::error::WebError;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub backend: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Store reachable", body = HealthResponse),
        (status = 503, description = "Store unreachable")
    ),
    tag = "health"
)]
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, WebError> {
    let store = state.store();
    store
        .health_check()
        .await
        .map_err(|e| WebError::ServiceUnavailable(e.to_string()))?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        backend: store.backend_name().to_string(),
    }))
}
