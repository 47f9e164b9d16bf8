use axum::{Json, extract::State};
use serde::Serialize;

use crate::utils::startup_utils::AppState;

#[derive(Serialize)]
pub struct HealthStatus {
    pub store: String,
    pub overall: String,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    let store_status = match state.store.health_check().await {
        Ok(_) => "healthy".to_string(),
        Err(e) => format!("unhealthy: {:?}", e),
    };

    let overall = if store_status == "healthy" {
        "healthy".to_string()
    } else {
        "unhealthy".to_string()
    };

    Json(HealthStatus {
        store: store_status,
        overall,
    })
}
