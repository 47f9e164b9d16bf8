use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{error::ApiError, models::dashboard::DashboardStats, services::dashboard_controller::DashboardController};

pub async fn read_dashboard_stats(
    State(controller): State<Arc<DashboardController>>,
) -> Result<Json<DashboardStats>, ApiError> {
    let stats = controller.get_dashboard_stats().await?;
    Ok(Json(stats))
}
