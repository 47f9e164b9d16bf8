use std::sync::Arc;

use axum::{Json, extract::{Path, State}};

use crate::{error::ApiError, models::mood::{MoodData, MoodEntry, WellnessPractice}, services::mood_controller::MoodController};

pub async fn read_mood_data(
    State(controller): State<Arc<MoodController>>,
) -> Result<Json<MoodData>, ApiError> {
    let data = controller.get_mood_data().await?;
    Ok(Json(data))
}

pub async fn create_mood_entry(
    State(controller): State<Arc<MoodController>>,
    Json(entry): Json<MoodEntry>,
) -> Result<Json<MoodEntry>, ApiError> {
    let entry = controller.add_mood_entry(entry).await?;
    Ok(Json(entry))
}

pub async fn read_practices(
    State(controller): State<Arc<MoodController>>,
) -> Result<Json<Vec<WellnessPractice>>, ApiError> {
    let practices = controller.list_practices().await?;
    Ok(Json(practices))
}

pub async fn complete_practice(
    State(controller): State<Arc<MoodController>>,
    Path(id): Path<String>,
) -> Result<Json<WellnessPractice>, ApiError> {
    let practice = controller.complete_practice(&id).await?;
    Ok(Json(practice))
}
