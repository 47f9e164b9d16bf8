use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{error::ApiError, models::sleep::{SleepData, SleepJournalEntry, SleepNight}, services::sleep_controller::SleepController};

pub async fn read_sleep_data(
    State(controller): State<Arc<SleepController>>,
) -> Result<Json<SleepData>, ApiError> {
    let data = controller.get_sleep_data().await?;
    Ok(Json(data))
}

pub async fn create_sleep_night(
    State(controller): State<Arc<SleepController>>,
    Json(night): Json<SleepNight>,
) -> Result<Json<SleepNight>, ApiError> {
    let night = controller.add_sleep_night(night).await?;
    Ok(Json(night))
}

pub async fn read_sleep_journal(
    State(controller): State<Arc<SleepController>>,
) -> Result<Json<Vec<SleepJournalEntry>>, ApiError> {
    let journal = controller.list_journal().await?;
    Ok(Json(journal))
}

pub async fn create_sleep_journal_entry(
    State(controller): State<Arc<SleepController>>,
    Json(entry): Json<SleepJournalEntry>,
) -> Result<Json<SleepJournalEntry>, ApiError> {
    let entry = controller.add_journal_entry(entry).await?;
    Ok(Json(entry))
}
