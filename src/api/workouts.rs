use std::sync::Arc;

use axum::{Json, extract::{Path, Query, State}};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{error::ApiError, models::workout::{Exercise, SortOrder, Workout, WorkoutDraft, WorkoutFilter, WorkoutStats}, services::workout_controller::WorkoutController};

#[derive(Debug, Default, Deserialize)]
pub struct WorkoutListQuery {
    #[serde(default)]
    pub filter: WorkoutFilter,
    #[serde(default)]
    pub sort: SortOrder,
}

pub async fn read_workouts(
    State(controller): State<Arc<WorkoutController>>,
    Query(query): Query<WorkoutListQuery>,
) -> Result<Json<Vec<Workout>>, ApiError> {
    let workouts = controller.list_workouts(query.filter, query.sort).await?;
    Ok(Json(workouts))
}

pub async fn read_workout(
    State(controller): State<Arc<WorkoutController>>,
    Path(id): Path<String>,
) -> Result<Json<Workout>, ApiError> {
    let workout = controller.get_workout(&id).await?;
    Ok(Json(workout))
}

pub async fn create_workout(
    State(controller): State<Arc<WorkoutController>>,
    Json(draft): Json<WorkoutDraft>,
) -> Result<Json<Workout>, ApiError> {
    let workout = controller.add_workout(draft).await?;
    Ok(Json(workout))
}

pub async fn update_workout(
    State(controller): State<Arc<WorkoutController>>,
    Path(id): Path<String>,
    Json(draft): Json<WorkoutDraft>,
) -> Result<Json<Workout>, ApiError> {
    let workout = controller.update_workout(&id, draft).await?;
    Ok(Json(workout))
}

pub async fn delete_workout(
    State(controller): State<Arc<WorkoutController>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    controller.delete_workout(&id).await?;
    Ok(Json(json!({ "success": true })))
}

pub async fn read_workout_stats(
    State(controller): State<Arc<WorkoutController>>,
) -> Result<Json<WorkoutStats>, ApiError> {
    let stats = controller.get_workout_stats().await?;
    Ok(Json(stats))
}

#[derive(Debug, Default, Deserialize)]
pub struct ExerciseQuery {
    pub category: Option<String>,
}

pub async fn read_exercises(
    State(controller): State<Arc<WorkoutController>>,
    Query(query): Query<ExerciseQuery>,
) -> Result<Json<Vec<Exercise>>, ApiError> {
    let exercises = controller.list_exercises(query.category.as_deref()).await?;
    Ok(Json(exercises))
}
