use std::sync::Arc;

use axum::{Json, extract::{Query, State}};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{error::ApiError, models::nutrition::{FoodItem, Meal, MealDraft, NutritionSummary}, services::nutrition_controller::NutritionController};

#[derive(Debug, Default, Deserialize)]
pub struct MealListQuery {
    pub date: Option<NaiveDate>,
}

pub async fn read_meals(
    State(controller): State<Arc<NutritionController>>,
    Query(query): Query<MealListQuery>,
) -> Result<Json<Vec<Meal>>, ApiError> {
    let meals = controller.list_meals(query.date).await?;
    Ok(Json(meals))
}

pub async fn create_meal(
    State(controller): State<Arc<NutritionController>>,
    Json(draft): Json<MealDraft>,
) -> Result<Json<Meal>, ApiError> {
    let meal = controller.add_meal(draft).await?;
    Ok(Json(meal))
}

pub async fn read_summary(
    State(controller): State<Arc<NutritionController>>,
) -> Result<Json<NutritionSummary>, ApiError> {
    let summary = controller.get_summary().await?;
    Ok(Json(summary))
}

#[derive(Debug, Deserialize)]
pub struct FoodSearchQuery {
    pub query: String,
}

pub async fn search_foods(
    State(controller): State<Arc<NutritionController>>,
    Query(query): Query<FoodSearchQuery>,
) -> Result<Json<Vec<FoodItem>>, ApiError> {
    let foods = controller.search_foods(&query.query).await?;
    Ok(Json(foods))
}
