use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::{error::ApiError, models::nutrition::{CalorieBudget, FoodItem, MacroBreakdown, MacroNutrient, Meal, MealDraft, NutritionSummary}, services::store::MemoryStore};

// Daily targets the summary is reported against.
pub const CALORIE_GOAL: u32 = 2200;
pub const PROTEIN_GOAL: u32 = 120;
pub const CARBS_GOAL: u32 = 250;
pub const FAT_GOAL: u32 = 70;

pub struct NutritionController {
    store: Arc<MemoryStore>,
}

impl NutritionController {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        NutritionController { store }
    }

    pub async fn list_meals(&self, date: Option<NaiveDate>) -> Result<Vec<Meal>, ApiError> {
        self.store.get_meals(date).await
    }

    pub async fn add_meal(&self, draft: MealDraft) -> Result<Meal, ApiError> {
        if draft.name.trim().is_empty() || draft.time.trim().is_empty() || draft.items.is_empty() {
            return Err(ApiError::ValidationError(
                "Meal name, time and at least one food item are required".to_string(),
            ));
        }

        let calories = draft.items.iter().map(|item| item.calories).sum();
        let meal = Meal {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            date: draft.date.unwrap_or_else(|| Utc::now().date_naive()),
            time: draft.time,
            calories,
            items: draft.items,
            planned: draft.planned,
        };

        self.store.add_meal(meal).await
    }

    pub async fn search_foods(&self, query: &str) -> Result<Vec<FoodItem>, ApiError> {
        self.store.search_foods(query).await
    }

    pub async fn get_summary(&self) -> Result<NutritionSummary, ApiError> {
        self.get_summary_for_date(Utc::now().date_naive()).await
    }

    pub async fn get_summary_for_date(&self, date: NaiveDate) -> Result<NutritionSummary, ApiError> {
        let meals = self.store.get_meals(Some(date)).await?;
        let logged: Vec<&Meal> = meals
            .iter()
            .filter(|m| !m.planned.unwrap_or(false))
            .collect();

        let consumed = logged.iter().map(|m| m.calories).sum();
        let protein = sum_items(&logged, |item| item.protein);
        let carbs = sum_items(&logged, |item| item.carbs);
        let fat = sum_items(&logged, |item| item.fat);

        let water = self.store.get_water_intake().await?;

        Ok(NutritionSummary {
            calories: CalorieBudget {
                consumed,
                goal: CALORIE_GOAL,
            },
            macros: MacroBreakdown {
                protein: macro_nutrient(protein, PROTEIN_GOAL),
                carbs: macro_nutrient(carbs, CARBS_GOAL),
                fat: macro_nutrient(fat, FAT_GOAL),
            },
            water,
        })
    }
}

fn sum_items(meals: &[&Meal], field: impl Fn(&FoodItem) -> u32) -> u32 {
    meals
        .iter()
        .flat_map(|m| m.items.iter())
        .map(field)
        .sum()
}

fn macro_nutrient(value: u32, goal: u32) -> MacroNutrient {
    MacroNutrient {
        value,
        goal,
        unit: "g".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::seed_utils;
    use std::time::Duration;

    fn empty_controller() -> NutritionController {
        NutritionController::new(Arc::new(MemoryStore::new(Duration::ZERO)))
    }

    async fn seeded_controller() -> (Arc<MemoryStore>, NutritionController) {
        let store = Arc::new(MemoryStore::new(Duration::ZERO));
        store.insert_meals(seed_utils::demo_meals()).await;
        let controller = NutritionController::new(Arc::clone(&store));
        (store, controller)
    }

    #[tokio::test]
    async fn summary_sums_logged_meals_and_skips_planned() {
        let (_, controller) = seeded_controller().await;
        let today = Utc::now().date_naive();

        let summary = controller.get_summary_for_date(today).await.unwrap();
        // 420 + 580 + 180; the planned dinner contributes nothing.
        assert_eq!(summary.calories.consumed, 1180);
        assert_eq!(summary.calories.goal, CALORIE_GOAL);
        // Protein: (8 + 15 + 2) + (32 + 5 + 0) + 6
        assert_eq!(summary.macros.protein.value, 68);
    }

    #[tokio::test]
    async fn add_meal_derives_calories_from_items() {
        let (_, controller) = seeded_controller().await;

        let draft = MealDraft {
            name: "Second Breakfast".to_string(),
            date: None,
            time: "10:00 AM".to_string(),
            items: vec![
                FoodItem {
                    name: "Banana".to_string(),
                    calories: 105,
                    protein: 1,
                    carbs: 27,
                    fat: 0,
                    serving_size: None,
                    serving_unit: None,
                },
                FoodItem {
                    name: "Oatmeal".to_string(),
                    calories: 150,
                    protein: 5,
                    carbs: 27,
                    fat: 3,
                    serving_size: None,
                    serving_unit: None,
                },
            ],
            planned: None,
        };

        let meal = controller.add_meal(draft).await.unwrap();
        assert_eq!(meal.calories, 255);
    }

    #[tokio::test]
    async fn add_meal_without_items_is_rejected() {
        let controller = empty_controller();

        let draft = MealDraft {
            name: "Empty".to_string(),
            date: None,
            time: "10:00 AM".to_string(),
            items: vec![],
            planned: None,
        };

        let result = controller.add_meal(draft).await;
        assert!(matches!(result, Err(ApiError::ValidationError(_))));
    }

    #[tokio::test]
    async fn food_search_is_case_insensitive() {
        let (_, controller) = seeded_controller().await;

        let hits = controller.search_foods("greek").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Greek Yogurt");
    }
}
