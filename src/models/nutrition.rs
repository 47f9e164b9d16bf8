use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    pub time: String,
    pub calories: u32,
    pub items: Vec<FoodItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    #[serde(rename = "servingSize", skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<String>,
    #[serde(rename = "servingUnit", skip_serializing_if = "Option::is_none")]
    pub serving_unit: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MealDraft {
    pub name: String,
    pub date: Option<NaiveDate>,
    pub time: String,
    #[serde(default)]
    pub items: Vec<FoodItem>,
    pub planned: Option<bool>,
}

// Response structures for get_summary
#[derive(Debug, Serialize, Deserialize)]
pub struct NutritionSummary {
    pub calories: CalorieBudget,
    pub macros: MacroBreakdown,
    pub water: WaterIntake,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalorieBudget {
    pub consumed: u32,
    pub goal: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MacroBreakdown {
    pub protein: MacroNutrient,
    pub carbs: MacroNutrient,
    pub fat: MacroNutrient,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MacroNutrient {
    pub value: u32,
    pub goal: u32,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterIntake {
    pub value: f64,
    pub goal: f64,
    pub unit: String,
}
