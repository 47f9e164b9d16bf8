/*
These are internal models that we define.
*/

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    #[serde(rename = "type")]
    pub workout_type: String,
    pub date: DateTime<Utc>,
    pub duration: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    #[serde(rename = "heartRate", skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<HeartRateSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercises: Option<Vec<WorkoutExercise>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeartRateSummary {
    pub avg: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

/// Create/update payload. Every field is optional so the same shape serves
/// both a new-workout submission and an in-place edit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkoutDraft {
    #[serde(rename = "type")]
    pub workout_type: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub duration: Option<u32>,
    pub calories: Option<u32>,
    pub distance: Option<f64>,
    pub steps: Option<u32>,
    #[serde(rename = "heartRate")]
    pub heart_rate: Option<HeartRateSummary>,
    pub exercises: Option<Vec<WorkoutExercise>>,
    pub notes: Option<String>,
    pub completed: Option<bool>,
}

// Response structure for get_workout_stats
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkoutStats {
    #[serde(rename = "totalWorkouts")]
    pub total_workouts: u32,
    #[serde(rename = "totalDuration")]
    pub total_duration: u32,
    #[serde(rename = "totalCalories")]
    pub total_calories: u32,
    #[serde(rename = "currentStreak")]
    pub current_streak: u32,
    #[serde(rename = "workoutTypes")]
    pub workout_types: HashMap<String, u32>,
    #[serde(rename = "weeklyWorkouts")]
    pub weekly_workouts: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutFilter {
    #[default]
    All,
    Completed,
    Upcoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub category: String,
    pub name: String,
    pub equipment: String,
    pub instructions: String,
}
