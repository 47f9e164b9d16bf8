use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::error::ApiError;
use crate::models::dashboard::{CategoryScores, DashboardStats, RecentActivity, UpcomingItem};
use crate::models::workout::Workout;
use crate::services::nutrition_controller::CALORIE_GOAL;
use crate::services::store::MemoryStore;
use crate::services::workout_controller::compute_workout_stats;

const WEEKLY_WORKOUT_GOAL: u32 = 5;

pub struct DashboardController {
    store: Arc<MemoryStore>,
}

impl DashboardController {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        DashboardController { store }
    }

    /// Cross-store aggregate backing the dashboard landing view. Scores are
    /// 0-100 per category; the overall score is their rounded mean.
    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let now = Utc::now();
        let today = now.date_naive();

        let workouts = self.store.get_workouts().await?;
        let workout_stats = compute_workout_stats(&workouts, now);
        let fitness = (workout_stats.weekly_workouts * 100 / WEEKLY_WORKOUT_GOAL).min(100);

        let meals = self.store.get_meals(Some(today)).await?;
        let consumed: u32 = meals
            .iter()
            .filter(|m| !m.planned.unwrap_or(false))
            .map(|m| m.calories)
            .sum();
        let nutrition = (consumed * 100 / CALORIE_GOAL).min(100);

        let mut nights = self.store.get_sleep_nights().await?;
        nights.sort_by(|a, b| a.date.cmp(&b.date));
        let sleep = nights.last().map(|n| n.quality).unwrap_or(0);

        let mut moods = self.store.get_mood_entries().await?;
        moods.sort_by(|a, b| a.date.cmp(&b.date));
        let recent_moods: Vec<u32> = moods.iter().rev().take(7).map(|e| e.score).collect();
        let mental = if recent_moods.is_empty() {
            0
        } else {
            recent_moods.iter().sum::<u32>() / recent_moods.len() as u32
        };

        let overall_health_score = (fitness + nutrition + sleep + mental + 2) / 4;

        let mut recent_activities = Vec::new();
        let mut completed: Vec<&Workout> = workouts.iter().filter(|w| w.completed).collect();
        completed.sort_by(|a, b| b.date.cmp(&a.date));
        if let Some(workout) = completed.first() {
            recent_activities.push(RecentActivity {
                kind: "fitness".to_string(),
                title: workout.workout_type.clone(),
                timestamp: workout.date,
                value: Some(workout_display_value(workout)),
            });
        }
        if let Some(meal) = meals.iter().filter(|m| !m.planned.unwrap_or(false)).last() {
            recent_activities.push(RecentActivity {
                kind: "nutrition".to_string(),
                title: meal.name.clone(),
                timestamp: start_of_day(meal.date),
                value: Some(format!("{} cal", meal.calories)),
            });
        }
        if let Some(night) = nights.last() {
            recent_activities.push(RecentActivity {
                kind: "sleep".to_string(),
                title: "Sleep Recorded".to_string(),
                timestamp: start_of_day(night.date),
                value: Some(format_hours(night.duration)),
            });
        }
        if let Some(entry) = moods.last() {
            recent_activities.push(RecentActivity {
                kind: "mental".to_string(),
                title: "Mood Logged".to_string(),
                timestamp: start_of_day(entry.date),
                value: Some(entry.mood.clone()),
            });
        }
        recent_activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let mut upcoming: Vec<UpcomingItem> = workouts
            .iter()
            .filter(|w| !w.completed)
            .map(|w| UpcomingItem {
                kind: "fitness".to_string(),
                title: w.workout_type.clone(),
                scheduled_for: w.date,
            })
            .collect();
        upcoming.extend(
            meals
                .iter()
                .filter(|m| m.planned.unwrap_or(false))
                .map(|m| UpcomingItem {
                    kind: "nutrition".to_string(),
                    title: m.name.clone(),
                    scheduled_for: start_of_day(m.date),
                }),
        );
        upcoming.sort_by(|a, b| a.scheduled_for.cmp(&b.scheduled_for));

        println!("[DASHBOARD_CONTROLLER]: overall health score {}", overall_health_score);

        Ok(DashboardStats {
            overall_health_score,
            category_scores: CategoryScores {
                fitness,
                nutrition,
                sleep,
                mental,
            },
            recent_activities,
            upcoming,
        })
    }
}

fn start_of_day(date: NaiveDate) -> chrono::DateTime<Utc> {
    date.and_hms_opt(0, 0, 0).unwrap().and_utc()
}

fn format_hours(hours: f64) -> String {
    let whole = hours.trunc() as u32;
    let minutes = ((hours - hours.trunc()) * 60.0).round() as u32;
    format!("{}h {}m", whole, minutes)
}

fn workout_display_value(workout: &Workout) -> String {
    match workout.distance {
        Some(distance) => format!("{} km", distance),
        None => format!("{} min", workout.duration),
    }
}
