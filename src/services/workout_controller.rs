use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::{error::ApiError, models::workout::{Exercise, SortOrder, Workout, WorkoutDraft, WorkoutFilter, WorkoutStats}, services::store::MemoryStore};

pub struct WorkoutController {
    store: Arc<MemoryStore>,
}

impl WorkoutController {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        WorkoutController { store }
    }

    pub async fn list_workouts(&self, filter: WorkoutFilter, sort: SortOrder) -> Result<Vec<Workout>, ApiError> {
        let workouts = self.store.get_workouts().await?;
        let mut filtered = filter_workouts(workouts, filter);
        sort_workouts(&mut filtered, sort);
        Ok(filtered)
    }

    pub async fn get_workout(&self, id: &str) -> Result<Workout, ApiError> {
        self.store.get_workout_by_id(id).await
    }

    pub async fn add_workout(&self, draft: WorkoutDraft) -> Result<Workout, ApiError> {
        self.store.add_workout(draft).await
    }

    pub async fn update_workout(&self, id: &str, draft: WorkoutDraft) -> Result<Workout, ApiError> {
        self.store.update_workout(id, draft).await
    }

    pub async fn delete_workout(&self, id: &str) -> Result<(), ApiError> {
        self.store.delete_workout(id).await
    }

    pub async fn get_workout_stats(&self) -> Result<WorkoutStats, ApiError> {
        let workouts = self.store.get_workouts().await?;
        println!("[WORKOUT_CONTROLLER]: computing stats over {} workouts", workouts.len());
        Ok(compute_workout_stats(&workouts, Utc::now()))
    }

    pub async fn list_exercises(&self, category: Option<&str>) -> Result<Vec<Exercise>, ApiError> {
        self.store.get_exercises(category).await
    }
}

pub fn filter_workouts(workouts: Vec<Workout>, filter: WorkoutFilter) -> Vec<Workout> {
    match filter {
        WorkoutFilter::All => workouts,
        WorkoutFilter::Completed => workouts.into_iter().filter(|w| w.completed).collect(),
        WorkoutFilter::Upcoming => workouts.into_iter().filter(|w| !w.completed).collect(),
    }
}

// Upcoming workouts always sort ahead of completed ones; the requested order
// only applies to the dates within each group.
pub fn sort_workouts(workouts: &mut [Workout], order: SortOrder) {
    workouts.sort_by(|a, b| {
        if a.completed != b.completed {
            return if a.completed { Ordering::Greater } else { Ordering::Less };
        }

        let date_comparison = b.date.cmp(&a.date);
        match order {
            SortOrder::Desc => date_comparison,
            SortOrder::Asc => date_comparison.reverse(),
        }
    });
}

pub fn compute_workout_stats(workouts: &[Workout], now: DateTime<Utc>) -> WorkoutStats {
    let completed: Vec<&Workout> = workouts.iter().filter(|w| w.completed).collect();

    let total_workouts = completed.len() as u32;
    let total_duration = completed.iter().map(|w| w.duration).sum();
    let total_calories = completed.iter().map(|w| w.calories.unwrap_or(0)).sum();

    let mut sorted = completed.clone();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    // Current streak: consecutive calendar days with a completed workout,
    // counted only when the most recent one falls on today or yesterday.
    // Two entries on the same day give a day difference of 0 and end the walk.
    let mut current_streak = 0;
    if let Some(most_recent) = sorted.first() {
        let today = now.date_naive();
        let day_diff = (today - most_recent.date.date_naive()).num_days();

        if day_diff <= 1 {
            current_streak = 1;
            for pair in sorted.windows(2) {
                let diff = (pair[0].date.date_naive() - pair[1].date.date_naive()).num_days();
                if diff == 1 {
                    current_streak += 1;
                } else {
                    break;
                }
            }
        }
    }

    let mut workout_types: HashMap<String, u32> = HashMap::new();
    for workout in &completed {
        *workout_types.entry(workout.workout_type.clone()).or_insert(0) += 1;
    }

    let seven_days_ago = now - Duration::days(7);
    let weekly_workouts = completed.iter().filter(|w| w.date >= seven_days_ago).count() as u32;

    WorkoutStats {
        total_workouts,
        total_duration,
        total_calories,
        current_streak,
        workout_types,
        weekly_workouts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn workout(id: &str, date: DateTime<Utc>, completed: bool) -> Workout {
        Workout {
            id: id.to_string(),
            workout_type: "Running".to_string(),
            date,
            duration: 30,
            calories: Some(300),
            distance: None,
            steps: None,
            heart_rate: None,
            exercises: None,
            notes: None,
            completed,
        }
    }

    fn noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn stats_sum_only_completed_workouts() {
        let now = noon(2024, 1, 10);
        let mut list = vec![
            workout("1", noon(2024, 1, 10), true),
            workout("2", noon(2024, 1, 9), true),
            workout("3", noon(2024, 1, 12), false),
        ];
        list[0].duration = 30;
        list[0].calories = Some(320);
        list[1].duration = 45;
        list[1].calories = None;
        list[2].duration = 60;
        list[2].calories = Some(500);

        let stats = compute_workout_stats(&list, now);
        assert_eq!(stats.total_workouts, 2);
        assert_eq!(stats.total_duration, 75);
        assert_eq!(stats.total_calories, 320);
    }

    #[test]
    fn streak_counts_consecutive_days() {
        let now = noon(2024, 1, 10);
        let list = vec![
            workout("1", noon(2024, 1, 10), true),
            workout("2", noon(2024, 1, 9), true),
            workout("3", noon(2024, 1, 8), true),
        ];

        let stats = compute_workout_stats(&list, now);
        assert_eq!(stats.current_streak, 3);
    }

    #[test]
    fn streak_starting_yesterday_still_counts() {
        let now = noon(2024, 1, 10);
        let list = vec![
            workout("1", noon(2024, 1, 9), true),
            workout("2", noon(2024, 1, 8), true),
        ];

        let stats = compute_workout_stats(&list, now);
        assert_eq!(stats.current_streak, 2);
    }

    #[test]
    fn streak_stops_at_first_gap() {
        let now = noon(2024, 1, 10);
        let list = vec![
            workout("1", noon(2024, 1, 10), true),
            workout("2", noon(2024, 1, 8), true),
        ];

        let stats = compute_workout_stats(&list, now);
        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn streak_is_zero_when_last_workout_is_stale() {
        let now = noon(2024, 1, 10);
        let list = vec![
            workout("1", noon(2024, 1, 7), true),
            workout("2", noon(2024, 1, 6), true),
        ];

        let stats = compute_workout_stats(&list, now);
        assert_eq!(stats.current_streak, 0);
    }

    #[test]
    fn streak_is_zero_without_completed_workouts() {
        let now = noon(2024, 1, 10);
        let list = vec![workout("1", noon(2024, 1, 10), false)];

        let stats = compute_workout_stats(&list, now);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.total_workouts, 0);
    }

    // A second workout on the same day ends the streak walk instead of
    // being skipped; this pins that behavior.
    #[test]
    fn same_day_duplicate_ends_the_streak_walk() {
        let now = noon(2024, 1, 10);
        let list = vec![
            workout("1", noon(2024, 1, 10), true),
            workout("2", Utc.with_ymd_and_hms(2024, 1, 10, 8, 0, 0).unwrap(), true),
            workout("3", noon(2024, 1, 9), true),
        ];

        let stats = compute_workout_stats(&list, now);
        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn workout_types_histogram_counts_completed_only() {
        let now = noon(2024, 1, 10);
        let mut list = vec![
            workout("1", noon(2024, 1, 10), true),
            workout("2", noon(2024, 1, 9), true),
            workout("3", noon(2024, 1, 8), true),
            workout("4", noon(2024, 1, 12), false),
        ];
        list[1].workout_type = "Yoga".to_string();
        list[3].workout_type = "HIIT".to_string();

        let stats = compute_workout_stats(&list, now);
        assert_eq!(stats.workout_types.get("Running"), Some(&2));
        assert_eq!(stats.workout_types.get("Yoga"), Some(&1));
        assert_eq!(stats.workout_types.get("HIIT"), None);
    }

    #[test]
    fn weekly_workouts_counts_trailing_seven_days() {
        let now = noon(2024, 1, 10);
        let list = vec![
            workout("1", noon(2024, 1, 9), true),
            workout("2", noon(2024, 1, 4), true),
            workout("3", noon(2024, 1, 1), true),
        ];

        let stats = compute_workout_stats(&list, now);
        assert_eq!(stats.weekly_workouts, 2);
    }

    #[test]
    fn filter_modes_partition_on_completed() {
        let list = vec![
            workout("1", noon(2024, 1, 1), true),
            workout("2", noon(2024, 1, 2), false),
            workout("3", noon(2024, 1, 3), true),
        ];

        let all = filter_workouts(list.clone(), WorkoutFilter::All);
        assert_eq!(all.len(), 3);

        let completed = filter_workouts(list.clone(), WorkoutFilter::Completed);
        assert!(completed.iter().all(|w| w.completed));
        assert_eq!(completed.len(), 2);

        let upcoming = filter_workouts(list, WorkoutFilter::Upcoming);
        assert!(upcoming.iter().all(|w| !w.completed));
        assert_eq!(upcoming.len(), 1);
    }

    #[test]
    fn sort_puts_upcoming_first_then_date_desc() {
        let mut list = vec![
            workout("1", noon(2024, 1, 1), true),
            workout("2", noon(2024, 1, 3), false),
            workout("3", noon(2024, 1, 2), true),
        ];

        sort_workouts(&mut list, SortOrder::Desc);
        let ids: Vec<&str> = list.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[test]
    fn sort_asc_keeps_upcoming_ahead_of_completed() {
        let mut list = vec![
            workout("1", noon(2024, 1, 1), true),
            workout("2", noon(2024, 1, 3), false),
            workout("3", noon(2024, 1, 2), true),
            workout("4", noon(2024, 1, 5), false),
        ];

        sort_workouts(&mut list, SortOrder::Asc);
        let ids: Vec<&str> = list.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4", "1", "3"]);
    }

    #[test]
    fn sort_of_empty_list_is_empty() {
        let mut list: Vec<Workout> = Vec::new();
        sort_workouts(&mut list, SortOrder::Desc);
        assert!(list.is_empty());
    }
}
