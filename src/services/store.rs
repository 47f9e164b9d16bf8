use std::time::Duration;

use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{error::ApiError, models::{mood::{MoodEntry, WellnessPractice}, nutrition::{FoodItem, Meal, WaterIntake}, sleep::{SleepJournalEntry, SleepNight}, workout::{Exercise, Workout, WorkoutDraft}}, utils::seed_utils};

/*
In-memory store standing in for a database. Every record lives in a
lock-guarded vector owned by this struct, so the whole store is injected
through an Arc and tests can build their own instance. An optional per-call
latency mimics network delay during UI development.
*/
pub struct MemoryStore {
    latency: Duration,
    workouts: RwLock<Vec<Workout>>,
    meals: RwLock<Vec<Meal>>,
    water: RwLock<WaterIntake>,
    sleep_nights: RwLock<Vec<SleepNight>>,
    sleep_journal: RwLock<Vec<SleepJournalEntry>>,
    mood_entries: RwLock<Vec<MoodEntry>>,
    practices: RwLock<Vec<WellnessPractice>>,
    exercises: Vec<Exercise>,
    foods: Vec<FoodItem>,
}

impl MemoryStore {
    pub fn new(latency: Duration) -> Self {
        MemoryStore {
            latency,
            workouts: RwLock::new(Vec::new()),
            meals: RwLock::new(Vec::new()),
            water: RwLock::new(WaterIntake {
                value: 0.0,
                goal: 2.5,
                unit: "L".to_string(),
            }),
            sleep_nights: RwLock::new(Vec::new()),
            sleep_journal: RwLock::new(Vec::new()),
            mood_entries: RwLock::new(Vec::new()),
            practices: RwLock::new(Vec::new()),
            exercises: seed_utils::exercise_library(),
            foods: seed_utils::food_library(),
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    // MARK: Workouts Begin
    pub async fn get_workouts(&self) -> Result<Vec<Workout>, ApiError> {
        self.simulate_latency().await;
        let workouts = self.workouts.read().await;
        println!("[STORE] get_workouts: returned {} workouts", workouts.len());
        Ok(workouts.clone())
    }

    pub async fn get_workout_by_id(&self, id: &str) -> Result<Workout, ApiError> {
        self.simulate_latency().await;
        let workouts = self.workouts.read().await;
        workouts
            .iter()
            .find(|w| w.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound("Workout not found".to_string()))
    }

    pub async fn add_workout(&self, draft: WorkoutDraft) -> Result<Workout, ApiError> {
        self.simulate_latency().await;
        let workout = Workout {
            id: Uuid::new_v4().to_string(),
            workout_type: draft.workout_type.unwrap_or_else(|| "Other".to_string()),
            date: draft.date.unwrap_or_else(Utc::now),
            duration: draft.duration.unwrap_or(0),
            calories: draft.calories,
            distance: draft.distance,
            steps: draft.steps,
            heart_rate: draft.heart_rate,
            exercises: draft.exercises,
            notes: draft.notes,
            completed: draft.completed.unwrap_or(false),
        };

        let mut workouts = self.workouts.write().await;
        workouts.push(workout.clone());
        println!("[STORE] add_workout: added workout '{}'", workout.id);
        Ok(workout)
    }

    pub async fn update_workout(&self, id: &str, draft: WorkoutDraft) -> Result<Workout, ApiError> {
        self.simulate_latency().await;
        let mut workouts = self.workouts.write().await;
        let workout = workouts
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| ApiError::NotFound("Workout not found".to_string()))?;

        // Merge the provided fields; the id never changes.
        if let Some(workout_type) = draft.workout_type {
            workout.workout_type = workout_type;
        }
        if let Some(date) = draft.date {
            workout.date = date;
        }
        if let Some(duration) = draft.duration {
            workout.duration = duration;
        }
        if let Some(calories) = draft.calories {
            workout.calories = Some(calories);
        }
        if let Some(distance) = draft.distance {
            workout.distance = Some(distance);
        }
        if let Some(steps) = draft.steps {
            workout.steps = Some(steps);
        }
        if let Some(heart_rate) = draft.heart_rate {
            workout.heart_rate = Some(heart_rate);
        }
        if let Some(exercises) = draft.exercises {
            workout.exercises = Some(exercises);
        }
        if let Some(notes) = draft.notes {
            workout.notes = Some(notes);
        }
        if let Some(completed) = draft.completed {
            workout.completed = completed;
        }

        println!("[STORE] update_workout: updated workout '{}'", id);
        Ok(workout.clone())
    }

    pub async fn delete_workout(&self, id: &str) -> Result<(), ApiError> {
        self.simulate_latency().await;
        let mut workouts = self.workouts.write().await;
        let before = workouts.len();
        workouts.retain(|w| w.id != id);

        if workouts.len() == before {
            return Err(ApiError::NotFound("Workout not found".to_string()));
        }

        println!("[STORE] delete_workout: removed workout '{}'", id);
        Ok(())
    }

    pub async fn insert_workouts(&self, new_workouts: Vec<Workout>) {
        if new_workouts.is_empty() {
            println!("insert_workouts | received a workouts slice with 0 length, skipping batch operation");
            return;
        }

        let mut workouts = self.workouts.write().await;
        let inserted = new_workouts.len();
        workouts.extend(new_workouts);
        println!("Batch insert complete. Inserted {:?} new workouts.", inserted);
    }
    // MARK: Workouts End

    // MARK: Nutrition Begin
    pub async fn get_meals(&self, date: Option<NaiveDate>) -> Result<Vec<Meal>, ApiError> {
        self.simulate_latency().await;
        let meals = self.meals.read().await;
        let result: Vec<Meal> = match date {
            Some(d) => meals.iter().filter(|m| m.date == d).cloned().collect(),
            None => meals.clone(),
        };
        println!("[STORE] get_meals: returned {} meals", result.len());
        Ok(result)
    }

    pub async fn add_meal(&self, meal: Meal) -> Result<Meal, ApiError> {
        self.simulate_latency().await;
        let mut meals = self.meals.write().await;
        meals.push(meal.clone());
        println!("[STORE] add_meal: added meal '{}'", meal.id);
        Ok(meal)
    }

    pub async fn insert_meals(&self, new_meals: Vec<Meal>) {
        let mut meals = self.meals.write().await;
        meals.extend(new_meals);
    }

    pub async fn get_water_intake(&self) -> Result<WaterIntake, ApiError> {
        self.simulate_latency().await;
        Ok(self.water.read().await.clone())
    }

    pub async fn set_water_intake(&self, intake: WaterIntake) {
        *self.water.write().await = intake;
    }
    // MARK: Nutrition End

    // MARK: Sleep Begin
    pub async fn get_sleep_nights(&self) -> Result<Vec<SleepNight>, ApiError> {
        self.simulate_latency().await;
        Ok(self.sleep_nights.read().await.clone())
    }

    pub async fn add_sleep_night(&self, night: SleepNight) -> Result<SleepNight, ApiError> {
        self.simulate_latency().await;
        let mut nights = self.sleep_nights.write().await;
        nights.push(night.clone());
        println!("[STORE] add_sleep_night: recorded night of {}", night.date);
        Ok(night)
    }

    pub async fn insert_sleep_nights(&self, new_nights: Vec<SleepNight>) {
        let mut nights = self.sleep_nights.write().await;
        nights.extend(new_nights);
    }

    pub async fn get_sleep_journal(&self) -> Result<Vec<SleepJournalEntry>, ApiError> {
        self.simulate_latency().await;
        Ok(self.sleep_journal.read().await.clone())
    }

    pub async fn add_sleep_journal_entry(&self, entry: SleepJournalEntry) -> Result<SleepJournalEntry, ApiError> {
        self.simulate_latency().await;
        let mut journal = self.sleep_journal.write().await;
        // Newest entry first, matching the journal's display order.
        journal.insert(0, entry.clone());
        Ok(entry)
    }

    pub async fn insert_sleep_journal(&self, entries: Vec<SleepJournalEntry>) {
        let mut journal = self.sleep_journal.write().await;
        journal.extend(entries);
    }
    // MARK: Sleep End

    // MARK: Mood Begin
    pub async fn get_mood_entries(&self) -> Result<Vec<MoodEntry>, ApiError> {
        self.simulate_latency().await;
        Ok(self.mood_entries.read().await.clone())
    }

    pub async fn add_mood_entry(&self, entry: MoodEntry) -> Result<MoodEntry, ApiError> {
        self.simulate_latency().await;
        let mut entries = self.mood_entries.write().await;
        entries.push(entry.clone());
        println!("[STORE] add_mood_entry: recorded mood for {}", entry.date);
        Ok(entry)
    }

    pub async fn insert_mood_entries(&self, new_entries: Vec<MoodEntry>) {
        let mut entries = self.mood_entries.write().await;
        entries.extend(new_entries);
    }

    pub async fn get_practices(&self) -> Result<Vec<WellnessPractice>, ApiError> {
        self.simulate_latency().await;
        Ok(self.practices.read().await.clone())
    }

    pub async fn complete_practice(&self, id: &str) -> Result<WellnessPractice, ApiError> {
        self.simulate_latency().await;
        let mut practices = self.practices.write().await;
        let practice = practices
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::NotFound("Practice not found".to_string()))?;

        practice.completed = true;
        practice.streak = Some(practice.streak.unwrap_or(0) + 1);

        println!("[STORE] complete_practice: completed practice '{}'", id);
        Ok(practice.clone())
    }

    pub async fn insert_practices(&self, new_practices: Vec<WellnessPractice>) {
        let mut practices = self.practices.write().await;
        practices.extend(new_practices);
    }
    // MARK: Mood End

    // MARK: Libraries Begin
    pub async fn get_exercises(&self, category: Option<&str>) -> Result<Vec<Exercise>, ApiError> {
        self.simulate_latency().await;
        let result = match category {
            Some(c) => self
                .exercises
                .iter()
                .filter(|e| e.category.eq_ignore_ascii_case(c))
                .cloned()
                .collect(),
            None => self.exercises.clone(),
        };
        Ok(result)
    }

    pub async fn search_foods(&self, query: &str) -> Result<Vec<FoodItem>, ApiError> {
        self.simulate_latency().await;
        let needle = query.to_lowercase();
        let result = self
            .foods
            .iter()
            .filter(|f| f.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(result)
    }
    // MARK: Libraries End

    // MARK: Health Check
    pub async fn health_check(&self) -> Result<(), ApiError> {
        let workouts = self.workouts.read().await.len();
        let meals = self.meals.read().await.len();
        println!("[STORE] health_check: {} workouts, {} meals on hand", workouts, meals);
        Ok(())
    }
    // MARK: Health Check End
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::seed_utils;

    fn empty_store() -> MemoryStore {
        MemoryStore::new(Duration::ZERO)
    }

    #[tokio::test]
    async fn add_workout_fills_defaults() {
        let store = empty_store();

        let workout = store.add_workout(WorkoutDraft::default()).await.unwrap();
        assert_eq!(workout.workout_type, "Other");
        assert_eq!(workout.duration, 0);
        assert!(!workout.completed);

        let fetched = store.get_workout_by_id(&workout.id).await.unwrap();
        assert_eq!(fetched.id, workout.id);
    }

    #[tokio::test]
    async fn update_merges_fields_and_keeps_the_id() {
        let store = empty_store();
        store.insert_workouts(seed_utils::demo_workouts()).await;

        let draft = WorkoutDraft {
            duration: Some(35),
            notes: Some("Cut short by rain.".to_string()),
            ..WorkoutDraft::default()
        };

        let updated = store.update_workout("1", draft).await.unwrap();
        assert_eq!(updated.id, "1");
        assert_eq!(updated.duration, 35);
        assert_eq!(updated.notes.as_deref(), Some("Cut short by rain."));
        // Untouched fields survive the merge.
        assert_eq!(updated.workout_type, "Running");
        assert_eq!(updated.calories, Some(320));
    }

    #[tokio::test]
    async fn missing_workouts_surface_as_not_found() {
        let store = empty_store();

        assert!(matches!(
            store.get_workout_by_id("missing").await,
            Err(ApiError::NotFound(_))
        ));
        assert!(matches!(
            store.update_workout("missing", WorkoutDraft::default()).await,
            Err(ApiError::NotFound(_))
        ));
        assert!(matches!(
            store.delete_workout("missing").await,
            Err(ApiError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn delete_removes_the_workout() {
        let store = empty_store();
        store.insert_workouts(seed_utils::demo_workouts()).await;

        store.delete_workout("3").await.unwrap();
        let remaining = store.get_workouts().await.unwrap();
        assert_eq!(remaining.len(), 4);
        assert!(remaining.iter().all(|w| w.id != "3"));
    }

    #[tokio::test]
    async fn meals_filter_by_calendar_date() {
        let store = empty_store();
        store.insert_meals(seed_utils::demo_meals()).await;

        let today = Utc::now().date_naive();
        assert_eq!(store.get_meals(Some(today)).await.unwrap().len(), 4);

        let yesterday = today - chrono::Duration::days(1);
        assert!(store.get_meals(Some(yesterday)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn exercise_library_filters_by_category() {
        let store = empty_store();

        let legs = store.get_exercises(Some("legs")).await.unwrap();
        assert_eq!(legs.len(), 3);
        assert!(legs.iter().all(|e| e.category == "Legs"));

        let all = store.get_exercises(None).await.unwrap();
        assert_eq!(all.len(), 15);
    }
}
