use std::sync::Arc;

use crate::{error::ApiError, models::mood::{MoodAverage, MoodData, MoodEntry, MoodHistoryDay, WellnessPractice}, services::store::MemoryStore};

pub struct MoodController {
    store: Arc<MemoryStore>,
}

impl MoodController {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        MoodController { store }
    }

    /// Assembles the mood view: the most recent entry, averages over the last
    /// seven entries, and those entries oldest-first as the history.
    pub async fn get_mood_data(&self) -> Result<MoodData, ApiError> {
        let mut entries = self.store.get_mood_entries().await?;
        entries.sort_by(|a, b| a.date.cmp(&b.date));

        let today = entries
            .last()
            .cloned()
            .ok_or_else(|| ApiError::NotFound("No mood entries found".to_string()))?;

        let recent: Vec<&MoodEntry> = entries.iter().rev().take(7).rev().collect();
        let count = recent.len() as u32;

        let weekly_average = MoodAverage {
            mood: recent.iter().map(|e| e.score).sum::<u32>() / count,
            energy: recent.iter().map(|e| e.energy_score).sum::<u32>() / count,
            stress: recent.iter().map(|e| e.stress_score).sum::<u32>() / count,
        };

        let mood_history = recent
            .iter()
            .map(|e| MoodHistoryDay {
                date: e.date,
                mood: e.score,
                stress: e.stress_score,
            })
            .collect();

        Ok(MoodData {
            today,
            weekly_average,
            mood_history,
        })
    }

    pub async fn add_mood_entry(&self, entry: MoodEntry) -> Result<MoodEntry, ApiError> {
        if entry.mood.trim().is_empty() {
            return Err(ApiError::ValidationError("A mood is required".to_string()));
        }
        if entry.score > 100 || entry.energy_score > 100 || entry.stress_score > 100 {
            return Err(ApiError::ValidationError(
                "Mood, energy and stress are scored out of 100".to_string(),
            ));
        }

        self.store.add_mood_entry(entry).await
    }

    pub async fn list_practices(&self) -> Result<Vec<WellnessPractice>, ApiError> {
        self.store.get_practices().await
    }

    pub async fn complete_practice(&self, id: &str) -> Result<WellnessPractice, ApiError> {
        self.store.complete_practice(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::seed_utils;
    use chrono::Utc;
    use std::time::Duration;

    async fn seeded_controller() -> MoodController {
        let store = Arc::new(MemoryStore::new(Duration::ZERO));
        store.insert_mood_entries(seed_utils::demo_mood_entries()).await;
        store.insert_practices(seed_utils::demo_practices()).await;
        MoodController::new(store)
    }

    #[tokio::test]
    async fn mood_data_reports_latest_entry_and_averages() {
        let controller = seeded_controller().await;
        let data = controller.get_mood_data().await.unwrap();

        assert_eq!(data.today.mood, "Happy");
        assert_eq!(data.today.date, Utc::now().date_naive());
        assert_eq!(data.mood_history.len(), 7);
        // Integer mean of 65, 75, 80, 70, 75, 85, 85.
        assert_eq!(data.weekly_average.mood, 76);
    }

    #[tokio::test]
    async fn empty_journal_is_a_not_found() {
        let controller = MoodController::new(Arc::new(MemoryStore::new(Duration::ZERO)));
        let result = controller.get_mood_data().await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn blank_mood_is_rejected() {
        let controller = seeded_controller().await;
        let entry = MoodEntry {
            date: Utc::now().date_naive(),
            mood: " ".to_string(),
            score: 50,
            energy: "Steady".to_string(),
            energy_score: 50,
            stress: "Low".to_string(),
            stress_score: 20,
            notes: None,
            factors: None,
        };

        let result = controller.add_mood_entry(entry).await;
        assert!(matches!(result, Err(ApiError::ValidationError(_))));
    }

    #[tokio::test]
    async fn completing_a_practice_bumps_its_streak() {
        let controller = seeded_controller().await;

        // Practice 3 has never been completed and carries no streak yet.
        let practice = controller.complete_practice("3").await.unwrap();
        assert!(practice.completed);
        assert_eq!(practice.streak, Some(1));

        let practice = controller.complete_practice("1").await.unwrap();
        assert_eq!(practice.streak, Some(6));
    }

    #[tokio::test]
    async fn completing_an_unknown_practice_is_a_not_found() {
        let controller = seeded_controller().await;
        let result = controller.complete_practice("missing").await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }
}
