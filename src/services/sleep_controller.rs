use std::sync::Arc;

use crate::{error::ApiError, models::sleep::{SleepData, SleepJournalEntry, SleepNight, SleepTrendDay, WeeklySleepAverage}, services::store::MemoryStore};

pub struct SleepController {
    store: Arc<MemoryStore>,
}

impl SleepController {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        SleepController { store }
    }

    /// Assembles the sleep view: the most recent night, the average over the
    /// last seven recorded nights, and those nights oldest-first as the trend.
    pub async fn get_sleep_data(&self) -> Result<SleepData, ApiError> {
        let mut nights = self.store.get_sleep_nights().await?;
        nights.sort_by(|a, b| a.date.cmp(&b.date));

        let last_night = nights
            .last()
            .cloned()
            .ok_or_else(|| ApiError::NotFound("No sleep records found".to_string()))?;

        let recent: Vec<&SleepNight> = nights.iter().rev().take(7).rev().collect();

        let count = recent.len() as f64;
        let weekly_average = WeeklySleepAverage {
            duration: round1(recent.iter().map(|n| n.duration).sum::<f64>() / count),
            quality: (recent.iter().map(|n| n.quality).sum::<u32>() as f64 / count).round() as u32,
            deep_sleep: round1(recent.iter().map(|n| n.deep_sleep).sum::<f64>() / count),
            light_sleep: round1(recent.iter().map(|n| n.light_sleep).sum::<f64>() / count),
            rem_sleep: round1(recent.iter().map(|n| n.rem_sleep).sum::<f64>() / count),
        };

        let sleep_trend = recent
            .iter()
            .map(|n| SleepTrendDay {
                date: n.date,
                duration: n.duration,
                quality: n.quality,
            })
            .collect();

        Ok(SleepData {
            last_night,
            weekly_average,
            sleep_trend,
        })
    }

    pub async fn add_sleep_night(&self, night: SleepNight) -> Result<SleepNight, ApiError> {
        if night.duration <= 0.0 {
            return Err(ApiError::ValidationError(
                "Sleep duration must be positive".to_string(),
            ));
        }
        if night.quality > 100 || night.sleep_efficiency > 100 {
            return Err(ApiError::ValidationError(
                "Quality and efficiency are scored out of 100".to_string(),
            ));
        }

        self.store.add_sleep_night(night).await
    }

    pub async fn list_journal(&self) -> Result<Vec<SleepJournalEntry>, ApiError> {
        self.store.get_sleep_journal().await
    }

    pub async fn add_journal_entry(&self, entry: SleepJournalEntry) -> Result<SleepJournalEntry, ApiError> {
        if entry.factors.is_empty() {
            return Err(ApiError::ValidationError(
                "At least one sleep factor is required".to_string(),
            ));
        }

        self.store.add_sleep_journal_entry(entry).await
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::seed_utils;
    use chrono::Utc;
    use std::time::Duration;

    async fn seeded_controller() -> SleepController {
        let store = Arc::new(MemoryStore::new(Duration::ZERO));
        store.insert_sleep_nights(seed_utils::demo_sleep_nights()).await;
        SleepController::new(store)
    }

    #[tokio::test]
    async fn sleep_data_reports_most_recent_night_and_trend() {
        let controller = seeded_controller().await;
        let data = controller.get_sleep_data().await.unwrap();

        assert_eq!(data.last_night.date, Utc::now().date_naive());
        assert_eq!(data.last_night.bedtime, "23:15");
        assert_eq!(data.sleep_trend.len(), 7);
        // Oldest first.
        assert!(data.sleep_trend[0].date < data.sleep_trend[6].date);
        // Mean of 6.5, 7.8, 6.9, 7.0, 7.4, 7.8, 7.2 rounded to one decimal.
        assert_eq!(data.weekly_average.duration, 7.2);
        assert_eq!(data.weekly_average.quality, 80);
    }

    #[tokio::test]
    async fn empty_log_is_a_not_found() {
        let controller = SleepController::new(Arc::new(MemoryStore::new(Duration::ZERO)));
        let result = controller.get_sleep_data().await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn journal_entry_needs_a_factor() {
        let controller = seeded_controller().await;
        let entry = SleepJournalEntry {
            date: Utc::now().date_naive(),
            factors: vec![],
        };

        let result = controller.add_journal_entry(entry).await;
        assert!(matches!(result, Err(ApiError::ValidationError(_))));
    }

    #[tokio::test]
    async fn new_journal_entries_come_back_first() {
        let controller = seeded_controller().await;
        let entry = SleepJournalEntry {
            date: Utc::now().date_naive(),
            factors: vec!["Stress: Low".to_string()],
        };

        controller.add_journal_entry(entry).await.unwrap();
        let journal = controller.list_journal().await.unwrap();
        assert_eq!(journal[0].factors, vec!["Stress: Low".to_string()]);
    }
}
