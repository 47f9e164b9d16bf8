use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Scores are 0-100 throughout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: String,
    pub score: u32,
    pub energy: String,
    #[serde(rename = "energyScore")]
    pub energy_score: u32,
    pub stress: String,
    #[serde(rename = "stressScore")]
    pub stress_score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factors: Option<Vec<String>>,
}

// Response structure for get_mood_data
#[derive(Debug, Serialize, Deserialize)]
pub struct MoodData {
    pub today: MoodEntry,
    #[serde(rename = "weeklyAverage")]
    pub weekly_average: MoodAverage,
    #[serde(rename = "moodHistory")]
    pub mood_history: Vec<MoodHistoryDay>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MoodAverage {
    pub mood: u32,
    pub energy: u32,
    pub stress: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MoodHistoryDay {
    pub date: NaiveDate,
    pub mood: u32,
    pub stress: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellnessPractice {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub duration: String,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streak: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled: Option<String>,
    pub icon: String,
}
