use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Durations are hours, quality and efficiency are 0-100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepNight {
    pub date: NaiveDate,
    pub duration: f64,
    pub quality: u32,
    #[serde(rename = "deepSleep")]
    pub deep_sleep: f64,
    #[serde(rename = "lightSleep")]
    pub light_sleep: f64,
    #[serde(rename = "remSleep")]
    pub rem_sleep: f64,
    pub awake: f64,
    pub bedtime: String,
    pub wakeup: String,
    #[serde(rename = "sleepEfficiency")]
    pub sleep_efficiency: u32,
}

// Response structure for get_sleep_data
#[derive(Debug, Serialize, Deserialize)]
pub struct SleepData {
    #[serde(rename = "lastNight")]
    pub last_night: SleepNight,
    #[serde(rename = "weeklyAverage")]
    pub weekly_average: WeeklySleepAverage,
    #[serde(rename = "sleepTrend")]
    pub sleep_trend: Vec<SleepTrendDay>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeeklySleepAverage {
    pub duration: f64,
    pub quality: u32,
    #[serde(rename = "deepSleep")]
    pub deep_sleep: f64,
    #[serde(rename = "lightSleep")]
    pub light_sleep: f64,
    #[serde(rename = "remSleep")]
    pub rem_sleep: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SleepTrendDay {
    pub date: NaiveDate,
    pub duration: f64,
    pub quality: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepJournalEntry {
    pub date: NaiveDate,
    pub factors: Vec<String>,
}
