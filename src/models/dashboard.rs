use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Response structures for get_dashboard_stats
#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(rename = "overallHealthScore")]
    pub overall_health_score: u32,
    #[serde(rename = "categoryScores")]
    pub category_scores: CategoryScores,
    #[serde(rename = "recentActivities")]
    pub recent_activities: Vec<RecentActivity>,
    pub upcoming: Vec<UpcomingItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryScores {
    pub fitness: u32,
    pub nutrition: u32,
    pub sleep: u32,
    pub mental: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecentActivity {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpcomingItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(rename = "scheduledFor")]
    pub scheduled_for: DateTime<Utc>,
}
