use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMetric {
    pub date: NaiveDate,
    pub followers: i64,
    pub engagement_rate: f64,
    pub reach: i64,
    pub impressions: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub weekly_growth_pct: f64,
    pub avg_engagement_pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    pub series: Vec<DailyMetric>,
    pub summary: DashboardSummary,
}

#[derive(Debug, Clone)]
pub struct MixSummary {
    pub weekday_count: usize,
    pub weekend_count: usize,
    pub weekday_avg_engagement: f64,
    pub weekend_avg_engagement: f64,
    pub weekday_avg_gain: f64,
    pub weekend_avg_gain: f64,
}
