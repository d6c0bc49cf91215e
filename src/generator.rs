use std::time::Duration;

use chrono::{Datelike, NaiveDate, Utc, Weekday};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::metrics;
use crate::models::{DailyMetric, DashboardData};

const WEEKEND_GROWTH_BASE: f64 = 150.0;
const WEEKDAY_GROWTH_BASE: f64 = 85.0;
const WEEKEND_ENGAGEMENT_BASE: f64 = 3.2;
const WEEKDAY_ENGAGEMENT_BASE: f64 = 2.8;
const ENGAGEMENT_FLOOR: f64 = 1.5;

/// Knobs for the synthetic series. Defaults reproduce the numbers the
/// production dashboard shows for a demo account.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub days: usize,
    pub base_followers: i64,
    pub daily_trend: i64,
    /// Fixed RNG seed for reproducible series. Unset means fresh entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            days: 30,
            base_followers: 47_800,
            daily_trend: 95,
            seed: None,
        }
    }
}

/// Synthesize the trailing daily metrics window ending today, plus its
/// derived summary.
pub fn generate(config: &GeneratorConfig) -> DashboardData {
    generate_ending(config, Utc::now().date_naive())
}

pub fn generate_ending(config: &GeneratorConfig, end: NaiveDate) -> DashboardData {
    let mut rng = match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let mut series = Vec::with_capacity(config.days);
    for day_offset in 0..config.days {
        let days_back = (config.days - 1 - day_offset) as i64;
        let date = end - chrono::Duration::days(days_back);
        series.push(synthesize_day(config, date, day_offset as i64, &mut rng));
    }

    let summary = metrics::summarize(&series);
    DashboardData { series, summary }
}

fn synthesize_day(
    config: &GeneratorConfig,
    date: NaiveDate,
    day_offset: i64,
    rng: &mut SmallRng,
) -> DailyMetric {
    let weekend = is_weekend(date);

    // Follower gain trends up linearly, with a weekend bump and noise that
    // can dip below the trend line.
    let growth_base = if weekend {
        WEEKEND_GROWTH_BASE
    } else {
        WEEKDAY_GROWTH_BASE
    };
    let growth_delta = growth_base + rng.gen_range(-30.0..70.0);
    let followers = ((config.base_followers + day_offset * config.daily_trend) as f64
        + growth_delta)
        .floor() as i64;

    let engagement_base = if weekend {
        WEEKEND_ENGAGEMENT_BASE
    } else {
        WEEKDAY_ENGAGEMENT_BASE
    };
    let engagement_rate =
        metrics::round1((engagement_base + rng.gen_range(-0.5..1.0)).max(ENGAGEMENT_FLOOR));

    let reach = (followers as f64 * rng.gen_range(4.5..6.5)).floor() as i64;
    let impressions = (reach as f64 * rng.gen_range(1.8..2.5)).floor() as i64;

    DailyMetric {
        date,
        followers,
        engagement_rate,
        reach,
        impressions,
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Generate behind a simulated backend round-trip, the way the dashboard
/// shows a loading state before data arrives.
pub async fn fetch_dashboard_data(config: &GeneratorConfig, latency: Duration) -> DashboardData {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
    generate(config)
}
