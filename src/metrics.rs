use crate::generator::is_weekend;
use crate::models::{DailyMetric, DashboardSummary, MixSummary};

const TRAILING_WINDOW: usize = 7;

pub fn summarize(series: &[DailyMetric]) -> DashboardSummary {
    DashboardSummary {
        weekly_growth_pct: weekly_growth_pct(series),
        avg_engagement_pct: avg_engagement_pct(series),
    }
}

/// Percentage change in followers between the first and last entry of the
/// trailing week. Degrades to 0.0 for series shorter than the window.
pub fn weekly_growth_pct(series: &[DailyMetric]) -> f64 {
    if series.len() < TRAILING_WINDOW {
        return 0.0;
    }

    let window = &series[series.len() - TRAILING_WINDOW..];
    let first = window[0].followers as f64;
    let last = window[window.len() - 1].followers as f64;
    if first == 0.0 {
        return 0.0;
    }

    (last - first) / first * 100.0
}

/// Mean engagement rate over the trailing week (or the whole series when
/// shorter), rounded to one decimal. Degrades to 0.0 on an empty series.
pub fn avg_engagement_pct(series: &[DailyMetric]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }

    let window = &series[series.len().saturating_sub(TRAILING_WINDOW)..];
    let total: f64 = window.iter().map(|metric| metric.engagement_rate).sum();
    round1(total / window.len() as f64)
}

pub fn weekday_weekend_mix(series: &[DailyMetric]) -> MixSummary {
    let mut weekday = (0usize, 0.0f64);
    let mut weekend = (0usize, 0.0f64);
    for metric in series {
        let bucket = if is_weekend(metric.date) {
            &mut weekend
        } else {
            &mut weekday
        };
        bucket.0 += 1;
        bucket.1 += metric.engagement_rate;
    }

    // Daily gain needs a predecessor, so the first entry only anchors the
    // second one's delta.
    let mut weekday_gain = (0usize, 0.0f64);
    let mut weekend_gain = (0usize, 0.0f64);
    for pair in series.windows(2) {
        let gain = (pair[1].followers - pair[0].followers) as f64;
        let bucket = if is_weekend(pair[1].date) {
            &mut weekend_gain
        } else {
            &mut weekday_gain
        };
        bucket.0 += 1;
        bucket.1 += gain;
    }

    MixSummary {
        weekday_count: weekday.0,
        weekend_count: weekend.0,
        weekday_avg_engagement: mean(weekday),
        weekend_avg_engagement: mean(weekend),
        weekday_avg_gain: mean(weekday_gain),
        weekend_avg_gain: mean(weekend_gain),
    }
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn mean((count, total): (usize, f64)) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series_from(followers: &[i64], engagement: &[f64]) -> Vec<DailyMetric> {
        let start = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        followers
            .iter()
            .zip(engagement.iter())
            .enumerate()
            .map(|(i, (followers, rate))| DailyMetric {
                date: start + chrono::Duration::days(i as i64),
                followers: *followers,
                engagement_rate: *rate,
                reach: followers * 5,
                impressions: followers * 10,
            })
            .collect()
    }

    #[test]
    fn weekly_growth_uses_trailing_week_endpoints() {
        let series = series_from(
            &[1000, 1010, 1020, 1030, 1040, 1050, 1100],
            &[2.0; 7],
        );
        let growth = weekly_growth_pct(&series);
        assert!((growth - 10.0).abs() < 0.001);
    }

    #[test]
    fn weekly_growth_ignores_days_before_the_window() {
        let series = series_from(
            &[1, 1, 1000, 1010, 1020, 1030, 1040, 1050, 1100],
            &[2.0; 9],
        );
        let growth = weekly_growth_pct(&series);
        assert!((growth - 10.0).abs() < 0.001);
    }

    #[test]
    fn avg_engagement_rounds_to_one_decimal() {
        let series = series_from(
            &[1000; 7],
            &[2.0, 2.5, 3.0, 3.5, 2.8, 2.2, 3.1],
        );
        assert_eq!(avg_engagement_pct(&series), 2.7);
    }

    #[test]
    fn short_series_degrades_to_zero() {
        assert_eq!(weekly_growth_pct(&[]), 0.0);
        assert_eq!(avg_engagement_pct(&[]), 0.0);

        let series = series_from(&[1000, 1100], &[2.0, 3.0]);
        assert_eq!(weekly_growth_pct(&series), 0.0);
        assert_eq!(avg_engagement_pct(&series), 2.5);
    }

    #[test]
    fn zero_follower_baseline_degrades_to_zero() {
        let series = series_from(&[0, 10, 20, 30, 40, 50, 60], &[2.0; 7]);
        assert_eq!(weekly_growth_pct(&series), 0.0);
    }

    #[test]
    fn mix_splits_by_day_of_week() {
        // 2026-03-02 is a Monday, so days 5 and 6 land on the weekend.
        let series = series_from(
            &[1000, 1100, 1200, 1300, 1400, 1600, 1800],
            &[2.0, 2.0, 2.0, 2.0, 2.0, 4.0, 4.0],
        );
        let mix = weekday_weekend_mix(&series);

        assert_eq!(mix.weekday_count, 5);
        assert_eq!(mix.weekend_count, 2);
        assert!((mix.weekday_avg_engagement - 2.0).abs() < 0.001);
        assert!((mix.weekend_avg_engagement - 4.0).abs() < 0.001);
        assert!((mix.weekday_avg_gain - 100.0).abs() < 0.001);
        assert!((mix.weekend_avg_gain - 200.0).abs() < 0.001);
    }

    #[test]
    fn mix_on_empty_series_is_zeroed() {
        let mix = weekday_weekend_mix(&[]);
        assert_eq!(mix.weekday_count, 0);
        assert_eq!(mix.weekend_count, 0);
        assert_eq!(mix.weekday_avg_engagement, 0.0);
        assert_eq!(mix.weekend_avg_gain, 0.0);
    }
}
