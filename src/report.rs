use std::fmt::Write;

use crate::metrics;
use crate::models::DashboardData;

pub fn build_report(handle: Option<&str>, days: usize, data: &DashboardData) -> String {
    let mix = metrics::weekday_weekend_mix(&data.series);

    let mut output = String::new();
    let account_label = handle.unwrap_or("demo account");

    let _ = writeln!(output, "# Creator Dashboard Report");
    let _ = writeln!(
        output,
        "Generated for {} (trailing {} days)",
        account_label, days
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Audience Summary");

    if let Some(latest) = data.series.last() {
        let _ = writeln!(output, "- Followers: {}", latest.followers);
        let _ = writeln!(
            output,
            "- Weekly growth: {:.1}%",
            data.summary.weekly_growth_pct
        );
        let _ = writeln!(
            output,
            "- Average engagement: {:.1}%",
            data.summary.avg_engagement_pct
        );
    } else {
        let _ = writeln!(output, "No metrics recorded for this window.");
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Weekday vs Weekend Mix");

    if data.series.is_empty() {
        let _ = writeln!(output, "No metrics recorded for this window.");
    } else {
        let _ = writeln!(
            output,
            "- Weekdays: {} days, avg engagement {:.1}%, avg daily gain {:.0} followers",
            mix.weekday_count, mix.weekday_avg_engagement, mix.weekday_avg_gain
        );
        let _ = writeln!(
            output,
            "- Weekends: {} days, avg engagement {:.1}%, avg daily gain {:.0} followers",
            mix.weekend_count, mix.weekend_avg_engagement, mix.weekend_avg_gain
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Recent Daily Metrics");

    if data.series.is_empty() {
        let _ = writeln!(output, "No metrics recorded for this window.");
    } else {
        for metric in data.series.iter().rev().take(7) {
            let _ = writeln!(
                output,
                "- {}: {} followers, {:.1}% engagement, {} reach, {} impressions",
                metric.date, metric.followers, metric.engagement_rate, metric.reach, metric.impressions
            );
        }
    }

    output
}
