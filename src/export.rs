use std::io::Write;
use std::path::Path;

use anyhow::Context;

use crate::models::{DailyMetric, DashboardData};

pub fn write_csv(path: &Path, series: &[DailyMetric]) -> anyhow::Result<usize> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write_csv_records(file, series)
}

fn write_csv_records<W: Write>(writer: W, series: &[DailyMetric]) -> anyhow::Result<usize> {
    let mut writer = csv::Writer::from_writer(writer);
    let mut written = 0usize;

    for metric in series {
        writer.serialize(metric)?;
        written += 1;
    }

    writer.flush()?;
    Ok(written)
}

pub fn write_json(path: &Path, data: &DashboardData) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(file, data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate_ending, GeneratorConfig};
    use chrono::NaiveDate;

    fn sample_data() -> DashboardData {
        let config = GeneratorConfig {
            days: 10,
            seed: Some(17),
            ..Default::default()
        };
        generate_ending(&config, NaiveDate::from_ymd_opt(2026, 3, 15).unwrap())
    }

    #[test]
    fn csv_writes_one_row_per_day_plus_header() {
        let data = sample_data();
        let mut buffer = Vec::new();
        let written = write_csv_records(&mut buffer, &data.series).unwrap();

        assert_eq!(written, 10);
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 11);
        assert!(text
            .lines()
            .next()
            .unwrap()
            .starts_with("date,followers,engagement_rate"));
    }

    #[test]
    fn json_round_trips_the_series() {
        let data = sample_data();
        let text = serde_json::to_string(&data).unwrap();
        let parsed: DashboardData = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed.series, data.series);
        assert_eq!(
            parsed.summary.avg_engagement_pct,
            data.summary.avg_engagement_pct
        );
    }
}
