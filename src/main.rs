use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgGroup, Parser, Subcommand};

mod export;
mod generator;
mod metrics;
mod models;
mod report;

#[derive(Parser)]
#[command(name = "dashboard-metrics")]
#[command(about = "Synthetic creator dashboard metrics for CreatorPulse", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a snapshot of the trailing metrics window
    Snapshot {
        #[arg(long, default_value_t = 30)]
        days: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 500)]
        latency_ms: u64,
        #[arg(long, default_value_t = 7)]
        limit: usize,
    },
    /// Generate a markdown report
    Report {
        #[arg(long)]
        handle: Option<String>,
        #[arg(long, default_value_t = 30)]
        days: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 500)]
        latency_ms: u64,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// Export the generated series to a file
    #[command(group(
        ArgGroup::new("format")
            .args(["csv", "json"])
            .required(true)
            .multiple(false)
    ))]
    Export {
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long)]
        json: Option<PathBuf>,
        #[arg(long, default_value_t = 30)]
        days: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Snapshot {
            days,
            seed,
            latency_ms,
            limit,
        } => {
            let config = generator::GeneratorConfig {
                days,
                seed,
                ..Default::default()
            };
            let data =
                generator::fetch_dashboard_data(&config, Duration::from_millis(latency_ms)).await;

            let Some(latest) = data.series.last() else {
                println!("No metrics generated for this window.");
                return Ok(());
            };

            println!("Audience snapshot for the last {days} days:");
            println!("- Followers: {}", latest.followers);
            println!("- Weekly growth: {:.1}%", data.summary.weekly_growth_pct);
            println!(
                "- Average engagement: {:.1}%",
                data.summary.avg_engagement_pct
            );
            println!("Most recent days:");
            for metric in data.series.iter().rev().take(limit) {
                println!(
                    "- {}: {} followers, {:.1}% engagement, {} reach, {} impressions",
                    metric.date,
                    metric.followers,
                    metric.engagement_rate,
                    metric.reach,
                    metric.impressions
                );
            }
        }
        Commands::Report {
            handle,
            days,
            seed,
            latency_ms,
            out,
        } => {
            let config = generator::GeneratorConfig {
                days,
                seed,
                ..Default::default()
            };
            let data =
                generator::fetch_dashboard_data(&config, Duration::from_millis(latency_ms)).await;
            let report = report::build_report(handle.as_deref(), days, &data);
            std::fs::write(&out, report)?;
            println!("Report written to {}.", out.display());
        }
        Commands::Export {
            csv,
            json,
            days,
            seed,
        } => {
            let config = generator::GeneratorConfig {
                days,
                seed,
                ..Default::default()
            };
            let data = generator::generate(&config);

            if let Some(path) = csv {
                let written = export::write_csv(&path, &data.series)?;
                println!("Wrote {written} rows to {}.", path.display());
            } else if let Some(path) = json {
                export::write_json(&path, &data)?;
                println!("Wrote dashboard data to {}.", path.display());
            }
        }
    }

    Ok(())
}
