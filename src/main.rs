use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use clap::{Parser, ValueEnum};
use futures::future::try_join_all;
use tracing::{debug, info};

use lifeweeks::age::AgeBreakdown;
use lifeweeks::config::{Config, ThemeChoice};
use lifeweeks::svg::{self, Theme};
use lifeweeks::{StatisticsRecord, compute_statistics, describe, facts, parse_birthdate, report};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "lifeweeks")]
#[command(about = "Your life in weeks, with a few illustrative statistics")]
struct Cli {
    /// Birthdate (YYYY-MM-DD); falls back to the config file
    #[arg(short, long, env = "LIFEWEEKS_BIRTHDATE")]
    birthdate: Option<String>,

    /// Moment to measure at (YYYY-MM-DDTHH:MM:SS); defaults to local time
    #[arg(long)]
    now: Option<NaiveDateTime>,

    /// Path to configuration file
    #[arg(short, long, default_value = "lifeweeks.toml")]
    config: PathBuf,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Describe a single week of the grid (zero-based)
    #[arg(short, long, allow_negative_numbers = true)]
    week: Option<i64>,

    /// Print every fact instead of the fact of the day
    #[arg(long)]
    facts: bool,

    /// Write the SVG share images
    #[arg(long)]
    export: bool,

    /// Directory for the SVG share images (overrides config file, implies --export)
    #[arg(long)]
    svg_dir: Option<PathBuf>,

    /// Themes to export (overrides config file)
    #[arg(long, value_enum)]
    theme: Option<ThemeChoice>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lifeweeks=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let config = match Config::load(&cli.config)? {
        Some(config) => {
            info!("Loaded config from {}", cli.config.display());
            config
        }
        None => {
            debug!("Config file {} not found, using defaults", cli.config.display());
            Config::default()
        }
    };

    let birthdate = cli
        .birthdate
        .or(config.profile.birthdate)
        .context("No birthdate given (use --birthdate or set profile.birthdate)")?;
    let birthdate = parse_birthdate(&birthdate)?;
    let now = cli.now.unwrap_or_else(|| Local::now().naive_local());

    let stats = compute_statistics(birthdate, now)
        .with_context(|| format!("Failed to compute statistics for {birthdate}"))?;
    info!(
        weeks_lived = stats.weeks_lived,
        total_weeks = stats.total_weeks,
        percentage_lived = stats.percentage_lived,
        "Computed statistics"
    );

    if let Some(index) = cli.week {
        println!("{}", describe(index, &stats)?);
    } else if cli.facts {
        for fact in facts::personalized(&stats) {
            println!("{fact}");
        }
        for fact in facts::GENERAL {
            println!("{fact}");
        }
    } else {
        match cli.format {
            OutputFormat::Text => {
                let fact = facts::fact_of_the_day(&stats);
                print!("{}", report::render(&stats, &fact));
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        }
    }

    if cli.export || cli.svg_dir.is_some() {
        let dir = cli.svg_dir.unwrap_or(config.render.output_dir);
        let theme = cli.theme.unwrap_or(config.render.theme);
        export_svgs(&stats, &dir, theme.themes()).await?;
    }

    Ok(())
}

async fn write_svg(
    stats: &StatisticsRecord,
    age: &AgeBreakdown,
    dir: &Path,
    theme: Theme,
) -> Result<()> {
    let path = dir.join(theme.file_name());
    let svg = svg::generate_svg(stats, age, theme);
    tokio::fs::write(&path, svg)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    debug!("Wrote {}", path.display());
    Ok(())
}

async fn export_svgs(stats: &StatisticsRecord, dir: &Path, themes: Vec<Theme>) -> Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let age = AgeBreakdown::between(stats.birthdate, stats.computed_at.date());
    let writes = themes
        .into_iter()
        .map(|theme| write_svg(stats, &age, dir, theme));
    try_join_all(writes).await?;

    info!("Exported share images to {}", dir.display());
    Ok(())
}
