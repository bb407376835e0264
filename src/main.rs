use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use remaining_life::age::{self, calendar_age, compute_age_stats_at};
use remaining_life::config::{DEFAULT_CONFIG_FILE, Settings};
use remaining_life::input::parse_birth_date;
use remaining_life::stats::compute_life_stats_at;
use remaining_life::svg::{self, Theme};
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "remaining-life")]
#[command(about = "Days lived, days left, and everyday activities counted from a birth date")]
struct Cli {
    /// Birth date as YYYY-MM-DD
    #[arg(long, env = "REMAINING_LIFE_BIRTH_DATE")]
    birth_date: Option<String>,
    /// TOML settings file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Directory to write the SVG reports to
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Print the computed stats as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Set RUST_LOG=debug for detailed logs
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)?.merge(cli.birth_date, cli.out_dir, cli.json);
    debug!(?settings, "Loaded settings");

    // Read the clock once so every figure agrees on "today"
    let today = age::today();
    let birth = parse_birth_date(settings.birth_date.as_deref().unwrap_or_default(), today)
        .context("Pass --birth-date, set REMAINING_LIFE_BIRTH_DATE, or add birth_date to the config file")?;

    let age = compute_age_stats_at(birth, today);
    let stats = compute_life_stats_at(birth, today);
    let calendar = calendar_age(birth, today);
    info!(
        %birth,
        days_lived = stats.days_lived,
        days_left = stats.days_left.floor(),
        "Computed life stats ({calendar})"
    );

    fs::create_dir_all(&settings.out_dir).with_context(|| {
        format!("Failed to create output directory {}", settings.out_dir.display())
    })?;

    for theme in [Theme::Dark, Theme::Light] {
        let path = settings.out_dir.join(theme.file_name());
        fs::write(&path, svg::generate_svg(&stats, &age, &calendar, theme))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Generated {}", path.display());
    }

    if settings.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    }

    Ok(())
}
