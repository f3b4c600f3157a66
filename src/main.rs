use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDateTime;
use clap::Parser;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use happyhour::clock::{Clock, FixedClock, LocalClock};
use happyhour::config::AppConfig;
use happyhour::status::StatusEvaluator;
use happyhour::venues::board::venue_statuses;
use happyhour::venues::venue_store::VenueStore;

#[derive(Debug, Clone, Parser)]
#[command(about = "List venues by live happy hour status")]
struct Args {
    #[arg(long, env = "HAPPYHOUR_CONFIG", default_value = AppConfig::FILE_NAME)]
    pub config: PathBuf,

    /// Venue cache to read instead of the configured one.
    #[arg(long)]
    pub venues: Option<PathBuf>,

    /// Local time to evaluate at, e.g. 2026-10-16T16:45. Defaults to now.
    #[arg(long, value_parser = parse_local_datetime)]
    pub at: Option<NaiveDateTime>,

    #[arg(long)]
    pub ending_soon: Option<u16>,

    #[arg(long)]
    pub starting_soon: Option<u16>,

    #[arg(long)]
    pub live_only: bool,

    #[arg(long)]
    pub json: bool,
}

fn parse_local_datetime(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
}

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("happyhour=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = AppConfig::load(&args.config)?;
    if let Some(minutes) = args.ending_soon {
        config.thresholds.ending_soon_minutes = minutes;
    }
    if let Some(minutes) = args.starting_soon {
        config.thresholds.starting_soon_minutes = minutes;
    }
    config.thresholds.validate()?;

    let store = VenueStore::new(args.venues.unwrap_or(config.venues_file));
    let venues = store.load()?;

    let clock: Box<dyn Clock> = match args.at {
        Some(at) => Box::new(FixedClock(at.into())),
        None => Box::new(LocalClock),
    };
    let now = clock.now();

    let evaluator = StatusEvaluator::new(config.thresholds);
    let statuses = venue_statuses(&venues, &evaluator, now, args.live_only);

    info!(
        %now,
        venues = venues.len(),
        live = statuses.iter().filter(|s| s.status.is_live()).count(),
        thresholds = ?evaluator.thresholds(),
        "evaluated happy hours"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&statuses)?);
    } else {
        for status in &statuses {
            println!("{status}");
        }
    }

    Ok(())
}
