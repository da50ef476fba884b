// Recommendation CLI
//
// Purpose: Rank the locations in a CSV file and shortlist the affordable ones
// Usage: cargo run --bin recommend -- --data locations.csv --budget 500000000 --area 100

use anyhow::Context;
use clap::Parser;
use parcel_scorer::{
    CrowdPolarity, IngestOptions, KnowledgeBase, LocationScorer, LocationTable, PurchaseRequest,
    RecommendationStatus, ScoringConfig, WeightConfig,
};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "recommend", about = "Rank land parcels and shortlist the affordable ones")]
struct Args {
    /// CSV file with one row per location
    #[arg(long, env = "PARCEL_DATA")]
    data: PathBuf,

    /// Total budget in base currency
    #[arg(long, env = "PARCEL_BUDGET")]
    budget: f64,

    /// Land area in square metres
    #[arg(long, env = "PARCEL_AREA")]
    area: f64,

    /// Number of locations to shortlist
    #[arg(long, env = "PARCEL_TOP", default_value_t = 3)]
    top: usize,

    /// Multiplier from the sheet's price unit to base currency
    #[arg(long, env = "PARCEL_PRICE_SCALE", default_value_t = 1.0)]
    price_scale: f64,

    /// "quiet" (low crowd level is desirable) or "busy"
    #[arg(long, env = "PARCEL_CROWD_POLARITY", default_value = "quiet")]
    crowd_polarity: CrowdPolarity,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parcel_scorer=info,recommend=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    anyhow::ensure!(
        args.price_scale.is_finite() && args.price_scale > 0.0,
        "--price-scale must be positive, got {}",
        args.price_scale
    );

    tracing::info!("Configuration:");
    tracing::info!("  DATA: {}", args.data.display());
    tracing::info!("  BUDGET: {}", args.budget);
    tracing::info!("  AREA: {}", args.area);
    tracing::info!("  TOP: {}", args.top);
    tracing::info!("  CROWD POLARITY: {:?}", args.crowd_polarity);

    let table = LocationTable::load_csv(&args.data)
        .with_context(|| format!("Failed to load locations from {}", args.data.display()))?;
    let records = table.records(&IngestOptions {
        price_scale: args.price_scale,
    })?;

    let config = ScoringConfig::new(WeightConfig::default(), args.crowd_polarity);
    for share in config.weights.breakdown() {
        tracing::info!("  Weight {}: {:.0}%", share.label, share.percent);
    }

    let scorer = LocationScorer::new(config, KnowledgeBase::builtin());
    let request = PurchaseRequest::new(args.budget, args.area, args.top);
    let recommendation = scorer
        .recommend(&records, &request)
        .context("Scoring pass failed")?;

    if recommendation.status == RecommendationStatus::EmptyResult {
        tracing::warn!("No location fits this budget. Raise the budget or reduce the land area.");
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&recommendation)?
    } else {
        serde_json::to_string(&recommendation)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json)?;

    Ok(())
}
