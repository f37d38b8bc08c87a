use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;

use community_filter::{
    EngineConfig, FilterCriteria, FilterEngine, FilterSummary, load_criteria, load_houses,
};

/// Filter a house registry by member criteria and free-text search
#[derive(Parser, Debug)]
#[command(name = "community-filter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with the house collection
    #[arg(long)]
    houses: PathBuf,

    /// JSON file with filter criteria (UI field names)
    #[arg(long)]
    filters: Option<PathBuf>,

    /// Free-text query; overrides `q` from the filters file
    #[arg(long, short)]
    query: Option<String>,

    /// Which pass to run
    #[arg(long, value_enum, default_value_t = Mode::Combined)]
    mode: Mode,

    /// JSON file with engine configuration
    #[arg(long, env = "COMMUNITY_FILTER_CONFIG")]
    config: Option<PathBuf>,

    /// Print counts instead of the filtered houses
    #[arg(long)]
    summary: bool,

    /// Print the summary as JSON
    #[arg(long, requires = "summary")]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Resolve the query per house, then apply the other criteria
    Combined,
    /// Apply every criterion to members
    Member,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    log::debug!("{config}");

    let houses = load_houses(&cli.houses)
        .with_context(|| format!("Failed to load houses from {}", cli.houses.display()))?;

    let mut criteria = match &cli.filters {
        Some(path) => load_criteria(path)
            .with_context(|| format!("Failed to load filters from {}", path.display()))?,
        None => FilterCriteria::default(),
    };
    if let Some(query) = &cli.query {
        criteria = criteria.with_query(query);
    }

    let engine = FilterEngine::new(config);
    let result = match cli.mode {
        Mode::Combined => engine.combined(&houses, &criteria),
        Mode::Member => engine.member_pass(&houses, &criteria),
    };
    info!(
        "Filter [{criteria}] kept {} of {} houses",
        result.len(),
        houses.len()
    );

    if cli.summary {
        let summary = FilterSummary::from_houses(&result);
        if cli.json {
            let json =
                serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
            println!("{json}");
        } else {
            print!("{summary}");
        }
    } else {
        let json = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
        println!("{json}");
    }

    Ok(())
}
