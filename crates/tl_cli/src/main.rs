//! Timeline-Lite CLI
//!
//! Offline extraction harness: loads a raw timeline JSON file, runs one
//! extraction for one player, prints the response record. Replaces the
//! ad-hoc scripts that used to poke the deployed endpoint.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tl_core::analysis::PurchaseAfterGrace;
use tl_core::{
    extract_timeline_lite, RawTimeline, SetItemCatalog, TimelineError, TimelineLiteRequest,
};

#[derive(Parser)]
#[command(name = "tl_cli")]
#[command(about = "Extract early-game checkpoints from a match timeline", long_about = None)]
struct Cli {
    /// Raw timeline JSON file, as fetched from the game-data provider
    #[arg(long)]
    timeline: PathBuf,

    /// Target player's puuid
    #[arg(long)]
    puuid: String,

    /// Match id echoed into the response; defaults to the payload's own
    #[arg(long)]
    match_id: Option<String>,

    /// Routing region echoed into the response
    #[arg(long, default_value = "europe")]
    region: String,

    /// Optional JSON array of completed-item ids for firstFullItemMin
    #[arg(long)]
    items: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long, default_value = "false")]
    compact: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let payload = fs::read_to_string(&cli.timeline).map_err(|e| {
        TimelineError::TimelineUnavailable(format!("{}: {e}", cli.timeline.display()))
    })?;
    let raw = RawTimeline::from_json(&payload)?;

    let catalog = match &cli.items {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading item list {}", path.display()))?;
            let ids: Vec<u32> =
                serde_json::from_str(&text).context("item list must be a JSON array of item ids")?;
            SetItemCatalog::new(ids)
        }
        None => SetItemCatalog::default(),
    };

    let match_id = cli
        .match_id
        .clone()
        .or_else(|| raw.metadata.as_ref().and_then(|m| m.match_id.clone()))
        .unwrap_or_default();

    let request = TimelineLiteRequest {
        match_id,
        puuid: cli.puuid.clone(),
        region: cli.region.clone(),
    };

    let response = extract_timeline_lite(&raw, &request, &catalog, &PurchaseAfterGrace::default())?;

    let output = if cli.compact {
        serde_json::to_string(&response)?
    } else {
        serde_json::to_string_pretty(&response)?
    };
    println!("{output}");

    Ok(())
}
