//! Draw command handler

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::seed_input::{parse_seed, time_seed};
use crate::share;
use anyhow::{Context, Result};
use gacha::{map_search_url, DrawOutcome};
use serde::Serialize;
use std::path::Path;

/// Machine-readable draw result
#[derive(Debug, Serialize)]
pub struct DrawReport<'a> {
    /// Seed as given (before 32-bit truncation)
    pub seed: i64,
    pub name: &'a str,
    pub category: &'a str,
    pub tier: gacha::Tier,
    pub tier_label: &'static str,
    pub special: bool,
    pub map_url: String,
    pub share_url: String,
    pub tier_roll: f64,
    pub item_roll: f64,
}

impl<'a> DrawReport<'a> {
    pub fn new(seed: i64, outcome: &DrawOutcome<'a>, share_url: String) -> Self {
        let item = outcome.item;
        Self {
            seed,
            name: &item.name,
            category: &item.category,
            tier: item.tier,
            tier_label: item.tier.label(),
            special: item.tier.is_special(),
            map_url: map_search_url(item),
            share_url,
            tier_roll: outcome.tier_roll,
            item_roll: outcome.item_roll,
        }
    }
}

/// Handle the draw command
pub fn handle(
    seed: Option<&str>,
    url: Option<&str>,
    format: OutputFormat,
    catalog_path: Option<&Path>,
) -> Result<()> {
    let config = Config::load()?;
    let catalog = super::load_catalog(catalog_path, &config)?;

    let seed = resolve_seed(seed, url)?;
    let outcome = catalog.draw_outcome(seed);
    let share_url = share::encode(config.share_base_url(), seed)
        .context("Failed to build share link")?;
    let report = DrawReport::new(seed, &outcome, share_url.to_string());

    tracing::info!(seed, item = %report.name, tier = %report.tier, "drew item");

    match format {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

/// Seed from `--seed`, else from `--url`, else from the clock
fn resolve_seed(seed: Option<&str>, url: Option<&str>) -> Result<i64> {
    if let Some(text) = seed {
        return parse_seed(text).context("Invalid --seed");
    }
    if let Some(link) = url {
        return share::decode(link).with_context(|| format!("Invalid share link {}", link));
    }
    let seed = time_seed();
    tracing::debug!(seed, "no seed given, using current time");
    Ok(seed)
}

fn print_text(report: &DrawReport<'_>) {
    let badge = format!("[{}]", report.tier_label);
    if report.special {
        println!("*** {} {} ***", badge, report.name);
    } else {
        println!("{} {}", badge, report.name);
    }
    println!("  Genre:  {}", report.category);
    println!("  Tier:   {}", report.tier);
    println!("  Seed:   {}", report.seed);
    println!("  Map:    {}", report.map_url);
    println!("  Share:  {}", report.share_url);
}
