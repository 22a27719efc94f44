//! Catalog listing command handler

use crate::cli::OutputFormat;
use crate::config::Config;
use anyhow::Result;
use gacha::{Catalog, Tier};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct ListedItem<'a> {
    name: &'a str,
    category: &'a str,
    tier: Tier,
    tier_label: &'static str,
    probability: f64,
}

/// Handle the catalog command
pub fn handle(tier: Option<Tier>, format: OutputFormat, catalog_path: Option<&Path>) -> Result<()> {
    let config = Config::load()?;
    let catalog = super::load_catalog(catalog_path, &config)?;

    let tiers: Vec<Tier> = match tier {
        Some(t) => vec![t],
        None => Tier::ALL.to_vec(),
    };

    match format {
        OutputFormat::Text => print_table(&catalog, &tiers),
        OutputFormat::Json => {
            let items = listed_items(&catalog, &tiers);
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
    }

    Ok(())
}

fn listed_items<'a>(catalog: &'a Catalog, tiers: &[Tier]) -> Vec<ListedItem<'a>> {
    tiers
        .iter()
        .flat_map(|&tier| catalog.tier_items(tier))
        .map(|item| ListedItem {
            name: &item.name,
            category: &item.category,
            tier: item.tier,
            tier_label: item.tier.label(),
            probability: catalog.item_probability(item),
        })
        .collect()
}

fn print_table(catalog: &Catalog, tiers: &[Tier]) {
    for &tier in tiers {
        println!(
            "{} {} - {:.1}% ({} items)",
            tier.label(),
            tier,
            catalog.probability(tier) * 100.0,
            catalog.tier_len(tier)
        );
        println!("{}", "-".repeat(50));
        for item in catalog.tier_items(tier) {
            println!(
                "  {:<24} {:<16} {:>7.3}%",
                item.name,
                item.category,
                catalog.item_probability(item) * 100.0
            );
        }
        println!();
    }
}
