//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up gacha CLI defaults.

use crate::config::Config;
use anyhow::{Context, Result};
use gacha::Catalog;
use std::path::PathBuf;

/// Handle the configure command
///
/// # Arguments
/// * `catalog` - Catalog definition file to use by default
/// * `share_url` - Base URL for share links
/// * `show` - If true, show current configuration
/// * `reset` - If true, clear all settings first
pub fn handle(
    catalog: Option<PathBuf>,
    share_url: Option<String>,
    show: bool,
    reset: bool,
) -> Result<()> {
    let mut config = if reset {
        Config::default()
    } else {
        Config::load()?
    };

    if show && catalog.is_none() && share_url.is_none() && !reset {
        show_config(&config);
        return Ok(());
    }

    if catalog.is_none() && share_url.is_none() && !reset {
        show_usage();
        return Ok(());
    }

    apply(&mut config, catalog, share_url)?;
    config.save()?;

    if reset {
        println!("Configuration reset");
    }
    show_config(&config);

    Ok(())
}

/// Validate and apply new settings
fn apply(config: &mut Config, catalog: Option<PathBuf>, share_url: Option<String>) -> Result<()> {
    if let Some(path) = catalog {
        // Refuse to persist a catalog that would fail on every draw
        Catalog::load(&path)
            .with_context(|| format!("Invalid catalog definition {}", path.display()))?;
        config.catalog = Some(path);
    }

    if let Some(url) = share_url {
        url::Url::parse(&url).with_context(|| format!("Invalid share URL {}", url))?;
        config.share_base_url = Some(url);
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) {
    match &config.catalog {
        Some(path) => println!("Catalog: {}", path.display()),
        None => println!("Catalog: built-in"),
    }
    println!("Share URL: {}", config.share_base_url());

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: gacha configure --catalog PATH");
    println!("   or: gacha configure --share-url URL");
    println!("   or: gacha configure --show");
    println!("   or: gacha configure --reset");
}
