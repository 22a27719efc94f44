//! Share link command handler

use crate::config::Config;
use crate::seed_input::parse_seed;
use crate::share;
use anyhow::{Context, Result};

/// Handle the share command
pub fn handle(seed: &str, base_url: Option<&str>) -> Result<()> {
    let seed = parse_seed(seed).context("Invalid --seed")?;

    let config;
    let base = match base_url {
        Some(base) => base,
        None => {
            config = Config::load()?;
            config.share_base_url()
        }
    };

    let link = share::encode(base, seed).with_context(|| format!("Invalid base URL {}", base))?;
    println!("{}", link);

    Ok(())
}
