//! Command handlers for gacha CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod catalog;
pub mod configure;
pub mod draw;
pub mod share;
pub mod stats;

use crate::config::Config;
use anyhow::{Context, Result};
use gacha::Catalog;
use std::path::Path;

/// Load the catalog to draw from: explicit path, then configured path, then
/// the built-in one. Validation failures are fatal.
pub fn load_catalog(path: Option<&Path>, config: &Config) -> Result<Catalog> {
    match path.or(config.catalog.as_deref()) {
        Some(path) => {
            tracing::debug!("Loading catalog from {}", path.display());
            Catalog::load(path)
                .with_context(|| format!("Invalid catalog definition {}", path.display()))
        }
        None => Catalog::builtin().context("Built-in catalog is invalid"),
    }
}
