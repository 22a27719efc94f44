//! Core CLI definitions

use clap::{Parser, Subcommand};
use gacha::Tier;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gacha")]
#[command(about = "Seed-reproducible restaurant draws", long_about = None)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for draw and catalog commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Draw one item (from a seed, a shared link, or the current time)
    #[command(visible_alias = "d")]
    Draw {
        /// Seed to draw with (decimal; wider than 32 bits wraps)
        #[arg(short, long, allow_hyphen_values = true, conflicts_with = "url")]
        seed: Option<String>,

        /// Shared link to resolve (reads its `seed` parameter)
        #[arg(short, long)]
        url: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Catalog definition file (JSON or YAML); overrides the configured one
        #[arg(short, long, env = "GACHA_CATALOG")]
        catalog: Option<PathBuf>,
    },

    /// Print the share link for a seed
    Share {
        /// Seed to share
        #[arg(short, long, allow_hyphen_values = true)]
        seed: String,

        /// Base URL; overrides the configured one
        #[arg(short, long)]
        base_url: Option<String>,
    },

    /// List catalog items with their draw probabilities
    #[command(visible_alias = "ls")]
    Catalog {
        /// Only list one tier (SSR, SR, R, N or tier name)
        #[arg(short, long)]
        tier: Option<Tier>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Catalog definition file (JSON or YAML); overrides the configured one
        #[arg(short, long, env = "GACHA_CATALOG")]
        catalog: Option<PathBuf>,
    },

    /// Compare observed tier frequencies over a seed range with the declared ones
    Stats {
        /// Number of consecutive seeds to draw
        #[arg(short = 'n', long, default_value = "100000")]
        samples: u32,

        /// First seed of the range
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        start: i64,

        /// Catalog definition file (JSON or YAML); overrides the configured one
        #[arg(short, long, env = "GACHA_CATALOG")]
        catalog: Option<PathBuf>,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default catalog definition file
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Set base URL for share links
        #[arg(long)]
        share_url: Option<String>,

        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Clear all settings
        #[arg(long)]
        reset: bool,
    },
}
