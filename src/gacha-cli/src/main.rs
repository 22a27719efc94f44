mod cli;
mod commands;
mod config;
mod seed_input;
mod share;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Draw {
            seed,
            url,
            format,
            catalog,
        } => {
            commands::draw::handle(
                seed.as_deref(),
                url.as_deref(),
                format,
                catalog.as_deref(),
            )?;
        }

        Commands::Share { seed, base_url } => {
            commands::share::handle(&seed, base_url.as_deref())?;
        }

        Commands::Catalog {
            tier,
            format,
            catalog,
        } => {
            commands::catalog::handle(tier, format, catalog.as_deref())?;
        }

        Commands::Stats {
            samples,
            start,
            catalog,
        } => {
            commands::stats::handle(samples, start, catalog.as_deref())?;
        }

        Commands::Configure {
            catalog,
            share_url,
            show,
            reset,
        } => {
            commands::configure::handle(catalog, share_url, show, reset)?;
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays parseable
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "gacha=trace,gacha_cli=debug"
    } else {
        "gacha=warn,gacha_cli=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
