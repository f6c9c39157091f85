//! clubmap - Club CSV to interactive HTML map
//!
//! Reads the club CSV, builds the layered marker map and saves it as a
//! standalone HTML page.

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use clubmap::cli::Cli;
use clubmap::{generate_map, init_logging, Config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    let mut config = Config::load_from(cli.config.clone()).context("loading configuration")?;
    cli.apply_overrides(&mut config);
    config.validate()?;
    debug!(config = %config.to_json()?, "effective configuration");

    let output = generate_map(&config)
        .with_context(|| format!("building map from {}", config.paths.input.display()))?;
    println!("Saved map to: {}", output.display());

    if cli.open {
        open::that(&output).with_context(|| format!("opening {}", output.display()))?;
    }

    Ok(())
}
