//! Command-line interface for clubmap.
//!
//! Every flag is optional: with no arguments the tool reads the configured
//! input CSV and writes the configured output page.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::logging::Verbosity;

/// clubmap - Render club records as an interactive HTML map
///
/// Loads a CSV of clubs (name, county, province, league, location, members,
/// performance) and writes a Leaflet map with one togglable layer per
/// province and league.
#[derive(Debug, Parser)]
#[command(name = "clubmap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Club CSV to read (overrides config)
    #[arg(short, long, value_name = "CSV")]
    pub input: Option<PathBuf>,

    /// HTML file to write (overrides config)
    #[arg(short, long, value_name = "HTML")]
    pub output: Option<PathBuf>,

    /// Path to custom configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Open the generated map in the default browser
    #[arg(long)]
    pub open: bool,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }

    /// Apply path overrides from the command line onto `config`.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(input) = &self.input {
            config.paths.input = input.clone();
        }
        if let Some(output) = &self.output {
            config.paths.output = output.clone();
        }
    }
}
