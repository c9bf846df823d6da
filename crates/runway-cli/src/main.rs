//! Runway CLI - Command-line interface for SaaS unit-economics modeling.
//!
//! # Usage
//!
//! ```bash
//! # Metrics for the Base scenario
//! runway model
//!
//! # Worst case with CAC waived
//! runway model --scenario "Worst Case" --cac 0
//!
//! # Every scenario side by side, as JSON
//! runway compare --set gross_margin=75% --format json
//!
//! # List the presets
//! runway scenarios
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use runway_config::RunwayConfig;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;

/// Environment variable holding a tracing filter directive.
const LOG_ENV_VAR: &str = "RUNWAY_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = RunwayConfig::load_optional(cli.config.as_deref())?;
    let ctx = Context {
        format: cli.format,
        config,
        quiet: cli.quiet,
    };

    // Execute command
    match cli.command {
        Commands::Model(args) => commands::model::execute(args, &ctx)?,
        Commands::Compare(args) => commands::compare::execute(args, &ctx)?,
        Commands::Scenarios(args) => commands::scenarios::execute(args, &ctx)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
