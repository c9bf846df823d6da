//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CompareArgs, ModelArgs, ScenariosArgs};

/// Runway - SaaS unit-economics scenario modeling
#[derive(Parser)]
#[command(name = "runway")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Config file with a default scenario and standing overrides
    #[arg(short, long, env = runway_config::CONFIG_ENV_VAR, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUNWAY_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Compute metrics for one scenario, with optional overrides
    Model(ModelArgs),

    /// Compute every scenario side by side
    Compare(CompareArgs),

    /// List the scenario presets
    Scenarios(ScenariosArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format with full-precision values
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the headline value)
    Minimal,
}
