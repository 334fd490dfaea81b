use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Delphi exact autoregressive modeling toolkit.
#[derive(Parser)]
#[command(
    name = "delphi",
    version,
    about = "Exact AR(p) fitting and forecasting"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Fit an AR(p) model to an observed series.
    Fit(FitArgs),
    /// Fit an AR(p) model and forecast future values.
    Forecast(ForecastArgs),
}

/// Arguments for the `fit` subcommand.
#[derive(clap::Args)]
pub struct FitArgs {
    /// Path to the input series: one value per line, `#` starts a comment.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Model order. Overrides [fit].order from the config file.
    #[arg(short = 'p', long)]
    pub order: Option<usize>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Relative singularity tolerance. Overrides [fit].tolerance.
    #[arg(long)]
    pub tolerance: Option<f64>,
}

/// Arguments for the `forecast` subcommand.
#[derive(clap::Args)]
pub struct ForecastArgs {
    /// Path to the input series: one value per line, `#` starts a comment.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Model order. Overrides [fit].order from the config file.
    #[arg(short = 'p', long)]
    pub order: Option<usize>,

    /// Number of steps to forecast. Overrides [forecast].horizon.
    #[arg(short = 'n', long)]
    pub steps: Option<usize>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Relative singularity tolerance. Overrides [fit].tolerance.
    #[arg(long)]
    pub tolerance: Option<f64>,
}
