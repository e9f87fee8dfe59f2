//! Command-line definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Decode optimized fuzzy membership parameters and evaluate predictions.
#[derive(Debug, Parser)]
#[command(name = "fuzzyeval")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (TOML or JSON)
    #[arg(short, long, global = true, env = "FUZZYEVAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory for generated artifacts
    #[arg(short, long, global = true, default_value = "results")]
    pub output: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decode a chromosome file and export membership curves
    Membership(MembershipArgs),

    /// Evaluate a prediction dataset against ground truth
    Analyze(AnalyzeArgs),
}

/// Arguments for the membership command.
#[derive(Debug, Parser)]
pub struct MembershipArgs {
    /// Gene file written by the optimizer
    #[arg(default_value = "results/optimized_params.txt")]
    pub genes: PathBuf,

    /// Samples per variable (overrides configuration)
    #[arg(short, long)]
    pub points: Option<usize>,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Prediction CSV with Expected, Predicted, Error, AbsError and feature columns
    #[arg(default_value = "results/predictions.csv")]
    pub predictions: PathBuf,
}
