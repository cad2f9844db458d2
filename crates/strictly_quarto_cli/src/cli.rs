//! Command-line interface for the quarto shell.

use clap::Parser;
use std::path::PathBuf;
use strictly_quarto::TopologyKind;

/// Quarto - place four alike in a line to win
#[derive(Parser, Debug)]
#[command(name = "quarto")]
#[command(about = "Play Quarto on a bounded or toroidal board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board type: standard (bounded) or torus (wraps around)
    pub board: TopologyKind,

    /// Path to a TOML game config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for properties beyond the fourth
    #[arg(long)]
    pub seed: Option<u64>,
}
