//! Quarto - terminal shell
//!
//! Plays one game over stdin/stdout. Logs go to stderr.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_quarto_cli::{Cli, GameConfig, Shell};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

/// Builds the game described by `cli` and plays it on the terminal.
#[instrument(skip(cli), fields(board = %cli.board))]
fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    }
    .with_seed(cli.seed);

    let game = config.build(cli.board)?;
    info!(
        rows = game.board().rows(),
        columns = game.board().columns(),
        tokens = game.board().token_count(),
        "Starting Quarto"
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(game).run(stdin.lock(), stdout.lock())?;
    Ok(())
}
