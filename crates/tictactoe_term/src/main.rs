//! Tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tictactoe_core::{GameEngine, RngIndexSource};
use tictactoe_term::{Cli, GameConfig, Session, TerminalPresenter};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = GameConfig::resolve(&cli).context("Failed to load configuration")?;
    run(config)
}

/// Logs go to stderr so stdout stays the game display.
fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

#[instrument(skip(config), fields(mode = ?config.mode(), human = %config.human_mark()))]
fn run(config: GameConfig) -> Result<()> {
    let source = match config.seed() {
        Some(seed) => RngIndexSource::seeded(*seed),
        None => RngIndexSource::from_entropy(),
    };
    let presenter = TerminalPresenter::new(io::stdout(), config.player_names());

    let mut engine = GameEngine::new(presenter, source);
    engine.set_mode(*config.mode(), *config.human_mark());
    info!("Starting terminal session");

    let mut session = Session::new(engine);
    session.run(io::stdin().lock())
}
