//! Command-line interface for the tic-tac-toe terminal.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_core::Mark;

/// Tic-tac-toe in the terminal, against a friend or a random-move AI
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with an optional random-move opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to tictactoe.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Game mode: "twoPlayers", or anything else to play the AI
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Mark the human plays against the AI (x or o)
    #[arg(long, value_parser = parse_mark)]
    pub human: Option<Mark>,

    /// Display name for X in two-player games
    #[arg(long)]
    pub player_x: Option<String>,

    /// Display name for O in two-player games
    #[arg(long)]
    pub player_o: Option<String>,

    /// Seed for the AI's choices (repeatable games)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Parses `x`/`X`/`o`/`O`.
pub fn parse_mark(value: &str) -> Result<Mark, String> {
    match value.trim() {
        "x" | "X" => Ok(Mark::X),
        "o" | "O" => Ok(Mark::O),
        other => Err(format!("expected x or o, got {:?}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "--mode",
            "ai",
            "--human",
            "o",
            "--seed",
            "9",
        ])
        .unwrap();
        assert_eq!(cli.mode.as_deref(), Some("ai"));
        assert_eq!(cli.human, Some(Mark::O));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_bad_mark_rejected() {
        assert!(Cli::try_parse_from(["tictactoe", "--human", "z"]).is_err());
    }
}
