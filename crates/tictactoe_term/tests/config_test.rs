//! Tests for loading configuration files.

use std::io::Write;
use tictactoe_core::{Mark, Mode};
use tictactoe_term::{Cli, GameConfig};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "mode = \"ai\"\nhuman_mark = \"O\"\nplayer_x_name = \"Ada\"\nseed = 11"
    )
    .unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.mode(), &Mode::SinglePlayerVsAi);
    assert_eq!(config.human_mark(), &Mark::O);
    assert_eq!(config.player_x_name().as_deref(), Some("Ada"));
    assert_eq!(config.seed(), &Some(11));
}

#[test]
fn test_lowercase_mark_accepted() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human_mark = \"o\"").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.human_mark(), &Mark::O);
    assert_eq!(config.mode(), &Mode::TwoPlayer);
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = GameConfig::load(Some(&path)).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mode = [").unwrap();
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_resolve_applies_flags_over_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mode = \"ai\"\nseed = 1").unwrap();

    let cli = Cli {
        config: Some(file.path().to_path_buf()),
        mode: Some("twoPlayers".to_string()),
        seed: Some(5),
        ..Cli::default()
    };
    let config = GameConfig::resolve(&cli).unwrap();
    assert_eq!(config.mode(), &Mode::TwoPlayer);
    assert_eq!(config.seed(), &Some(5));
}
