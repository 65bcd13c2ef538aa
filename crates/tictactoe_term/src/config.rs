//! Game configuration: defaults, TOML file, environment, then CLI flags.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::{Mark, Mode, PlayerNames};
use tracing::{debug, info, instrument};

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Environment variable naming X.
pub const ENV_PLAYER_X: &str = "TICTACTOE_PLAYER_X";

/// Environment variable naming O.
pub const ENV_PLAYER_O: &str = "TICTACTOE_PLAYER_O";

/// Settings for one terminal session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Two players or against the AI.
    #[serde(default)]
    mode: Mode,

    /// Mark the human plays against the AI.
    #[serde(default = "default_human_mark")]
    human_mark: Mark,

    /// Display name for X.
    #[serde(default)]
    #[setters(strip_option, into)]
    player_x_name: Option<String>,

    /// Display name for O.
    #[serde(default)]
    #[setters(strip_option, into)]
    player_o_name: Option<String>,

    /// Seed for the AI; entropy when absent.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,
}

fn default_human_mark() -> Mark {
    Mark::X
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            human_mark: default_human_mark(),
            player_x_name: None,
            player_o_name: None,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = ?config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Reads `path`, or [`DEFAULT_CONFIG_FILE`] when present, or defaults.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file is not.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies player names from the process environment.
    pub fn apply_env(self) -> Self {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Applies player names from `lookup`, ignoring blank values.
    pub fn apply_vars(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = self;
        if let Some(name) = present(ENV_PLAYER_X) {
            config = config.with_player_x_name(name);
        }
        if let Some(name) = present(ENV_PLAYER_O) {
            config = config.with_player_o_name(name);
        }
        config
    }

    /// Applies command-line flags, which take precedence over everything.
    pub fn apply_cli(self, cli: &Cli) -> Self {
        let mut config = self;
        if let Some(mode) = cli.mode.as_deref() {
            config = config.with_mode(Mode::from_selection(mode));
        }
        if let Some(mark) = cli.human {
            config = config.with_human_mark(mark);
        }
        if let Some(name) = cli.player_x.clone() {
            config = config.with_player_x_name(name);
        }
        if let Some(name) = cli.player_o.clone() {
            config = config.with_player_o_name(name);
        }
        if let Some(seed) = cli.seed {
            config = config.with_seed(seed);
        }
        config
    }

    /// File, environment and flags, in increasing precedence.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let config = Self::load(cli.config.as_deref())?.apply_env().apply_cli(cli);
        debug!(?config, "Resolved configuration");
        Ok(config)
    }

    /// Names handed to the presenter.
    pub fn player_names(&self) -> PlayerNames {
        PlayerNames {
            x: self.player_x_name.clone(),
            o: self.player_o_name.clone(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.mode(), &Mode::TwoPlayer);
        assert_eq!(config.human_mark(), &Mark::X);
        assert_eq!(config.seed(), &None);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: GameConfig = toml::from_str("mode = \"ai\"\nseed = 3\n").unwrap();
        assert_eq!(config.mode(), &Mode::SinglePlayerVsAi);
        assert_eq!(config.human_mark(), &Mark::X);
        assert_eq!(config.seed(), &Some(3));
    }

    #[test]
    fn test_env_names_applied() {
        let config = GameConfig::default().apply_vars(|key| match key {
            ENV_PLAYER_X => Some("Ada".to_string()),
            ENV_PLAYER_O => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.player_x_name().as_deref(), Some("Ada"));
        assert_eq!(config.player_o_name(), &None);
    }

    #[test]
    fn test_cli_overrides_file() {
        let file: GameConfig =
            toml::from_str("mode = \"twoPlayers\"\nplayer_x_name = \"File\"\n").unwrap();
        let cli = Cli {
            mode: Some("ai".to_string()),
            human: Some(Mark::O),
            player_x: Some("Flag".to_string()),
            ..Cli::default()
        };
        let config = file.apply_cli(&cli);
        assert_eq!(config.mode(), &Mode::SinglePlayerVsAi);
        assert_eq!(config.human_mark(), &Mark::O);
        assert_eq!(config.player_x_name().as_deref(), Some("Flag"));
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::new("boom".to_string());
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}
