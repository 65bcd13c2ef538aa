//! Game mode and winner naming.

use super::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Who supplies moves for the second mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    #[serde(rename = "twoPlayers")]
    TwoPlayer,
    /// One human against the random-move AI.
    #[serde(rename = "ai")]
    SinglePlayerVsAi,
}

impl Mode {
    /// Maps a mode selector value: `"twoPlayers"` is two-player, anything
    /// else plays against the AI.
    #[instrument]
    pub fn from_selection(value: &str) -> Self {
        if value == "twoPlayers" {
            Mode::TwoPlayer
        } else {
            Mode::SinglePlayerVsAi
        }
    }
}

/// Optional display names for X and O in two-player games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNames {
    /// Name for X.
    pub x: Option<String>,
    /// Name for O.
    pub o: Option<String>,
}

impl PlayerNames {
    /// Creates names for both marks.
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            x: Some(x.into()),
            o: Some(o.into()),
        }
    }

    /// Name for `mark`, falling back to `Player X` / `Player O` when blank.
    pub fn label(&self, mark: Mark) -> String {
        let name = match mark {
            Mark::X => self.x.as_deref(),
            Mark::O => self.o.as_deref(),
        };
        match name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Player {}", mark),
        }
    }
}
