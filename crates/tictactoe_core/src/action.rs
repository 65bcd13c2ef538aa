//! Move records and move rejection reasons.

use super::{Mark, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move request was rejected.
///
/// A rejected request leaves the engine untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Index outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The game has already been won or tied.
    #[display("Game is already over")]
    GameOver,

    /// The square is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The mark due to move is played by the AI.
    #[display("It's not a human turn ({} is played by the AI)", _0)]
    NotYourTurn(Mark),

    /// The AI was asked to move outside single-player mode.
    #[display("No AI opponent in two-player mode")]
    NotAiMode,

    /// The AI was asked to move while a human mark is due.
    #[display("It's {}'s turn, not the AI's", _0)]
    NotAiTurn(Mark),

    /// No empty square is left.
    #[display("No empty squares remain")]
    NoEmptySquares,
}

impl std::error::Error for MoveError {}
