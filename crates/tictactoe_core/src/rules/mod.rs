//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The engine calls [`evaluate`] after
//! every placed mark; nothing here touches turn order or mode.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, winning_line};

use super::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line complete and squares remain.
    InProgress,
    /// `mark` holds every square of `line`.
    Win {
        /// Winning mark.
        mark: Mark,
        /// First completed line in check order.
        line: Line,
    },
    /// Board full with no completed line.
    Tie,
}

impl Outcome {
    /// True for `Win` and `Tie`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Line to highlight, present only for a win.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Evaluates a board: first completed line wins, then a full board ties.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = winning_line(board) {
        return Outcome::Win { mark, line };
    }
    if is_full(board) {
        return Outcome::Tie;
    }
    Outcome::InProgress
}
