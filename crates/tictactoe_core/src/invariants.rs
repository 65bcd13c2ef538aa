//! Invariants of a running game.
//!
//! Logical properties that hold after every engine operation. The engine
//! asserts them in debug builds; tests can check them directly.

use super::engine::GameEngine;
use super::picker::IndexSource;
use super::presenter::Presenter;
use super::{Mark, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X count equals O count, or exceeds it by one.
pub struct MarkBalanceInvariant;

impl<P: Presenter, S: IndexSource> Invariant<GameEngine<P, S>> for MarkBalanceInvariant {
    fn holds(engine: &GameEngine<P, S>) -> bool {
        let x = engine.board().count(Mark::X);
        let o = engine.board().count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

/// Invariant: every logged move is on the board, and nothing else is.
pub struct HistoryConsistentInvariant;

impl<P: Presenter, S: IndexSource> Invariant<GameEngine<P, S>> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine<P, S>) -> bool {
        let board = engine.board();
        engine.history().len() == board.occupied()
            && engine
                .history()
                .iter()
                .all(|m| board.get(m.position) == Square::Occupied(m.mark))
    }

    fn description() -> &'static str {
        "Move log matches occupied squares"
    }
}

/// Invariant: marks alternate X, O, X, ... and the next mark follows suit.
pub struct AlternatingTurnInvariant;

impl<P: Presenter, S: IndexSource> Invariant<GameEngine<P, S>> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine<P, S>) -> bool {
        let history = engine.history();

        if history.first().is_some_and(|m| m.mark != Mark::X) {
            return false;
        }

        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        };
        engine.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    MarkBalanceInvariant,
    HistoryConsistentInvariant,
    AlternatingTurnInvariant,
);
