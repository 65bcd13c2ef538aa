//! Pure tic-tac-toe game logic.
//!
//! A single synchronous [`GameEngine`] owns the board, the turn order and
//! the mode. A presentation layer drives it through [`GameEngine::apply_move`],
//! [`GameEngine::set_mode`] and [`GameEngine::reset`], and receives render
//! and announce commands through the [`Presenter`] trait.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Square`], [`Board`], [`Position`]
//! - **Rules**: pure win/tie evaluation over a board ([`evaluate`])
//! - **Engine**: turn alternation, move guards, AI delegation
//! - **Picker**: injectable [`IndexSource`] behind the random-move AI
//! - **Invariants**: properties asserted after every move in debug builds

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod invariants;
mod mode;
mod picker;
mod position;
mod presenter;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use engine::GameEngine;
pub use invariants::{
    AlternatingTurnInvariant, EngineInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MarkBalanceInvariant,
};
pub use mode::{Mode, PlayerNames};
pub use picker::{IndexSource, RngIndexSource, ScriptedIndexSource};
pub use position::Position;
pub use presenter::{Presenter, PresenterEvent, RecordingPresenter};
pub use rules::{LINES, Line, Outcome, evaluate, is_full, winning_line};
pub use types::{Board, BoardParseError, Mark, Square, TurnState};
