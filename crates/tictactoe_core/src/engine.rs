//! The game engine: board, turn order, mode, and the AI reply.
//!
//! One owned value drives the whole game. Every operation runs to
//! completion synchronously; when a human move hands the turn to the AI,
//! the AI reply happens inside the same call.
//!
//! ```
//! use tictactoe_core::{GameEngine, Mark, Mode, RecordingPresenter, ScriptedIndexSource};
//!
//! let mut engine = GameEngine::new(RecordingPresenter::new(), ScriptedIndexSource::new([0]));
//! engine.set_mode(Mode::SinglePlayerVsAi, Mark::X);
//! engine.apply_move(4).unwrap();
//! assert_eq!(engine.board().occupied(), 2);
//! assert_eq!(engine.to_move(), Mark::X);
//! ```

use super::invariants::{EngineInvariants, InvariantSet};
use super::picker::IndexSource;
use super::presenter::Presenter;
use super::rules::{self, Outcome};
use super::{Board, Mark, Mode, Move, MoveError, Position, Square, TurnState};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe state machine.
///
/// Owns the board, turn state, mode, and the per-game move log. Render and
/// announce commands go to `P`; the AI draws its choices from `S`.
#[derive(Debug)]
pub struct GameEngine<P, S> {
    board: Board,
    turn: TurnState,
    mode: Mode,
    ai_mark: Option<Mark>,
    history: Vec<Move>,
    presenter: P,
    source: S,
}

impl<P: Presenter, S: IndexSource> GameEngine<P, S> {
    /// Creates a fresh two-player game.
    pub fn new(presenter: P, source: S) -> Self {
        Self {
            board: Board::new(),
            turn: TurnState::new(),
            mode: Mode::TwoPlayer,
            ai_mark: None,
            history: Vec::new(),
            presenter,
            source,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Accessors
    // ─────────────────────────────────────────────────────────────

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark due to move next.
    pub fn to_move(&self) -> Mark {
        self.turn.to_move
    }

    /// Whether moves are accepted.
    pub fn is_active(&self) -> bool {
        self.turn.active
    }

    /// Turn state snapshot.
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Mark played by the AI, if the AI is enabled.
    pub fn ai_mark(&self) -> Option<Mark> {
        self.ai_mark
    }

    /// Moves made since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Returns the presenter mutably.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Consumes the engine, returning the presenter.
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Evaluates the current board.
    pub fn evaluate(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    /// Re-sends the current board to the presenter.
    pub fn redraw(&mut self) {
        let highlight = self.evaluate().line();
        self.presenter.render(&self.board, highlight);
    }

    // ─────────────────────────────────────────────────────────────
    //  Operations
    // ─────────────────────────────────────────────────────────────

    /// Switches mode.
    ///
    /// In single-player mode the AI plays `human_mark.opponent()`. If the
    /// game is live and the AI's mark is due, the AI moves at once. The
    /// board is left as it is.
    #[instrument(skip(self), fields(to_move = %self.turn.to_move))]
    pub fn set_mode(&mut self, mode: Mode, human_mark: Mark) {
        self.mode = mode;
        self.ai_mark = match mode {
            Mode::TwoPlayer => None,
            Mode::SinglePlayerVsAi => Some(human_mark.opponent()),
        };
        info!(?mode, ai_mark = ?self.ai_mark, "Mode changed");
        self.play_ai_turn();
    }

    /// Places the current mark at board index `index` (0-8).
    ///
    /// Rejected requests leave every piece of state unchanged. After an
    /// accepted move that hands the turn to the AI, the AI replies before
    /// this returns. The returned outcome reflects the board after that
    /// reply.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] for an index above 8
    /// - [`MoveError::GameOver`] once the game is won or tied
    /// - [`MoveError::NotYourTurn`] when the AI's mark is due
    /// - [`MoveError::SquareOccupied`] when the square is taken
    #[instrument(skip(self), fields(mark = %self.turn.to_move))]
    pub fn apply_move(&mut self, index: usize) -> Result<Outcome, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

        if !self.turn.active {
            debug!("Rejected: game over");
            return Err(MoveError::GameOver);
        }

        if self.ai_mark == Some(self.turn.to_move) {
            debug!("Rejected: AI's turn");
            return Err(MoveError::NotYourTurn(self.turn.to_move));
        }

        if !self.board.is_empty(pos) {
            debug!(%pos, "Rejected: square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        self.place(pos);
        self.play_ai_turn();
        Ok(self.evaluate())
    }

    /// Lets the AI place its mark on a uniformly chosen empty square.
    ///
    /// # Errors
    ///
    /// - [`MoveError::NotAiMode`] in two-player mode
    /// - [`MoveError::GameOver`] once the game is won or tied
    /// - [`MoveError::NotAiTurn`] when a human mark is due
    /// - [`MoveError::NoEmptySquares`] on a full board
    #[instrument(skip(self))]
    pub fn ai_move(&mut self) -> Result<Position, MoveError> {
        let ai_mark = match (self.mode, self.ai_mark) {
            (Mode::SinglePlayerVsAi, Some(mark)) => mark,
            _ => return Err(MoveError::NotAiMode),
        };

        if !self.turn.active {
            return Err(MoveError::GameOver);
        }

        if ai_mark != self.turn.to_move {
            return Err(MoveError::NotAiTurn(self.turn.to_move));
        }

        let empty = self.board.empty_positions();
        if empty.is_empty() {
            warn!("AI asked to move on a full board");
            return Err(MoveError::NoEmptySquares);
        }

        let pick = self.source.next_index(empty.len()).min(empty.len() - 1);
        let pos = empty[pick];
        debug!(%pos, candidates = empty.len(), "AI chose position");

        self.place(pos);
        Ok(pos)
    }

    /// Starts a new game, keeping mode and AI assignment.
    ///
    /// When the AI plays X it opens immediately.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = TurnState::new();
        self.history.clear();
        info!(mode = ?self.mode, "Game reset");

        self.presenter.render(&self.board, None);
        self.play_ai_turn();
    }

    // ─────────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────────

    /// Writes the current mark, renders, settles the outcome, passes the turn.
    fn place(&mut self, pos: Position) {
        let mark = self.turn.to_move;
        self.board.set(pos, Square::Occupied(mark));
        self.history.push(Move::new(mark, pos));

        let outcome = self.evaluate();
        self.presenter.render(&self.board, outcome.line());

        if outcome.is_terminal() {
            self.turn.active = false;
            let message = self.result_message(outcome.winner());
            info!(?outcome, %message, "Game over");
            self.presenter.announce(&message);
        }

        self.turn.to_move = mark.opponent();

        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "engine invariants violated after {} at {}",
            mark,
            pos
        );
    }

    /// Runs the AI if it is due.
    fn play_ai_turn(&mut self) {
        if self.turn.active && self.ai_mark == Some(self.turn.to_move) {
            if let Err(err) = self.ai_move() {
                debug!(%err, "AI did not move");
            }
        }
    }

    /// Text announced once the game is over: the winner, or a tie.
    fn result_message(&self, winner: Option<Mark>) -> String {
        match winner {
            Some(mark) => format!("{} wins!", self.winner_label(mark)),
            None => "It's a tie!".to_string(),
        }
    }

    /// `AI` / `User` against the AI, player names otherwise.
    fn winner_label(&self, mark: Mark) -> String {
        match self.ai_mark {
            Some(ai) if ai == mark => "AI".to_string(),
            Some(_) => "User".to_string(),
            None => self.presenter.player_names().label(mark),
        }
    }
}
