//! Presentation-layer boundary.
//!
//! The engine pushes board snapshots and result messages through
//! [`Presenter`]; it never reads UI state except player names, and only
//! when announcing a two-player win.

use super::{Board, Line, PlayerNames};

/// Receiver for render and announce commands.
pub trait Presenter {
    /// Draws the board. `highlight` is the winning line, if any.
    fn render(&mut self, board: &Board, highlight: Option<Line>);

    /// Shows a result message such as `"Player X wins!"`.
    fn announce(&mut self, message: &str);

    /// Current display names for X and O.
    fn player_names(&self) -> PlayerNames;
}

/// One call made on a [`RecordingPresenter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterEvent {
    /// `render` was called.
    Render {
        /// Board snapshot.
        board: Board,
        /// Highlighted line.
        highlight: Option<Line>,
    },
    /// `announce` was called.
    Announce(String),
}

/// Presenter that keeps every call for later inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    names: PlayerNames,
    events: Vec<PresenterEvent>,
}

impl RecordingPresenter {
    /// Creates a recorder with no player names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder reporting the given names.
    pub fn with_names(names: PlayerNames) -> Self {
        Self {
            names,
            events: Vec::new(),
        }
    }

    /// All recorded calls in order.
    pub fn events(&self) -> &[PresenterEvent] {
        &self.events
    }

    /// Announced messages in order.
    pub fn announcements(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PresenterEvent::Announce(msg) => Some(msg.as_str()),
                PresenterEvent::Render { .. } => None,
            })
            .collect()
    }

    /// Number of render calls.
    pub fn render_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, PresenterEvent::Render { .. }))
            .count()
    }

    /// Most recent render call.
    pub fn last_render(&self) -> Option<(&Board, Option<Line>)> {
        self.events.iter().rev().find_map(|e| match e {
            PresenterEvent::Render { board, highlight } => Some((board, *highlight)),
            PresenterEvent::Announce(_) => None,
        })
    }
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, board: &Board, highlight: Option<Line>) {
        self.events.push(PresenterEvent::Render {
            board: board.clone(),
            highlight,
        });
    }

    fn announce(&mut self, message: &str) {
        self.events.push(PresenterEvent::Announce(message.to_string()));
    }

    fn player_names(&self) -> PlayerNames {
        self.names.clone()
    }
}
