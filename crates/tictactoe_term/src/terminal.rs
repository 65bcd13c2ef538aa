//! Line-based rendering of the board and messages.

use std::io::Write;
use tictactoe_core::{Board, Line, Mark, PlayerNames, Position, Presenter, Square};
use tracing::warn;

/// Presenter writing plain text to any writer.
///
/// Winning squares are drawn in brackets, empty squares show the number
/// to type to play there.
#[derive(Debug)]
pub struct TerminalPresenter<W: Write> {
    out: W,
    names: PlayerNames,
}

impl<W: Write> TerminalPresenter<W> {
    /// Creates a presenter writing to `out`.
    pub fn new(out: W, names: PlayerNames) -> Self {
        Self { out, names }
    }

    /// Sets the display name for `mark`.
    pub fn set_name(&mut self, mark: Mark, name: impl Into<String>) {
        let name = Some(name.into());
        match mark {
            Mark::X => self.names.x = name,
            Mark::O => self.names.o = name,
        }
    }

    /// Prints an informational line.
    pub fn notice(&mut self, message: &str) {
        self.write_line(message);
    }

    /// Prints a prompt without a newline.
    pub fn prompt(&mut self, status: &str) {
        let result = write!(self.out, "{}> ", status).and_then(|()| self.out.flush());
        if let Err(err) = result {
            warn!(%err, "Failed to write prompt");
        }
    }

    /// Returns the writer.
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Consumes the presenter, returning the writer.
    pub fn into_writer(self) -> W {
        self.out
    }

    fn write_line(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{}", text) {
            warn!(%err, "Failed to write to terminal");
        }
    }
}

/// Text grid for `board`, bracketing squares on `highlight`.
pub fn board_text(board: &Board, highlight: Option<Line>) -> String {
    let rows: Vec<String> = Position::ALL
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|&pos| {
                    let symbol = match board.get(pos) {
                        Square::Empty => (pos.to_index() + 1).to_string(),
                        Square::Occupied(mark) => mark.to_string(),
                    };
                    if highlight.is_some_and(|line| line.contains(pos)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn render(&mut self, board: &Board, highlight: Option<Line>) {
        let text = board_text(board, highlight);
        self.write_line("");
        self.write_line(&text);
        self.write_line("");
    }

    fn announce(&mut self, message: &str) {
        self.write_line(message);
    }

    fn player_names(&self) -> PlayerNames {
        self.names.clone()
    }
}
