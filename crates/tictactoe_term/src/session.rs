//! Interactive game loop over a line-oriented input.

use crate::command::{Command, HELP};
use crate::terminal::TerminalPresenter;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe_core::{GameEngine, IndexSource, Mode, Outcome};
use tracing::{debug, info, instrument};

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Stop.
    Quit,
}

/// A terminal game session: engine plus command dispatch.
pub struct Session<W: Write, S: IndexSource> {
    engine: GameEngine<TerminalPresenter<W>, S>,
}

impl<W: Write, S: IndexSource> Session<W, S> {
    /// Wraps a configured engine.
    pub fn new(engine: GameEngine<TerminalPresenter<W>, S>) -> Self {
        Self { engine }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine<TerminalPresenter<W>, S> {
        &self.engine
    }

    /// Consumes the session, returning the engine.
    pub fn into_engine(self) -> GameEngine<TerminalPresenter<W>, S> {
        self.engine
    }

    /// Executes one command.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> Flow {
        match command {
            Command::Place(index) => {
                if let Err(err) = self.engine.apply_move(index) {
                    debug!(%err, "Move ignored");
                    self.engine.presenter_mut().notice(&err.to_string());
                }
            }
            Command::Reset => self.engine.reset(),
            Command::SetMode { mode, human } => {
                let label = match mode {
                    Mode::TwoPlayer => "Two-player mode".to_string(),
                    Mode::SinglePlayerVsAi => format!("Playing the AI as {}", human),
                };
                self.engine.presenter_mut().notice(&label);
                self.engine.set_mode(mode, human);
            }
            Command::SetName { mark, name } => {
                self.engine.presenter_mut().set_name(mark, name);
            }
            Command::Show => self.engine.redraw(),
            Command::Help => self.engine.presenter_mut().notice(HELP),
            Command::Quit => {
                info!("Player quit");
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    /// Prompt text for the current state.
    pub fn status(&self) -> String {
        match self.engine.evaluate() {
            Outcome::InProgress => format!("{} to move", self.engine.to_move()),
            Outcome::Win { .. } | Outcome::Tie => "Game over, r to play again".to_string(),
        }
    }

    /// Reads commands until `q` or end of input.
    ///
    /// # Errors
    ///
    /// Fails only when reading the input fails.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        self.engine.presenter_mut().notice(HELP);
        self.engine.redraw();

        let mut lines = input.lines();
        loop {
            let status = self.status();
            self.engine.presenter_mut().prompt(&status);

            let Some(line) = lines.next() else {
                debug!("End of input");
                break;
            };
            let line = line.context("Failed to read command")?;
            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Ok(command) => {
                    if self.handle(command) == Flow::Quit {
                        break;
                    }
                }
                Err(err) => self.engine.presenter_mut().notice(&err.to_string()),
            }
        }
        Ok(())
    }
}
