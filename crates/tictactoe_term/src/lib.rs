//! Terminal front end for the tic-tac-toe engine.
//!
//! Reads commands line by line, drives a [`tictactoe_core::GameEngine`], and
//! prints the board through [`TerminalPresenter`].
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameEngine, PlayerNames, ScriptedIndexSource};
//! use tictactoe_term::{Session, TerminalPresenter};
//!
//! let presenter = TerminalPresenter::new(Vec::new(), PlayerNames::default());
//! let mut session = Session::new(GameEngine::new(presenter, ScriptedIndexSource::default()));
//! session.run("5\n1\nq\n".as_bytes()).unwrap();
//! assert_eq!(session.engine().board().occupied(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod command;
mod config;
mod session;
mod terminal;

pub use cli::{Cli, parse_mark};
pub use command::{Command, CommandError, HELP};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, ENV_PLAYER_O, ENV_PLAYER_X, GameConfig};
pub use session::{Flow, Session};
pub use terminal::{TerminalPresenter, board_text};
