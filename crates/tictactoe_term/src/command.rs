//! Line commands typed at the game prompt.

use crate::cli::parse_mark;
use derive_more::Display;
use tictactoe_core::{Mark, Mode, Position};

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  1-9             place your mark (squares are numbered left to right, top to bottom)
  center, ...     place by square name
  r               start a new game
  m two           two-player mode
  m ai [x|o]      play the AI (as x unless o is given)
  n x|o NAME      set a player's display name
  s               show the board
  h               this help
  q               quit";

/// A parsed prompt command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place the current mark at a board index (0-8).
    Place(usize),
    /// Start a new game.
    Reset,
    /// Change mode; `human` is the mark the human plays against the AI.
    SetMode {
        /// New mode.
        mode: Mode,
        /// Human's mark.
        human: Mark,
    },
    /// Set a display name.
    SetName {
        /// Mark being named.
        mark: Mark,
        /// The name.
        name: String,
    },
    /// Redraw the board and status.
    Show,
    /// Print help.
    Help,
    /// Leave the game.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CommandError {
    /// Nothing recognizable.
    #[display("Unknown command {:?} (h for help)", _0)]
    Unknown(String),
    /// Square number outside 1-9.
    #[display("Squares are numbered 1-9, got {}", _0)]
    BadSquare(usize),
    /// Mark argument not x or o.
    #[display("Expected x or o, got {:?}", _0)]
    BadMark(String),
    /// A command is missing an argument.
    #[display("Usage: {}", _0)]
    Usage(&'static str),
}

impl std::error::Error for CommandError {}

impl Command {
    /// Parses one input line.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Unknown(String::new()));
        };
        let rest: Vec<&str> = words.collect();

        if let Ok(number) = head.parse::<usize>() {
            return match number {
                1..=9 => Ok(Command::Place(number - 1)),
                _ => Err(CommandError::BadSquare(number)),
            };
        }

        match head.to_lowercase().as_str() {
            "q" | "quit" | "exit" => Ok(Command::Quit),
            "r" | "reset" | "restart" => Ok(Command::Reset),
            "s" | "show" => Ok(Command::Show),
            "h" | "help" | "?" => Ok(Command::Help),
            "m" | "mode" => parse_mode(&rest),
            "n" | "name" => parse_name(&rest),
            _ => Position::from_label_or_index(line)
                .map(|pos| Command::Place(pos.to_index()))
                .ok_or_else(|| CommandError::Unknown(line.trim().to_string())),
        }
    }
}

fn parse_mode(args: &[&str]) -> Result<Command, CommandError> {
    let Some(selection) = args.first() else {
        return Err(CommandError::Usage("m two | m ai [x|o]"));
    };
    let selection = match *selection {
        "two" | "2" => "twoPlayers",
        other => other,
    };
    let human = match args.get(1) {
        Some(mark) => parse_mark(mark).map_err(|_| CommandError::BadMark(mark.to_string()))?,
        None => Mark::X,
    };
    Ok(Command::SetMode {
        mode: Mode::from_selection(selection),
        human,
    })
}

fn parse_name(args: &[&str]) -> Result<Command, CommandError> {
    let [mark, name @ ..] = args else {
        return Err(CommandError::Usage("n x|o NAME"));
    };
    if name.is_empty() {
        return Err(CommandError::Usage("n x|o NAME"));
    }
    let mark = parse_mark(mark).map_err(|_| CommandError::BadMark(mark.to_string()))?;
    Ok(Command::SetName {
        mark,
        name: name.join(" "),
    })
}
