//! Tests for the terminal game loop.

use tictactoe_core::{GameEngine, Mark, Mode, PlayerNames, Position, ScriptedIndexSource, Square};
use tictactoe_term::{Command, Flow, Session, TerminalPresenter};

type TestSession = Session<Vec<u8>, ScriptedIndexSource>;

fn session(names: PlayerNames, script: &[usize]) -> TestSession {
    let presenter = TerminalPresenter::new(Vec::new(), names);
    let engine = GameEngine::new(presenter, ScriptedIndexSource::new(script.to_vec()));
    Session::new(engine)
}

fn output(session: TestSession) -> String {
    let writer = session.into_engine().into_presenter().into_writer();
    String::from_utf8(writer).unwrap()
}

#[test]
fn test_two_player_win_announced() {
    let mut session = session(PlayerNames::default(), &[]);
    session.run("1\n2\n4\n5\n7\n".as_bytes()).unwrap();

    assert!(!session.engine().is_active());
    let out = output(session);
    assert!(out.contains("Player X wins!"));
    assert!(out.contains("[X]"));
    assert!(out.contains("Game over, r to play again> "));
}

#[test]
fn test_named_winner() {
    let mut session = session(PlayerNames::default(), &[]);
    session
        .run("n x Ada\n1\n2\n4\n5\n7\n".as_bytes())
        .unwrap();
    assert!(output(session).contains("Ada wins!"));
}

#[test]
fn test_rejections_are_reported_and_ignored() {
    let mut session = session(PlayerNames::default(), &[]);
    session.run("5\n5\n12\nfly\n".as_bytes()).unwrap();

    assert_eq!(session.engine().board().occupied(), 1);
    assert_eq!(session.engine().to_move(), Mark::O);
    let out = output(session);
    assert!(out.contains("Square Center is already occupied"));
    assert!(out.contains("Squares are numbered 1-9, got 12"));
    assert!(out.contains("Unknown command \"fly\""));
}

#[test]
fn test_ai_mode_switch_and_reply() {
    let mut session = session(PlayerNames::default(), &[0]);
    session.run("m ai\n5\n".as_bytes()).unwrap();

    let engine = session.engine();
    assert_eq!(engine.mode(), Mode::SinglePlayerVsAi);
    assert_eq!(engine.board().occupied(), 2);
    assert_eq!(engine.board().get(Position::TopLeft), Square::Occupied(Mark::O));
    assert_eq!(engine.to_move(), Mark::X);
}

#[test]
fn test_reset_command() {
    let mut session = session(PlayerNames::default(), &[]);
    session.run("1\n2\nr\n".as_bytes()).unwrap();
    assert_eq!(session.engine().board().occupied(), 0);
    assert_eq!(session.engine().to_move(), Mark::X);
}

#[test]
fn test_quit_stops_reading() {
    let mut session = session(PlayerNames::default(), &[]);
    session.run("1\nq\n2\n".as_bytes()).unwrap();
    assert_eq!(session.engine().board().occupied(), 1);
}

#[test]
fn test_handle_returns_flow() {
    let mut session = session(PlayerNames::default(), &[]);
    assert_eq!(session.handle(Command::Place(4)), Flow::Continue);
    assert_eq!(session.handle(Command::Quit), Flow::Quit);
    assert_eq!(session.status(), "O to move");
}
