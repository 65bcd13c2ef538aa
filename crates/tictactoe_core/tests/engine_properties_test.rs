//! Whole-game properties of the engine over random move orders.

use proptest::prelude::*;
use proptest::sample::Index;
use tictactoe_core::{
    EngineInvariants, GameEngine, IndexSource, InvariantSet, Mark, Mode, MoveError, Outcome,
    RecordingPresenter, RngIndexSource, ScriptedIndexSource,
};

/// Plays the human's next square, chosen among the empty ones by `pick`.
fn human_index<S: IndexSource>(engine: &GameEngine<RecordingPresenter, S>, pick: Index) -> usize {
    let empty = engine.board().empty_positions();
    empty[pick.index(empty.len())].to_index()
}

/// Every square is refused once the game is over, and nothing changes.
fn assert_all_rejected<S: IndexSource>(
    engine: &mut GameEngine<RecordingPresenter, S>,
) -> Result<(), TestCaseError> {
    let board = engine.board().clone();
    let events = engine.presenter().events().len();
    for index in 0..9 {
        prop_assert_eq!(engine.apply_move(index), Err(MoveError::GameOver));
    }
    prop_assert_eq!(engine.board(), &board);
    prop_assert_eq!(engine.presenter().events().len(), events);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn test_ai_games_grow_by_reply(
        seed in any::<u64>(),
        human_o in any::<bool>(),
        picks in prop::collection::vec(any::<Index>(), 9),
    ) {
        let human = if human_o { Mark::O } else { Mark::X };
        let mut engine = GameEngine::new(RecordingPresenter::new(), RngIndexSource::seeded(seed));
        engine.set_mode(Mode::SinglePlayerVsAi, human);

        // The AI opens when it holds X.
        prop_assert_eq!(engine.board().occupied(), usize::from(human_o));
        prop_assert_eq!(engine.to_move(), human);

        for &pick in &picks {
            if !engine.is_active() {
                break;
            }
            let before = engine.board().occupied();
            let index = human_index(&engine, pick);
            prop_assert!(engine.apply_move(index).is_ok());

            let ai_replied = engine.history().last().map(|m| m.mark) == Some(human.opponent());
            let grown = engine.board().occupied() - before;
            prop_assert_eq!(grown, if ai_replied { 2 } else { 1 });
            prop_assert_eq!(engine.history().len(), engine.board().occupied());
            prop_assert!(EngineInvariants::check_all(&engine).is_ok());
            if !ai_replied {
                prop_assert!(!engine.is_active());
            }
            if engine.is_active() {
                prop_assert_eq!(engine.to_move(), human);
            }
        }

        prop_assert!(!engine.is_active());
        let expected = match engine.evaluate() {
            Outcome::Win { mark, .. } if mark == human => "User wins!",
            Outcome::Win { .. } => "AI wins!",
            Outcome::Tie => "It's a tie!",
            Outcome::InProgress => return Err(TestCaseError::fail("game left unfinished")),
        };
        prop_assert_eq!(engine.presenter().announcements(), vec![expected]);

        assert_all_rejected(&mut engine)?;
        prop_assert_eq!(engine.ai_move(), Err(MoveError::GameOver));
    }

    #[test]
    fn test_two_player_games_grow_by_one(
        picks in prop::collection::vec(any::<Index>(), 9),
    ) {
        let mut engine = GameEngine::new(RecordingPresenter::new(), ScriptedIndexSource::default());

        for (played, &pick) in picks.iter().enumerate() {
            if !engine.is_active() {
                break;
            }
            let mark = engine.to_move();
            let index = human_index(&engine, pick);
            prop_assert!(engine.apply_move(index).is_ok());

            prop_assert_eq!(engine.board().occupied(), played + 1);
            prop_assert_eq!(engine.to_move(), mark.opponent());
            prop_assert!(EngineInvariants::check_all(&engine).is_ok());
        }

        prop_assert!(!engine.is_active());
        let expected = match engine.evaluate() {
            Outcome::Win { mark: Mark::X, .. } => "Player X wins!",
            Outcome::Win { mark: Mark::O, .. } => "Player O wins!",
            Outcome::Tie => "It's a tie!",
            Outcome::InProgress => return Err(TestCaseError::fail("game left unfinished")),
        };
        prop_assert_eq!(engine.presenter().announcements(), vec![expected]);

        assert_all_rejected(&mut engine)?;
    }
}
