//! Draw detection logic for tic-tac-toe.

use super::super::Board;

/// Checks if the board is full (all squares occupied).
///
/// A full board is only a tie when no line is complete; [`super::evaluate`]
/// checks lines first.
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Outcome, evaluate};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX OXX OXO".parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(evaluate(&board), Outcome::Tie);
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board: Board = "XXX OOX OXO".parse().unwrap();
        assert!(is_full(&board));
        assert_ne!(evaluate(&board), Outcome::Tie);
    }

    #[test]
    fn test_not_draw_if_squares_left() {
        let board: Board = "XOX OX_ OXO".parse().unwrap();
        assert!(!is_full(&board));
        assert_eq!(evaluate(&board), Outcome::InProgress);
    }
}
