//! Warns about touching a piece the engine has no use for.

use crate::evaluation::EvalLine;
use chess_core::{Board, Color, Square};

/// True when `square` holds a piece of the side to move that starts none of
/// the engine's lines. Always false while no lines are known.
pub fn is_unsupported_piece(square: Square, board: &Board, turn: Color, lines: &[EvalLine]) -> bool {
    let Some(piece) = board.get(square) else {
        return false;
    };
    if piece.color != turn || lines.is_empty() {
        return false;
    }
    !lines
        .iter()
        .filter_map(EvalLine::best_move)
        .any(|mv| mv.from == square)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Evaluation;
    use chess_core::{Move, Position, STARTPOS};

    fn line(pv: &str) -> EvalLine {
        EvalLine {
            depth: 15,
            evaluation: Evaluation::Centipawns(20),
            pv: Move::parse_list(pv),
        }
    }

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn test_guard() {
        let board = Position::from_fen(STARTPOS).unwrap().board;
        let lines = vec![line("e2e4 e7e5"), line("g1f3 d7d5"), line("d2d4")];

        assert!(!is_unsupported_piece(sq("e2"), &board, Color::White, &lines));
        assert!(!is_unsupported_piece(sq("g1"), &board, Color::White, &lines));
        assert!(is_unsupported_piece(sq("a2"), &board, Color::White, &lines));
        assert!(is_unsupported_piece(sq("h1"), &board, Color::White, &lines));
    }

    #[test]
    fn test_guard_ignores_empty_and_opponent_squares() {
        let board = Position::from_fen(STARTPOS).unwrap().board;
        let lines = vec![line("e2e4")];

        assert!(!is_unsupported_piece(sq("e4"), &board, Color::White, &lines));
        assert!(!is_unsupported_piece(sq("a7"), &board, Color::White, &lines));
        assert!(!is_unsupported_piece(sq("a2"), &board, Color::White, &[]));
    }
}
