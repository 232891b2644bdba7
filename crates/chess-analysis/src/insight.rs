//! Short explanations for mistakes and blunders.

use chess_core::{uci_to_san, Board, Color, Move};
use std::fmt;

/// What the player was probably trying to do, relative to the engine's move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insight {
    /// Moved the right piece to the wrong square.
    RightPiece { best_san: String },
    /// Aimed at the right square with the wrong piece.
    RightSquare { best_san: String },
    /// The played move is in the engine's line, just later.
    WrongOrder { best_san: String },
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Insight::RightPiece { best_san } => {
                write!(f, "Right piece, wrong square: play {}", best_san)
            }
            Insight::RightSquare { best_san } => {
                write!(f, "Right square, wrong piece: play {}", best_san)
            }
            Insight::WrongOrder { best_san } => write!(f, "{} first, then your idea", best_san),
        }
    }
}

/// Compares the played move with the engine's line from the same position.
///
/// `board` and `turn` describe the position before the move; `best_pv` is the
/// engine's top line there. Only the mover's own future moves (even indices
/// from 2) are searched for the played move.
pub fn detect_insight(
    played: Move,
    best_pv: &[Move],
    board: &Board,
    turn: Color,
) -> Option<Insight> {
    let best = *best_pv.first()?;
    let best_san = || uci_to_san(best, board, turn);

    if played.from == best.from && played.to != best.to {
        return Some(Insight::RightPiece {
            best_san: best_san(),
        });
    }

    if played.to == best.to && played.from != best.from {
        return Some(Insight::RightSquare {
            best_san: best_san(),
        });
    }

    best_pv
        .iter()
        .skip(2)
        .step_by(2)
        .any(|&m| m == played)
        .then(|| Insight::WrongOrder {
            best_san: best_san(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Position;

    fn detect(played: &str, pv: &str) -> Option<String> {
        let pos = Position::starting();
        detect_insight(
            Move::from_uci(played).unwrap(),
            &Move::parse_list(pv),
            &pos.board,
            pos.side_to_move,
        )
        .map(|i| i.to_string())
    }

    #[test]
    fn test_right_piece_wrong_square() {
        assert_eq!(
            detect("g1h3", "g1f3 d7d5"),
            Some("Right piece, wrong square: play Nf3".to_string())
        );
    }

    #[test]
    fn test_right_square_wrong_piece() {
        let pos =
            Position::from_fen("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2")
                .unwrap();
        let insight = detect_insight(
            Move::from_uci("d1f3").unwrap(),
            &Move::parse_list("g1f3 b8c6"),
            &pos.board,
            pos.side_to_move,
        );
        assert_eq!(
            insight.map(|i| i.to_string()).as_deref(),
            Some("Right square, wrong piece: play Nf3")
        );
    }

    #[test]
    fn test_unrelated_move_has_no_insight() {
        assert_eq!(detect("a2a3", "e2e4 e7e5 g1f3"), None);
    }

    #[test]
    fn test_right_idea_wrong_order() {
        assert_eq!(
            detect("g1f3", "e2e4 e7e5 g1f3 b8c6"),
            Some("e4 first, then your idea".to_string())
        );
        // An opponent reply at an odd index does not count.
        assert_eq!(detect("e7e5", "e2e4 e7e5"), None);
    }

    #[test]
    fn test_no_engine_line_no_insight() {
        assert_eq!(detect("e2e4", ""), None);
    }
}
