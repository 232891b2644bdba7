//! Standard Algebraic Notation (SAN) generation from coordinate moves.
//!
//! Conversion works on a bare [`Board`] without move generation, so check
//! and mate suffixes are never produced and disambiguation only considers
//! whether another piece could geometrically reach the destination.
//! Examples: "e4", "Nf3", "Bxc6", "O-O", "exd6", "e8=Q", "Nbd2", "R1e1"

use crate::{Board, Color, Move, PieceKind, Square};

/// Maximum number of half-moves rendered by [`pv_to_san`].
pub const MAX_PV_MOVES: usize = 8;

/// Converts a coordinate move to SAN given the board BEFORE the move.
///
/// If the origin square is empty the UCI text is returned unchanged.
pub fn uci_to_san(m: Move, board: &Board, side_to_move: Color) -> String {
    let Some(piece) = board.get(m.from) else {
        return m.to_uci();
    };

    let file_delta = m.from.file_delta(m.to);
    let is_capture = board.get(m.to).is_some();

    if piece.kind == PieceKind::King && file_delta.abs() == 2 {
        return if file_delta > 0 {
            "O-O".to_string()
        } else {
            "O-O-O".to_string()
        };
    }

    let mut san = String::new();

    if piece.kind == PieceKind::Pawn {
        // File-changing pawn moves are captures even onto an empty square.
        if is_capture || file_delta != 0 {
            san.push(m.from.file().to_char());
            san.push('x');
        }
        san.push_str(&m.to.to_algebraic());
        if let Some(kind) = m.promotion {
            san.push('=');
            san.push_str(kind.san_letter());
        }
        return san;
    }

    san.push_str(piece.kind.san_letter());
    san.push_str(&get_disambiguation(board, m, piece.kind, side_to_move));
    if is_capture {
        san.push('x');
    }
    san.push_str(&m.to.to_algebraic());
    san
}

/// Renders up to [`MAX_PV_MOVES`] moves of a principal variation as SAN,
/// playing each move on a scratch board and alternating the side to move.
pub fn pv_to_san(moves: &[Move], board: &Board, start_turn: Color) -> Vec<String> {
    let mut scratch = board.clone();
    let mut turn = start_turn;
    moves
        .iter()
        .take(MAX_PV_MOVES)
        .map(|&m| {
            let san = uci_to_san(m, &scratch, turn);
            scratch = scratch.apply_move(m);
            turn = turn.opposite();
            san
        })
        .collect()
}

/// Gets the disambiguation string for a non-pawn move: the origin file if no
/// rival shares it, else the origin rank if no rival shares that, else both.
fn get_disambiguation(board: &Board, m: Move, kind: PieceKind, color: Color) -> String {
    let rivals: Vec<Square> = board
        .find(kind, color)
        .into_iter()
        .filter(|&sq| sq != m.from && can_reach(kind, sq, m.to, board))
        .collect();

    if rivals.is_empty() {
        return String::new();
    }

    let file = m.from.file();
    let rank = m.from.rank();

    if !rivals.iter().any(|sq| sq.file() == file) {
        file.to_char().to_string()
    } else if !rivals.iter().any(|sq| sq.rank() == rank) {
        rank.to_char().to_string()
    } else {
        m.from.to_algebraic()
    }
}

/// Whether a piece of `kind` on `from` could move to `to`, ignoring pins and
/// checks. Sliders need every square strictly between to be empty.
fn can_reach(kind: PieceKind, from: Square, to: Square, board: &Board) -> bool {
    let (df, dr) = (from.file_delta(to), from.rank_delta(to));
    let (adf, adr) = (df.abs(), dr.abs());
    let moved = adf + adr > 0;

    match kind {
        PieceKind::Knight => (adf == 1 && adr == 2) || (adf == 2 && adr == 1),
        PieceKind::Bishop => adf == adr && moved && is_path_clear(from, to, board),
        PieceKind::Rook => (df == 0 || dr == 0) && moved && is_path_clear(from, to, board),
        PieceKind::Queen => {
            (adf == adr || df == 0 || dr == 0) && moved && is_path_clear(from, to, board)
        }
        PieceKind::King => adf <= 1 && adr <= 1 && moved,
        PieceKind::Pawn => false,
    }
}

fn is_path_clear(from: Square, to: Square, board: &Board) -> bool {
    let step_file = from.file_delta(to).signum();
    let step_rank = from.rank_delta(to).signum();

    let mut current = from.offset(step_file, step_rank);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if board.get(sq).is_some() {
            return false;
        }
        current = sq.offset(step_file, step_rank);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn pos(fen: &str) -> Position {
        Position::from_fen(fen).unwrap()
    }

    fn san(fen: &str, uci: &str) -> String {
        let p = pos(fen);
        uci_to_san(Move::from_uci(uci).unwrap(), &p.board, p.side_to_move)
    }

    #[test]
    fn pawn_moves() {
        assert_eq!(san(crate::STARTPOS, "e2e4"), "e4");
        assert_eq!(san("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1", "e4d5"), "exd5");
    }

    #[test]
    fn en_passant_is_written_as_capture() {
        assert_eq!(san("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1", "e5d6"), "exd6");
    }

    #[test]
    fn promotions() {
        assert_eq!(san("4k3/P7/8/8/8/8/8/4K3 w - - 0 1", "a7a8q"), "a8=Q");
        assert_eq!(san("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1", "a7b8n"), "axb8=N");
    }

    #[test]
    fn piece_moves_and_captures() {
        assert_eq!(san(crate::STARTPOS, "g1f3"), "Nf3");
        assert_eq!(
            san(
                "r1bqkbnr/pppp1ppp/2n5/1B2p3/4P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 3 3",
                "b5c6"
            ),
            "Bxc6"
        );
    }

    #[test]
    fn castling() {
        assert_eq!(san("4k3/8/8/8/8/8/8/4K2R w K - 0 1", "e1g1"), "O-O");
        assert_eq!(san("r3k3/8/8/8/8/8/8/4K3 b q - 0 1", "e8c8"), "O-O-O");
    }

    #[test]
    fn disambiguation_by_file() {
        // Knights on b1 and f3 can both reach d2.
        assert_eq!(san("4k3/8/8/8/8/5N2/8/1N2K3 w - - 0 1", "b1d2"), "Nbd2");
    }

    #[test]
    fn disambiguation_by_rank() {
        // Rooks on e1 and e5 can both reach e3.
        assert_eq!(san("k7/8/8/4R3/8/8/8/4R2K w - - 0 1", "e1e3"), "R1e3");
    }

    #[test]
    fn disambiguation_by_square() {
        // Rivals on h4 (same file) and a1 (same rank) both reach e1.
        assert_eq!(san("k7/8/8/8/7Q/8/8/Q6Q w - - 0 1", "h1e1"), "Qh1e1");
    }

    #[test]
    fn blocked_slider_needs_no_disambiguation() {
        // Rook on a1 is blocked by the knight on c1.
        assert_eq!(san("k7/8/8/8/8/8/8/R1N1R2K w - - 0 1", "e1d1"), "Rd1");
    }

    #[test]
    fn empty_origin_returns_uci() {
        assert_eq!(san(crate::STARTPOS, "e4e5"), "e4e5");
    }

    #[test]
    fn pv_alternates_sides_and_caps_length() {
        let p = Position::starting();
        let moves = Move::parse_list("e2e4 e7e5 g1f3 b8c6 f1b5 a7a6 b5c6 d7c6 e1g1 f7f6");
        let sans = pv_to_san(&moves, &p.board, Color::White);
        assert_eq!(
            sans,
            vec!["e4", "e5", "Nf3", "Nc6", "Bb5", "a6", "Bxc6", "dxc6"]
        );
    }

    #[test]
    fn pv_empty() {
        assert!(pv_to_san(&[], &Board::empty(), Color::White).is_empty());
    }
}
