//! Material counting and sacrifice detection.

use chess_core::{Board, Color, Move, PieceKind};

/// Half-moves of the opponent's line replayed when sizing a sacrifice.
pub const SACRIFICE_HORIZON: usize = 6;

/// Relative piece values in pawns.
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight | PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

/// Material won by playing `mv` on `board`, counting en passant.
pub fn capture_value(board: &Board, mv: Move) -> i32 {
    if let Some(victim) = board.get(mv.to) {
        return piece_value(victim.kind);
    }
    match board.get(mv.from) {
        Some(p) if p.kind == PieceKind::Pawn && mv.from.file() != mv.to.file() => {
            piece_value(PieceKind::Pawn)
        }
        _ => 0,
    }
}

/// Net material the mover gives up along the opponent's expected line.
///
/// Replays up to [`SACRIFICE_HORIZON`] moves of `opponent_pv` on the board
/// after the mover's move, crediting each capture to the side that made it.
/// The mover's tally starts at `won_by_move`, the material the move itself
/// captured. A positive result means the opponent ends up ahead on material
/// won, i.e. the move sacrificed that much.
pub fn sacrifice_magnitude(
    board_after: &Board,
    opponent_pv: &[Move],
    mover: Color,
    won_by_move: i32,
) -> i32 {
    let mut board = board_after.clone();
    let mut captured = [0i32; 2];
    captured[mover.index()] = won_by_move;

    for &mv in opponent_pv.iter().take(SACRIFICE_HORIZON) {
        let Some(piece) = board.get(mv.from) else {
            break;
        };
        captured[piece.color.index()] += capture_value(&board, mv);
        board = board.apply_move(mv);
    }

    captured[mover.opposite().index()] - captured[mover.index()]
}
