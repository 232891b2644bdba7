//! Move inference by comparing two consecutive boards.

use crate::{Board, Color, Move, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy)]
struct Change {
    square: Square,
    piece: Piece,
}

/// Squares that differ between two boards, bucketed by how they changed.
#[derive(Debug, Default)]
struct BoardDelta {
    disappeared: Vec<Change>,
    appeared: Vec<Change>,
    /// Occupied before and after by a different piece; `piece` is the new one.
    replaced: Vec<Change>,
}

impl BoardDelta {
    fn between(prev: &Board, curr: &Board) -> Self {
        let mut delta = BoardDelta::default();
        for (row, (before, after)) in prev.rows().iter().zip(curr.rows()).enumerate() {
            for (col, (b, a)) in before.iter().zip(after).enumerate() {
                if b == a {
                    continue;
                }
                let Some(square) = Square::from_coords(col as i8, 7 - row as i8) else {
                    continue;
                };
                match (b, a) {
                    (Some(piece), None) => delta.disappeared.push(Change {
                        square,
                        piece: *piece,
                    }),
                    (None, Some(piece)) => delta.appeared.push(Change {
                        square,
                        piece: *piece,
                    }),
                    (Some(_), Some(piece)) => delta.replaced.push(Change {
                        square,
                        piece: *piece,
                    }),
                    (None, None) => {}
                }
            }
        }
        delta
    }

    fn find_origin_and_destination(&self) -> Option<(Change, Change)> {
        let d = &self.disappeared;
        let a = &self.appeared;

        // Ordinary move or capture.
        if d.len() == 1 && a.len() + self.replaced.len() == 1 {
            let to = a.first().or(self.replaced.first())?;
            return Some((d[0], *to));
        }

        // Castling: the king and rook both vanish and reappear.
        if d.len() == 2 && a.len() == 2 {
            let king = d.iter().find(|c| c.piece.kind == PieceKind::King)?;
            let dest = a.iter().find(|c| c.piece == king.piece)?;
            return Some((*king, *dest));
        }

        // En passant: two pawns vanish, one lands beside where the mover stood.
        if d.len() == 2 && a.len() == 1 {
            let dest = a[0];
            let mover = d.iter().find(|c| {
                c.piece.kind == PieceKind::Pawn
                    && c.square.file_delta(dest.square).abs() == 1
            })?;
            return Some((*mover, dest));
        }

        None
    }
}

/// Infers the single move that turns `prev` into `curr`.
///
/// Returns `None` when the difference does not match an ordinary move,
/// capture, castling or en passant pattern. Castling yields the king's move.
/// A pawn that arrives as a knight, bishop, rook or queen yields a promotion
/// to that piece.
pub fn diff_boards(prev: &Board, curr: &Board) -> Option<Move> {
    let (from, to) = BoardDelta::between(prev, curr).find_origin_and_destination()?;

    let promotion = match to.piece.kind {
        kind @ (PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
            if from.piece.kind == PieceKind::Pawn =>
        {
            Some(kind)
        }
        _ => None,
    };

    Some(Move {
        from: from.square,
        to: to.square,
        promotion,
    })
}

/// Works out whose turn it is after `prev` became `curr`.
///
/// The color of the first piece found arriving on a square (scanning from
/// rank 8) is the side that just moved, so the other side is to move. More
/// than four changed squares or no arrival gives `None`.
pub fn detect_turn_from_diff(prev: &Board, curr: &Board) -> Option<Color> {
    let mut changes = 0;
    let mut arrived: Option<Piece> = None;

    for (before, after) in prev.rows().iter().zip(curr.rows()) {
        for (b, a) in before.iter().zip(after) {
            if b == a {
                continue;
            }
            changes += 1;
            if changes > 4 {
                return None;
            }
            if arrived.is_none() {
                arrived = *a;
            }
        }
    }

    arrived.map(|piece| piece.color.opposite())
}
