//! Mailbox board representation.

use crate::{Color, Move, Piece, PieceKind, Square};

/// A piece standing on a square, as reported by an external board reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedPiece {
    pub piece: Piece,
    pub square: Square,
}

/// An 8x8 grid of optional pieces.
///
/// Rows are stored from rank 8 down to rank 1 and columns from file a to h,
/// matching the order in which FEN lists them. No legality is enforced: any
/// arrangement of pieces is representable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates an empty board.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a board from a list of occupied squares. Later entries for the
    /// same square replace earlier ones.
    pub fn from_pieces(pieces: &[PlacedPiece]) -> Self {
        let mut board = Self::empty();
        for placed in pieces {
            board.set(placed.square, Some(placed.piece));
        }
        board
    }

    #[inline]
    fn cell(square: Square) -> (usize, usize) {
        (
            7 - square.rank().index() as usize,
            square.file().index() as usize,
        )
    }

    /// Returns the piece on `square`, if any.
    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        let (row, col) = Self::cell(square);
        self.cells[row][col]
    }

    /// Places or clears a piece on `square`.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        let (row, col) = Self::cell(square);
        self.cells[row][col] = piece;
    }

    /// Rows from rank 8 to rank 1.
    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.cells
    }

    /// Iterates over occupied squares in FEN order (a8..h8, a7..h1).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                let square = Square::from_coords(col as i8, 7 - row as i8)?;
                cell.map(|piece| (square, piece))
            })
        })
    }

    /// Squares holding pieces of the given kind and color.
    pub fn find(&self, kind: PieceKind, color: Color) -> Vec<Square> {
        self.pieces()
            .filter(|(_, p)| p.kind == kind && p.color == color)
            .map(|(sq, _)| sq)
            .collect()
    }

    /// Returns a new board with `mv` played.
    ///
    /// Captures are by replacement. A pawn changing file onto an empty square
    /// removes the pawn it passed (en passant), a promotion substitutes the
    /// promoted piece in the mover's color, and a king moving two files also
    /// relocates the matching rook. An empty origin leaves the board unchanged.
    pub fn apply_move(&self, mv: Move) -> Board {
        let mut next = self.clone();
        let Some(mut piece) = self.get(mv.from) else {
            return next;
        };

        let file_delta = mv.from.file_delta(mv.to);

        if piece.kind == PieceKind::Pawn && file_delta != 0 && self.get(mv.to).is_none() {
            if let Some(passed) = mv.from.offset(file_delta, 0) {
                next.set(passed, None);
            }
        }

        if let Some(kind) = mv.promotion {
            piece = Piece::new(kind, piece.color);
        }

        if piece.kind == PieceKind::King && file_delta.abs() == 2 {
            let rank = mv.from.rank().index() as i8;
            let (rook_from, rook_to) = if file_delta > 0 { (7, 5) } else { (0, 3) };
            if let (Some(src), Some(dst)) = (
                Square::from_coords(rook_from, rank),
                Square::from_coords(rook_to, rank),
            ) {
                let rook = next.get(src);
                next.set(src, None);
                next.set(dst, rook);
            }
        }

        next.set(mv.from, None);
        next.set(mv.to, Some(piece));
        next
    }
}
