//! Full position state: board plus the side information FEN carries.

use crate::{Board, Color, Square};
use std::fmt;

/// Castling availability for both sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    /// Parses a FEN castling field (`KQkq` subset or `-`).
    pub fn from_fen(s: &str) -> Option<Self> {
        if s == "-" {
            return Some(Self::NONE);
        }
        if s.is_empty() {
            return None;
        }
        let mut rights = Self::NONE;
        for c in s.chars() {
            match c {
                'K' => rights.white_kingside = true,
                'Q' => rights.white_queenside = true,
                'k' => rights.black_kingside = true,
                'q' => rights.black_queenside = true,
                _ => return None,
            }
        }
        Some(rights)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (flag, c) in [
            (self.white_kingside, 'K'),
            (self.white_queenside, 'Q'),
            (self.black_kingside, 'k'),
            (self.black_queenside, 'q'),
        ] {
            if flag {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

/// A position as observed from the host.
///
/// `ply` is a monotonically increasing half-move counter used for history
/// navigation and cache keys. It is independent of `fullmove`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub fullmove: u32,
    pub ply: u32,
}

impl Position {
    /// Ply derived from a fullmove number and side to move.
    pub fn ply_from_fullmove(fullmove: u32, side_to_move: Color) -> u32 {
        fullmove.saturating_sub(1) * 2 + side_to_move.index() as u32
    }

    /// The standard starting position.
    pub fn starting() -> Self {
        Self::from_fen(crate::STARTPOS).expect("STARTPOS is valid")
    }

    /// Encodes this position as FEN (halfmove clock always `0`).
    pub fn to_fen(&self) -> String {
        crate::encode_fen(
            &self.board,
            self.side_to_move,
            self.castling,
            self.en_passant,
            self.fullmove,
        )
    }
}
