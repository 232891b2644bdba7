//! Core types for chess.
//!
//! This crate provides the board model used by the live analysis tools:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Move`] for coordinate moves
//! - [`Board`] and [`Position`] for board state
//! - FEN parsing and serialization
//! - [`diff_boards`] to infer the move between two observed boards
//! - [`uci_to_san`] and [`pv_to_san`] for human-readable notation

mod board;
mod color;
mod diff;
mod fen;
mod mov;
mod piece;
mod position;
mod san;
mod square;

pub use board::{Board, PlacedPiece};
pub use color::Color;
pub use diff::{detect_turn_from_diff, diff_boards};
pub use fen::{encode_fen, encode_placement, FenError, STARTPOS};
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use position::{CastlingRights, Position};
pub use san::{pv_to_san, uci_to_san, MAX_PV_MOVES};
pub use square::{File, Rank, Square};
