//! Opening names by position.
//!
//! An [`OpeningBook`] maps the piece placement and side to move of a FEN to
//! an opening name. The built-in table can be extended from JSON files.

pub mod book;
pub mod builtin;

pub use book::{position_key, OpeningBook, OpeningEntry, OpeningError};
