//! Opening lookup table.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::builtin::BUILTIN_OPENINGS;

/// Errors that can occur when loading opening files.
#[derive(Debug, Error)]
pub enum OpeningError {
    /// Failed to read the opening file.
    #[error("failed to read opening file: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// An entry's position is not a FEN prefix.
    #[error("invalid opening position: {0:?}")]
    InvalidPosition(String),
}

/// One named position in an opening file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningEntry {
    /// Full FEN, or just placement and side to move.
    pub fen: String,
    pub name: String,
}

/// Lookup key for a FEN: placement and side to move.
///
/// Castling, en passant and the move counters are ignored so transpositions
/// reached with different clocks share a name.
#[must_use]
pub fn position_key(fen: &str) -> Option<String> {
    let mut fields = fen.split_whitespace();
    let placement = fields.next()?;
    let turn = fields.next()?;
    if placement.split('/').count() != 8 || !matches!(turn, "w" | "b") {
        return None;
    }
    Some(format!("{} {}", placement, turn))
}

/// Immutable once built; share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    names: HashMap<String, String>,
}

impl OpeningBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The compiled-in table.
    #[must_use]
    pub fn builtin() -> Self {
        let names = BUILTIN_OPENINGS
            .iter()
            .map(|(key, name)| ((*key).to_string(), (*name).to_string()))
            .collect();
        Self { names }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Adds or replaces the name of a position.
    pub fn insert(&mut self, entry: OpeningEntry) -> Result<(), OpeningError> {
        let key = position_key(&entry.fen).ok_or(OpeningError::InvalidPosition(entry.fen))?;
        self.names.insert(key, entry.name);
        Ok(())
    }

    /// Adds the entries of a JSON array of [`OpeningEntry`] and returns how
    /// many were read. Later entries override earlier ones.
    pub fn extend_from_json(&mut self, json: &str) -> Result<usize, OpeningError> {
        let entries: Vec<OpeningEntry> = serde_json::from_str(json)?;
        let count = entries.len();
        for entry in entries {
            self.insert(entry)?;
        }
        Ok(count)
    }

    /// Like [`OpeningBook::extend_from_json`], reading from a file.
    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize, OpeningError> {
        let json = std::fs::read_to_string(path)?;
        self.extend_from_json(&json)
    }

    /// Name of the opening reached in `fen`, if known.
    #[must_use]
    pub fn lookup(&self, fen: &str) -> Option<&str> {
        let key = position_key(fen)?;
        self.names.get(&key).map(String::as_str)
    }
}
