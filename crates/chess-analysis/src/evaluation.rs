//! Chess position evaluation types.

use chess_core::Move;
use std::fmt;
use uci::Score;

/// Represents a chess position evaluation.
///
/// Evaluations can be either centipawn scores (for normal positions)
/// or mate scores (when a forced mate is found). Both are from the point of
/// view of the side to move in the evaluated position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// Centipawn evaluation (positive = side to move is better)
    Centipawns(i32),
    /// Mate in N moves (positive = side to move mates, negative = gets mated)
    Mate(i32),
}

impl Evaluation {
    /// Centipawn value, if this is not a mate score.
    pub fn score(self) -> Option<i32> {
        match self {
            Evaluation::Centipawns(cp) => Some(cp),
            Evaluation::Mate(_) => None,
        }
    }

    /// Mate distance, if this is a mate score.
    pub fn mate(self) -> Option<i32> {
        match self {
            Evaluation::Mate(n) => Some(n),
            Evaluation::Centipawns(_) => None,
        }
    }
}

impl From<Score> for Evaluation {
    fn from(score: Score) -> Self {
        match score {
            Score::Cp(cp) => Evaluation::Centipawns(cp),
            Score::Mate(n) => Evaluation::Mate(n),
        }
    }
}

/// Pawn-unit rendering: `+0.3`, `-1.5`, `#+3`, `#-2`.
impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Evaluation::Centipawns(cp) => {
                let pawns = cp as f64 / 100.0;
                if pawns >= 0.0 {
                    write!(f, "+{:.1}", pawns)
                } else {
                    write!(f, "{:.1}", pawns)
                }
            }
            Evaluation::Mate(n) if n > 0 => write!(f, "#+{}", n),
            Evaluation::Mate(n) => write!(f, "#{}", n),
        }
    }
}

/// One ranked engine line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalLine {
    /// Depth this line was reported at.
    pub depth: u32,
    pub evaluation: Evaluation,
    /// Principal variation, first move first.
    pub pv: Vec<Move>,
}

impl EvalLine {
    /// The line's first move, if any.
    pub fn best_move(&self) -> Option<Move> {
        self.pv.first().copied()
    }
}

/// The engine's current view of one position.
///
/// Snapshots are immutable once emitted. `complete` marks the terminal
/// snapshot of a search (the engine reported its best move).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalSnapshot {
    /// Position the search was started for.
    pub fen: String,
    pub depth: u32,
    /// Lines ordered by rank, best first.
    pub lines: Vec<EvalLine>,
    pub complete: bool,
}

impl EvalSnapshot {
    /// The rank-1 line.
    pub fn top(&self) -> Option<&EvalLine> {
        self.lines.first()
    }
}
