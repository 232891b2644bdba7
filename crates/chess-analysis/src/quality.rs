//! Move quality classification and accuracy.

use crate::evaluation::EvalLine;
use chess_core::Move;
use std::fmt;

/// Penalty for losing a forced mate or walking into one.
pub const MATE_LOSS: i32 = 1000;

/// Raw centipawn loss at or below which a non-best move counts as brilliant.
pub const BRILLIANT_THRESHOLD: i32 = -50;

/// Upper cp-loss bound for each band, checked in order. Anything above the
/// last band is a blunder.
const BANDS: [(i32, MoveQuality); 4] = [
    (10, MoveQuality::Excellent),
    (30, MoveQuality::Good),
    (80, MoveQuality::Inaccuracy),
    (200, MoveQuality::Mistake),
];

/// Classification of move quality based on evaluation loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveQuality {
    /// The engine's top choice
    Best,
    /// Not the top choice, but clearly improved the position
    Brilliant,
    /// Excellent move (minimal centipawn loss)
    Excellent,
    /// Good move (small centipawn loss)
    Good,
    /// Inaccuracy (noticeable centipawn loss)
    Inaccuracy,
    /// Mistake (significant centipawn loss)
    Mistake,
    /// Blunder (major centipawn loss)
    Blunder,
}

impl MoveQuality {
    /// Short glyph shown next to the move.
    pub const fn symbol(self) -> &'static str {
        match self {
            MoveQuality::Best => "★",
            MoveQuality::Brilliant => "!!",
            MoveQuality::Excellent => "!",
            MoveQuality::Good => "✓",
            MoveQuality::Inaccuracy => "?!",
            MoveQuality::Mistake => "?",
            MoveQuality::Blunder => "??",
        }
    }

    /// Numeric annotation glyph for PGN export, where one exists.
    pub const fn nag(self) -> Option<&'static str> {
        match self {
            MoveQuality::Brilliant => Some("$3"),
            MoveQuality::Excellent => Some("$1"),
            MoveQuality::Inaccuracy => Some("$6"),
            MoveQuality::Mistake => Some("$2"),
            MoveQuality::Blunder => Some("$4"),
            MoveQuality::Best | MoveQuality::Good => None,
        }
    }

    /// Glyph written straight after the SAN in PGN move text. Only the
    /// unambiguous ones are inlined; the rest are carried by the NAG.
    pub const fn pgn_suffix(self) -> &'static str {
        match self {
            MoveQuality::Brilliant => "!!",
            MoveQuality::Inaccuracy => "?!",
            MoveQuality::Blunder => "??",
            _ => "",
        }
    }

    /// Whether the engine's preferred move is worth suggesting.
    pub const fn is_error(self) -> bool {
        matches!(
            self,
            MoveQuality::Inaccuracy | MoveQuality::Mistake | MoveQuality::Blunder
        )
    }
}

impl fmt::Display for MoveQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveQuality::Best => "Best",
            MoveQuality::Brilliant => "Brilliant",
            MoveQuality::Excellent => "Excellent",
            MoveQuality::Good => "Good",
            MoveQuality::Inaccuracy => "Inaccuracy",
            MoveQuality::Mistake => "Mistake",
            MoveQuality::Blunder => "Blunder",
        };
        write!(f, "{}", name)
    }
}

/// A labelled move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub quality: MoveQuality,
    /// Non-negative except for `Brilliant`, which keeps the raw (gain) value.
    pub cp_loss: i32,
}

impl Classification {
    pub fn symbol(&self) -> &'static str {
        self.quality.symbol()
    }
}

/// Centipawn loss of a move from the mover's point of view.
///
/// `before` is the mover's evaluation of the position before the move and
/// `after` is the opponent's evaluation of the resulting position, so for two
/// centipawn scores a perfect move sums to about zero.
pub fn compute_cp_loss(before: &EvalLine, after: &EvalLine) -> i32 {
    compute_loss(before.evaluation, after.evaluation)
}

fn compute_loss(before: crate::Evaluation, after: crate::Evaluation) -> i32 {
    use crate::Evaluation::{Centipawns, Mate};

    match (before, after) {
        // Held a forced mate: keeping it costs nothing, losing it is maximal.
        (Mate(m), Mate(n)) if m > 0 && n < 0 => 0,
        (Mate(m), _) if m > 0 => MATE_LOSS,
        // Already being mated; nothing left to lose.
        (Mate(_), _) => 0,
        (Centipawns(_), Mate(n)) if n > 0 => MATE_LOSS,
        (Centipawns(_), Mate(_)) => 0,
        (Centipawns(b), Centipawns(a)) => b + a,
    }
}

/// Labels `played` given the mover's top line before the move and the
/// opponent's top line after it.
///
/// Pure: the same inputs always produce the same result.
pub fn classify(
    before: &EvalLine,
    after: &EvalLine,
    played: Move,
    min_depth: u32,
) -> Classification {
    if before.best_move() == Some(played) {
        return Classification {
            quality: MoveQuality::Best,
            cp_loss: 0,
        };
    }

    let raw = compute_loss(before.evaluation, after.evaluation);

    if raw <= BRILLIANT_THRESHOLD && before.depth >= min_depth {
        return Classification {
            quality: MoveQuality::Brilliant,
            cp_loss: raw,
        };
    }

    let cp_loss = raw.max(0);
    let quality = BANDS
        .iter()
        .find(|(max, _)| cp_loss <= *max)
        .map_or(MoveQuality::Blunder, |(_, q)| *q);

    Classification { quality, cp_loss }
}

/// Accuracy percentage for a mean centipawn loss, clamped to 0..=100.
pub fn accuracy_from_mean(mean_cp_loss: f64) -> f64 {
    (103.1668 * (-0.04354 * mean_cp_loss).exp() - 3.1668).clamp(0.0, 100.0)
}

/// Running statistics over locked classifications.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerStats {
    /// Total moves analyzed
    pub total_moves: u32,
    /// Number of best moves
    pub best_moves: u32,
    /// Number of brilliant moves
    pub brilliant_moves: u32,
    /// Number of excellent moves
    pub excellent_moves: u32,
    /// Number of good moves
    pub good_moves: u32,
    /// Number of inaccuracies
    pub inaccuracies: u32,
    /// Number of mistakes
    pub mistakes: u32,
    /// Number of blunders
    pub blunders: u32,
    /// Sum of non-negative centipawn losses
    pub cp_loss_sum: i64,
}

impl PlayerStats {
    /// Adds one locked classification.
    pub fn record(&mut self, c: &Classification) {
        self.total_moves += 1;
        self.cp_loss_sum += i64::from(c.cp_loss.max(0));
        match c.quality {
            MoveQuality::Best => self.best_moves += 1,
            MoveQuality::Brilliant => self.brilliant_moves += 1,
            MoveQuality::Excellent => self.excellent_moves += 1,
            MoveQuality::Good => self.good_moves += 1,
            MoveQuality::Inaccuracy => self.inaccuracies += 1,
            MoveQuality::Mistake => self.mistakes += 1,
            MoveQuality::Blunder => self.blunders += 1,
        }
    }

    /// Average centipawn loss
    pub fn avg_cp_loss(&self) -> f64 {
        if self.total_moves == 0 {
            0.0
        } else {
            self.cp_loss_sum as f64 / f64::from(self.total_moves)
        }
    }

    /// Accuracy percentage (0-100), `None` before any move is recorded.
    pub fn accuracy_percent(&self) -> Option<f64> {
        (self.total_moves > 0).then(|| accuracy_from_mean(self.avg_cp_loss()))
    }
}
