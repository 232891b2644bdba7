//! Points out the engine's move before it is played, flagging positions where
//! the second-best line is much worse.

use crate::evaluation::{EvalSnapshot, Evaluation};
use crate::quality::MATE_LOSS;
use chess_core::Move;
use std::fmt;

/// Shallower snapshots never get a tier; their line order is still noisy.
pub const HINT_MIN_DEPTH: u32 = 12;

/// Minimum spread for each tier, checked in order.
const TIERS: [(i32, HintTier); 2] = [(200, HintTier::OnlyMove), (80, HintTier::Critical)];

/// How much the best move matters compared to the runner-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintTier {
    /// Every alternative throws the position away.
    OnlyMove,
    /// Alternatives cost at least a mistake's worth.
    Critical,
}

impl HintTier {
    pub const fn symbol(self) -> &'static str {
        match self {
            HintTier::OnlyMove => "!!",
            HintTier::Critical => "!",
        }
    }
}

impl fmt::Display for HintTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HintTier::OnlyMove => write!(f, "Only move"),
            HintTier::Critical => write!(f, "Critical"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub best: Move,
    pub tier: Option<HintTier>,
}

/// How far line 2 falls behind line 1. A mate in line 1 with none in line 2
/// counts as [`MATE_LOSS`]; any other mate pairing counts as zero.
pub fn line_spread(first: Evaluation, second: Evaluation) -> i32 {
    match (first, second) {
        (Evaluation::Mate(_), Evaluation::Centipawns(_)) => MATE_LOSS,
        (Evaluation::Centipawns(a), Evaluation::Centipawns(b)) => a - b,
        _ => 0,
    }
}

/// The best move of `snapshot`, tiered when at least two lines are known at
/// [`HINT_MIN_DEPTH`] or deeper and `tiered` is set.
///
/// `None` when the snapshot has no line or the top line has no move.
pub fn critical_move_hint(snapshot: &EvalSnapshot, tiered: bool) -> Option<Hint> {
    let best = snapshot.top()?.best_move()?;
    let tier = match snapshot.lines.as_slice() {
        [first, second, ..] if tiered && snapshot.depth >= HINT_MIN_DEPTH => {
            let spread = line_spread(first.evaluation, second.evaluation);
            TIERS
                .iter()
                .find(|(min, _)| spread >= *min)
                .map(|&(_, tier)| tier)
        }
        _ => None,
    };
    Some(Hint { best, tier })
}
