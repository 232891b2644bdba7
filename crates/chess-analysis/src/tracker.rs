//! Aggregation of MultiPV `info` lines into evaluation snapshots.

use crate::evaluation::{EvalLine, EvalSnapshot, Evaluation};
use chess_core::Move;
use uci::{EngineInfo, ScoreBound};

/// Collects the ranked lines of one search.
///
/// One slot is kept per MultiPV rank; every accepted `info` line replaces its
/// slot and produces a fresh, incomplete snapshot once the rank-1 line is
/// known. Snapshots only carry the ranks filled contiguously from rank 1, so
/// `lines[0]` is always the engine's best line. [`SearchTracker::finish`]
/// produces the terminal snapshot once the engine reports its best move.
#[derive(Debug, Clone)]
pub struct SearchTracker {
    fen: String,
    slots: Vec<Option<EvalLine>>,
    max_depth: u32,
}

impl SearchTracker {
    pub fn new(fen: impl Into<String>, num_lines: usize) -> Self {
        Self {
            fen: fen.into(),
            slots: vec![None; num_lines.max(1)],
            max_depth: 0,
        }
    }

    /// Position being searched.
    pub fn fen(&self) -> &str {
        &self.fen
    }

    /// Records one engine `info` line.
    ///
    /// Returns `None` for lines that carry no usable evaluation: missing
    /// depth, rank, score or pv; a rank beyond the configured line count; a
    /// bound-only score; or a pv that does not parse as coordinate moves.
    /// Lower ranks reported before rank 1 are stored but yield no snapshot.
    pub fn on_info(&mut self, info: &EngineInfo) -> Option<EvalSnapshot> {
        let depth = info.depth?;
        let rank = info.multipv? as usize;
        let score = info.score?;
        if info.bound != ScoreBound::Exact || info.pv.is_empty() {
            return None;
        }
        if rank == 0 || rank > self.slots.len() {
            return None;
        }
        let pv = info
            .pv
            .iter()
            .map(|m| Move::from_uci(m))
            .collect::<Option<Vec<_>>>()?;

        self.max_depth = self.max_depth.max(depth);
        self.slots[rank - 1] = Some(EvalLine {
            depth,
            evaluation: Evaluation::from(score),
            pv,
        });

        self.slots[0].is_some().then(|| self.snapshot(depth, false))
    }

    /// Terminal snapshot at the deepest depth seen.
    pub fn finish(&self) -> EvalSnapshot {
        self.snapshot(self.max_depth, true)
    }

    fn snapshot(&self, depth: u32, complete: bool) -> EvalSnapshot {
        EvalSnapshot {
            fen: self.fen.clone(),
            depth,
            lines: self.slots.iter().map_while(|slot| slot.clone()).collect(),
            complete,
        }
    }
}
