//! PGN export of the observed game.

use crate::classifier::LockedMove;
use crate::evaluation::{EvalSnapshot, Evaluation};
use crate::quality::MoveQuality;
use chess_core::{diff_boards, uci_to_san, Board, Color, STARTPOS};
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone)]
struct RecordedMove {
    ply_before: u32,
    ply_after: u32,
    turn: Color,
    san: String,
}

/// Deepest evaluation seen for a ply, from White's point of view.
#[derive(Debug, Clone, Copy)]
struct RecordedEval {
    evaluation: Evaluation,
    depth: u32,
}

/// Accumulates moves, evaluations and locked labels as the game is watched.
#[derive(Debug, Clone)]
pub struct PgnRecorder {
    site: String,
    start_fen: Option<String>,
    previous: Option<(Board, Color, u32)>,
    moves: Vec<RecordedMove>,
    evals: HashMap<u32, RecordedEval>,
    qualities: HashMap<u32, MoveQuality>,
}

impl Default for PgnRecorder {
    fn default() -> Self {
        Self::new("Unknown")
    }
}

impl PgnRecorder {
    pub fn new(site: impl Into<String>) -> Self {
        Self {
            site: site.into(),
            start_fen: None,
            previous: None,
            moves: Vec::new(),
            evals: HashMap::new(),
            qualities: HashMap::new(),
        }
    }

    /// Number of recorded moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Records a board. The first board becomes the start position; later
    /// forward steps with a detectable move append it. A move made after
    /// navigating back replaces the recorded continuation; replaying the
    /// recorded move keeps it.
    pub fn on_board_change(&mut self, fen: &str, board: &Board, turn: Color, ply: u32) {
        let Some((prev_board, prev_turn, prev_ply)) =
            self.previous.replace((board.clone(), turn, ply))
        else {
            self.start_fen = Some(fen.to_string());
            return;
        };

        if ply <= prev_ply {
            return;
        }
        let Some(mv) = diff_boards(&prev_board, board) else {
            return;
        };
        let san = uci_to_san(mv, &prev_board, prev_turn);
        debug!(%san, ply = prev_ply, "pgn move");
        let recorded = self
            .moves
            .iter()
            .find(|m| m.ply_before == prev_ply)
            .map(|m| m.san == san);
        match recorded {
            // Stepping forward through the recorded line again.
            Some(true) => return,
            Some(false) => {
                debug!(ply = prev_ply, "pgn branch replaces continuation");
                self.truncate_after(prev_ply);
            }
            None => self.truncate_after(prev_ply),
        }
        self.moves.push(RecordedMove {
            ply_before: prev_ply,
            ply_after: ply,
            turn: prev_turn,
            san,
        });
    }

    /// Drops the recorded continuation from `ply` on, along with the
    /// evaluations and labels of the positions it reached.
    fn truncate_after(&mut self, ply: u32) {
        self.moves.retain(|m| m.ply_before < ply);
        self.evals.retain(|&p, _| p <= ply);
        self.qualities.retain(|&p, _| p <= ply);
    }

    /// Keeps the deepest top-line evaluation of the position at `ply`.
    pub fn on_eval(&mut self, ply: u32, turn: Color, snapshot: &EvalSnapshot) {
        let Some(top) = snapshot.top() else {
            return;
        };
        let evaluation = match (turn, top.evaluation) {
            (Color::White, e) => e,
            (Color::Black, Evaluation::Centipawns(cp)) => Evaluation::Centipawns(-cp),
            (Color::Black, Evaluation::Mate(n)) => Evaluation::Mate(-n),
        };
        let deeper = self
            .evals
            .get(&ply)
            .map_or(true, |existing| snapshot.depth > existing.depth);
        if deeper {
            self.evals.insert(
                ply,
                RecordedEval {
                    evaluation,
                    depth: snapshot.depth,
                },
            );
        }
    }

    pub fn on_locked(&mut self, locked: &LockedMove) {
        self.qualities
            .insert(locked.ply, locked.classification.quality);
    }

    pub fn reset(&mut self) {
        self.start_fen = None;
        self.previous = None;
        self.moves.clear();
        self.evals.clear();
        self.qualities.clear();
    }

    /// PGN dated today.
    pub fn export(&self) -> String {
        self.export_on(chrono::Local::now().date_naive())
    }

    pub fn export_on(&self, date: NaiveDate) -> String {
        let mut headers = vec![
            "[Event \"Live Chess\"]".to_string(),
            format!("[Site \"{}\"]", self.site),
            format!("[Date \"{}\"]", date.format("%Y.%m.%d")),
            "[White \"White\"]".to_string(),
            "[Black \"Black\"]".to_string(),
            "[Result \"*\"]".to_string(),
        ];
        if let Some(fen) = self.start_fen.as_deref().filter(|f| *f != STARTPOS) {
            headers.push("[SetUp \"1\"]".to_string());
            headers.push(format!("[FEN \"{}\"]", fen));
        }

        let mut parts = Vec::new();
        for (i, m) in self.moves.iter().enumerate() {
            let number = m.ply_before / 2 + 1;
            let quality = self.qualities.get(&m.ply_after).copied();
            let san = format!("{}{}", m.san, quality.map_or("", MoveQuality::pgn_suffix));
            match m.turn {
                Color::White => parts.push(format!("{}. {}", number, san)),
                Color::Black if i == 0 => parts.push(format!("{}... {}", number, san)),
                Color::Black => parts.push(san),
            }
            if let Some(nag) = quality.and_then(MoveQuality::nag) {
                parts.push(nag.to_string());
            }
            if let Some(eval) = self.evals.get(&m.ply_after) {
                parts.push(format!("{{{}/{}}}", eval.evaluation, eval.depth));
            }
        }
        parts.push("*".to_string());

        format!("{}\n\n{}", headers.join("\n"), parts.join(" "))
    }
}
