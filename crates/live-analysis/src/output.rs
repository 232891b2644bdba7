//! One line of text per analysis event.

use chess_analysis::{AnalysisEvent, EvalSnapshot, Hint};
use chess_core::{pv_to_san, uci_to_san, Move, Position};

/// Remembers the displayed position so moves can be written in SAN.
#[derive(Debug, Default)]
pub struct Printer {
    current: Option<Position>,
    previous: Option<Position>,
    /// Last tiered hint shown for the current position.
    hint: Option<Hint>,
}

impl Printer {
    pub fn format(&mut self, event: &AnalysisEvent) -> Option<String> {
        match event {
            AnalysisEvent::Ready => Some("ready".to_string()),
            AnalysisEvent::Error(message) => Some(format!("error: {}", message)),
            AnalysisEvent::PositionChanged { fen, ply, opening } => {
                self.previous = self.current.take();
                self.hint = None;
                self.current = Position::from_fen(fen).ok();
                let mut line = format!("position ply {} {}", ply, fen);
                if let Some(name) = opening {
                    line.push_str(&format!(" ({})", name));
                }
                Some(line)
            }
            AnalysisEvent::Eval(snapshot) => Some(self.format_eval(snapshot)),
            AnalysisEvent::ClassificationCleared => None,
            AnalysisEvent::ClassificationShown { result, insight } => {
                let mut line = format!(
                    "move {} {} (loss {})",
                    result.quality,
                    result.symbol(),
                    result.cp_loss
                );
                if let Some(insight) = insight {
                    line.push_str(&format!(": {}", insight));
                }
                Some(line)
            }
            AnalysisEvent::ClassificationLocked {
                ply,
                result,
                mv,
                insight,
                suggested_best,
                sacrifice,
            } => {
                let mut line = format!(
                    "locked ply {} {} {} {} (loss {})",
                    ply,
                    self.before_move_san(*mv),
                    result.quality,
                    result.symbol(),
                    result.cp_loss
                );
                if let Some(best) = suggested_best {
                    line.push_str(&format!(", best was {}", self.before_move_san(*best)));
                }
                if *sacrifice > 0 {
                    line.push_str(&format!(", sacrifices {}", sacrifice));
                }
                if let Some(insight) = insight {
                    line.push_str(&format!(": {}", insight));
                }
                Some(line)
            }
            AnalysisEvent::AccuracyUpdated(pct) => Some(format!("accuracy {:.1}%", pct)),
            AnalysisEvent::Hint(hint) => self.format_hint(*hint),
        }
    }

    /// Only tiered hints are printed, once per change.
    fn format_hint(&mut self, hint: Hint) -> Option<String> {
        let tier = hint.tier?;
        if self.hint == Some(hint) {
            return None;
        }
        self.hint = Some(hint);
        let best = match &self.current {
            Some(p) => uci_to_san(hint.best, &p.board, p.side_to_move),
            None => hint.best.to_uci(),
        };
        Some(format!("hint {} {} ({})", best, tier.symbol(), tier))
    }

    fn before_move_san(&self, mv: Move) -> String {
        match &self.previous {
            Some(p) => uci_to_san(mv, &p.board, p.side_to_move),
            None => mv.to_uci(),
        }
    }

    fn format_eval(&self, snapshot: &EvalSnapshot) -> String {
        let lines: Vec<String> = snapshot
            .lines
            .iter()
            .map(|l| {
                let pv = match &self.current {
                    Some(p) => pv_to_san(&l.pv, &p.board, p.side_to_move),
                    None => l.pv.iter().copied().map(Move::to_uci).collect(),
                };
                format!("{} {}", l.evaluation, pv.join(" "))
            })
            .collect();
        let marker = if snapshot.complete { " final" } else { "" };
        format!("eval depth {}{}: {}", snapshot.depth, marker, lines.join(" | "))
    }
}
