//! Live move classification.
//!
//! [`MoveClassifier`] watches board changes and evaluation snapshots. When a
//! forward board change reveals a single move, the evaluation of the previous
//! position and the evaluation of the new one are compared to label it. The
//! label may change while the search deepens and is frozen at the lock depth,
//! or earlier when the search finishes.

use crate::cache::BoundedCache;
use crate::config::ClassificationConfig;
use crate::evaluation::{EvalLine, EvalSnapshot};
use crate::insight::{detect_insight, Insight};
use crate::material::{capture_value, sacrifice_magnitude};
use crate::quality::{classify, Classification, MoveQuality, PlayerStats};
use chess_core::{diff_boards, Board, Color, Move};
use tracing::{debug, info};

/// A classification that will not change any more.
#[derive(Debug, Clone, PartialEq)]
pub struct LockedMove {
    /// Ply of the position reached by the move.
    pub ply: u32,
    pub mv: Move,
    pub mover: Color,
    pub classification: Classification,
    pub insight: Option<Insight>,
    /// Engine's preferred move, kept for inaccuracies and worse.
    pub suggested_best: Option<Move>,
    /// Material the mover gives up along the opponent's reply line.
    pub sacrifice: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassifierEvent {
    Cleared,
    Shown {
        classification: Classification,
        insight: Option<Insight>,
    },
    Locked(LockedMove),
    Accuracy(f64),
}

#[derive(Debug, Clone)]
struct Observed {
    fen: String,
    board: Board,
    ply: u32,
}

#[derive(Debug, Clone)]
struct PlayedMove {
    mv: Move,
    mover: Color,
    board_before: Board,
    before: EvalLine,
}

pub struct MoveClassifier {
    config: ClassificationConfig,
    current: Option<Observed>,
    /// Top line of the most recent snapshot and the position it belongs to.
    latest: Option<(String, EvalLine)>,
    played: Option<PlayedMove>,
    locked: bool,
    cache: BoundedCache<u32, LockedMove>,
    stats: PlayerStats,
}

impl MoveClassifier {
    pub fn new(config: ClassificationConfig) -> Self {
        let cache = BoundedCache::new(config.cache_size);
        Self {
            config,
            current: None,
            latest: None,
            played: None,
            locked: false,
            cache,
            stats: PlayerStats::default(),
        }
    }

    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Records a new board.
    ///
    /// The first board only initializes the classifier. Later boards clear
    /// the current label; a forward step with a detectable move arms
    /// classification, a backward or sideways step redisplays the label
    /// cached for that ply.
    pub fn on_board_change(&mut self, fen: &str, board: &Board, ply: u32) -> Vec<ClassifierEvent> {
        let next = Observed {
            fen: fen.to_string(),
            board: board.clone(),
            ply,
        };
        let Some(previous) = self.current.replace(next) else {
            debug!(%fen, ply, "classifier initialized");
            return Vec::new();
        };
        if previous.fen == fen {
            return Vec::new();
        }

        let forward = ply > previous.ply;
        let before = self
            .latest
            .as_ref()
            .filter(|(eval_fen, _)| *eval_fen == previous.fen)
            .map(|(_, line)| line.clone());

        self.played = None;
        if forward {
            if let Some(mv) = diff_boards(&previous.board, board) {
                let mover = previous.board.get(mv.from).map(|p| p.color);
                self.played = match (mover, before) {
                    (Some(mover), Some(before)) => Some(PlayedMove {
                        mv,
                        mover,
                        board_before: previous.board,
                        before,
                    }),
                    _ => None,
                };
            }
        }
        self.locked = false;
        debug!(
            ply,
            forward,
            played = ?self.played.as_ref().map(|p| p.mv),
            "board changed"
        );

        let mut events = vec![ClassifierEvent::Cleared];
        if !forward && self.config.enabled {
            if let Some(cached) = self.cache.get(&ply) {
                info!(ply, quality = %cached.classification.quality, "restored classification");
                events.push(ClassifierEvent::Shown {
                    classification: cached.classification,
                    insight: cached.insight,
                });
                self.locked = true;
            }
        }
        events
    }

    /// Feeds an evaluation snapshot.
    pub fn on_eval(&mut self, snapshot: &EvalSnapshot) -> Vec<ClassifierEvent> {
        let Some(top) = snapshot.top() else {
            return Vec::new();
        };
        self.latest = Some((snapshot.fen.clone(), top.clone()));

        if !self.config.enabled || self.locked {
            return Vec::new();
        }
        let Some(current) = &self.current else {
            return Vec::new();
        };
        if current.fen != snapshot.fen {
            return Vec::new();
        }
        let Some(played) = &self.played else {
            return Vec::new();
        };
        let min_depth = self.config.min_depth;
        if snapshot.depth < min_depth || played.before.depth < min_depth {
            return Vec::new();
        }

        let classification = classify(&played.before, top, played.mv, min_depth);
        let insight = match classification.quality {
            MoveQuality::Mistake | MoveQuality::Blunder => detect_insight(
                played.mv,
                &played.before.pv,
                &played.board_before,
                played.mover,
            ),
            _ => None,
        };
        debug!(
            quality = %classification.quality,
            cp_loss = classification.cp_loss,
            depth = snapshot.depth,
            mv = %played.mv,
            "classified"
        );

        let mut events = vec![ClassifierEvent::Shown {
            classification,
            insight: insight.clone(),
        }];

        // A finished search never gets deeper, so it locks below lock_depth.
        if snapshot.depth >= self.config.lock_depth || snapshot.complete {
            let won = capture_value(&played.board_before, played.mv);
            let locked = LockedMove {
                ply: current.ply,
                mv: played.mv,
                mover: played.mover,
                classification,
                insight,
                suggested_best: classification
                    .quality
                    .is_error()
                    .then(|| played.before.best_move())
                    .flatten(),
                sacrifice: sacrifice_magnitude(&current.board, &top.pv, played.mover, won),
            };
            info!(ply = locked.ply, depth = snapshot.depth, quality = %classification.quality, "locked");

            self.cache.insert(locked.ply, locked.clone());
            self.locked = true;
            self.stats.record(&classification);
            events.push(ClassifierEvent::Locked(locked));
            if let Some(pct) = self.stats.accuracy_percent() {
                events.push(ClassifierEvent::Accuracy(pct));
            }
        }
        events
    }

    /// Turns classification on or off; switching off clears the display.
    pub fn set_enabled(&mut self, enabled: bool) -> Vec<ClassifierEvent> {
        self.config.enabled = enabled;
        if enabled {
            Vec::new()
        } else {
            vec![ClassifierEvent::Cleared]
        }
    }

    /// Forgets cached labels and the tracked position; the next board
    /// change initializes again.
    pub fn reset(&mut self, config: ClassificationConfig) {
        if config.cache_size != self.cache.capacity() {
            self.cache = BoundedCache::new(config.cache_size);
        } else {
            self.cache.clear();
        }
        self.config = config;
        self.current = None;
        self.latest = None;
        self.played = None;
        self.locked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Evaluation;
    use chess_core::{Position, STARTPOS};

    const AFTER_A3: &str = "rnbqkbnr/pppppppp/8/8/8/P7/1PPPPPPP/RNBQKBNR b KQkq - 0 1";
    const AFTER_E4: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";
    const AFTER_NH3: &str = "rnbqkbnr/pppppppp/8/8/8/7N/PPPPPPPP/RNBQKB1R b KQkq - 0 1";
    const AFTER_A3_E6: &str = "rnbqkbnr/pppp1ppp/4p3/8/8/P7/1PPPPPPP/RNBQKBNR w KQkq - 0 2";

    fn board(fen: &str) -> Board {
        Position::from_fen(fen).unwrap().board
    }

    fn snapshot(fen: &str, depth: u32, cp: i32, pv: &str) -> EvalSnapshot {
        EvalSnapshot {
            fen: fen.to_string(),
            depth,
            lines: vec![EvalLine {
                depth,
                evaluation: Evaluation::Centipawns(cp),
                pv: Move::parse_list(pv),
            }],
            complete: false,
        }
    }

    fn classifier() -> MoveClassifier {
        MoveClassifier::new(ClassificationConfig::default())
    }

    /// Start position evaluated at depth 20, then `fen` reached at ply 1.
    fn after_first_move(c: &mut MoveClassifier, fen: &str) {
        assert!(c.on_board_change(STARTPOS, &board(STARTPOS), 0).is_empty());
        c.on_eval(&snapshot(STARTPOS, 20, 30, "e2e4 e7e5 g1f3"));
        assert_eq!(
            c.on_board_change(fen, &board(fen), 1),
            vec![ClassifierEvent::Cleared]
        );
    }

    fn locked(events: &[ClassifierEvent]) -> Option<&LockedMove> {
        events.iter().find_map(|e| match e {
            ClassifierEvent::Locked(l) => Some(l),
            _ => None,
        })
    }

    #[test]
    fn test_shown_then_locked() {
        let mut c = classifier();
        after_first_move(&mut c, AFTER_A3);

        assert!(c.on_eval(&snapshot(AFTER_A3, 10, -25, "e7e5")).is_empty());

        let events = c.on_eval(&snapshot(AFTER_A3, 14, -25, "e7e5"));
        assert_eq!(
            events,
            vec![ClassifierEvent::Shown {
                classification: Classification {
                    quality: MoveQuality::Excellent,
                    cp_loss: 5
                },
                insight: None
            }]
        );

        let events = c.on_eval(&snapshot(AFTER_A3, 18, -25, "e7e5"));
        let l = locked(&events).unwrap();
        assert_eq!(l.ply, 1);
        assert_eq!(l.mv, Move::from_uci("a2a3").unwrap());
        assert_eq!(l.mover, Color::White);
        assert_eq!(l.suggested_best, None);
        assert_eq!(l.sacrifice, 0);
        assert!(events.contains(&ClassifierEvent::Accuracy(accuracy_of(5.0))));

        // Frozen once locked.
        assert!(c.on_eval(&snapshot(AFTER_A3, 22, -300, "e7e5")).is_empty());
        assert_eq!(c.stats().total_moves, 1);
    }

    fn accuracy_of(mean: f64) -> f64 {
        crate::quality::accuracy_from_mean(mean)
    }

    #[test]
    fn test_complete_search_locks_below_lock_depth() {
        let mut c = classifier();
        after_first_move(&mut c, AFTER_A3);

        let events = c.on_eval(&snapshot(AFTER_A3, 15, -25, "e7e5"));
        assert!(locked(&events).is_none());

        let mut done = snapshot(AFTER_A3, 15, -25, "e7e5");
        done.complete = true;
        let events = c.on_eval(&done);
        assert_eq!(locked(&events).unwrap().classification.quality, MoveQuality::Excellent);
        assert_eq!(c.stats().total_moves, 1);
    }

    #[test]
    fn test_complete_search_below_min_depth_is_not_classified() {
        let mut c = classifier();
        after_first_move(&mut c, AFTER_A3);
        let mut done = snapshot(AFTER_A3, 10, -25, "e7e5");
        done.complete = true;
        assert!(c.on_eval(&done).is_empty());
    }

    #[test]
    fn test_best_move() {
        let mut c = classifier();
        after_first_move(&mut c, AFTER_E4);
        let events = c.on_eval(&snapshot(AFTER_E4, 18, -40, "e7e5"));
        let l = locked(&events).unwrap();
        assert_eq!(l.classification.quality, MoveQuality::Best);
        assert_eq!(l.classification.cp_loss, 0);
        assert!(events.contains(&ClassifierEvent::Accuracy(accuracy_of(0.0))));
    }

    #[test]
    fn test_blunder_has_insight_and_suggestion() {
        let mut c = classifier();
        c.on_board_change(STARTPOS, &board(STARTPOS), 0);
        c.on_eval(&snapshot(STARTPOS, 20, 30, "g1f3 d7d5"));
        c.on_board_change(AFTER_NH3, &board(AFTER_NH3), 1);

        let events = c.on_eval(&snapshot(AFTER_NH3, 18, 200, "e7e5"));
        let l = locked(&events).unwrap();
        assert_eq!(l.classification.quality, MoveQuality::Blunder);
        assert_eq!(l.classification.cp_loss, 230);
        assert_eq!(l.suggested_best, Move::from_uci("g1f3"));
        assert_eq!(
            l.insight.as_ref().map(ToString::to_string).as_deref(),
            Some("Right piece, wrong square: play Nf3")
        );
    }

    #[test]
    fn test_needs_eval_of_previous_position() {
        let mut c = classifier();
        c.on_board_change(STARTPOS, &board(STARTPOS), 0);
        // Evaluation of some other position.
        c.on_eval(&snapshot(AFTER_E4, 20, 30, "e7e5"));
        c.on_board_change(AFTER_A3, &board(AFTER_A3), 1);
        assert!(c.on_eval(&snapshot(AFTER_A3, 20, -25, "e7e5")).is_empty());
    }

    #[test]
    fn test_shallow_pre_move_eval_is_not_classified() {
        let mut c = classifier();
        c.on_board_change(STARTPOS, &board(STARTPOS), 0);
        c.on_eval(&snapshot(STARTPOS, 8, 30, "e2e4"));
        c.on_board_change(AFTER_A3, &board(AFTER_A3), 1);
        assert!(c.on_eval(&snapshot(AFTER_A3, 20, -25, "e7e5")).is_empty());
    }

    #[test]
    fn test_eval_for_other_position_ignored() {
        let mut c = classifier();
        after_first_move(&mut c, AFTER_A3);
        assert!(c.on_eval(&snapshot(AFTER_E4, 20, -25, "e7e5")).is_empty());
    }

    #[test]
    fn test_navigation_restores_cached_label() {
        let mut c = classifier();
        after_first_move(&mut c, AFTER_A3);
        c.on_eval(&snapshot(AFTER_A3, 18, -25, "e7e6"));
        c.on_board_change(AFTER_A3_E6, &board(AFTER_A3_E6), 2);

        let events = c.on_board_change(AFTER_A3, &board(AFTER_A3), 1);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], ClassifierEvent::Cleared);
        assert!(matches!(
            events[1],
            ClassifierEvent::Shown {
                classification: Classification {
                    quality: MoveQuality::Excellent,
                    ..
                },
                ..
            }
        ));
        // Restored labels are not recomputed.
        assert!(c.on_eval(&snapshot(AFTER_A3, 20, 500, "e7e6")).is_empty());
    }

    #[test]
    fn test_backward_step_does_not_classify() {
        let mut c = classifier();
        c.on_board_change(AFTER_A3, &board(AFTER_A3), 1);
        c.on_eval(&snapshot(AFTER_A3, 20, -25, "e7e5"));
        let events = c.on_board_change(STARTPOS, &board(STARTPOS), 0);
        assert_eq!(events, vec![ClassifierEvent::Cleared]);
        assert!(c.on_eval(&snapshot(STARTPOS, 20, 30, "e2e4")).is_empty());
    }

    #[test]
    fn test_disabled() {
        let mut c = classifier();
        assert_eq!(c.set_enabled(false), vec![ClassifierEvent::Cleared]);
        after_first_move(&mut c, AFTER_A3);
        assert!(c.on_eval(&snapshot(AFTER_A3, 20, -25, "e7e5")).is_empty());
    }

    #[test]
    fn test_reset_clears_cache() {
        let mut c = classifier();
        after_first_move(&mut c, AFTER_A3);
        c.on_eval(&snapshot(AFTER_A3, 18, -25, "e7e6"));
        c.reset(ClassificationConfig::default());

        c.on_board_change(AFTER_A3_E6, &board(AFTER_A3_E6), 2);
        let events = c.on_board_change(AFTER_A3, &board(AFTER_A3), 1);
        assert_eq!(events, vec![ClassifierEvent::Cleared]);
    }
}
