//! Glue between the host board, the engine session and the classifier.
//!
//! [`AnalysisCoordinator`] is synchronous at its core: board changes and
//! session events go in, [`AnalysisEvent`]s come out. [`AnalysisCoordinator::run`]
//! wraps it in a tokio loop with debouncing and control messages.

use crate::adapter::BoardAdapter;
use crate::cache::EvalCache;
use crate::classifier::{ClassifierEvent, MoveClassifier};
use crate::config::{AnalysisConfig, EngineConfig};
use crate::evaluation::{EvalLine, EvalSnapshot};
use crate::guard::is_unsupported_piece;
use crate::hint::{critical_move_hint, Hint};
use crate::insight::Insight;
use crate::pgn::PgnRecorder;
use crate::quality::Classification;
use crate::session::{EngineSession, SessionEvent};
use chess_core::{detect_turn_from_diff, Board, Move, Position, Square};
use chess_openings::OpeningBook;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Something that can analyze positions, normally an [`EngineSession`].
pub trait AnalysisBackend {
    fn analyze(&mut self, fen: &str);
    fn stop(&mut self);
    /// Replaces the running engine with one using `config`.
    fn restart(&mut self, config: &EngineConfig);
}

impl AnalysisBackend for EngineSession {
    fn analyze(&mut self, fen: &str) {
        EngineSession::analyze(self, fen);
    }

    fn stop(&mut self) {
        EngineSession::stop(self);
    }

    fn restart(&mut self, config: &EngineConfig) {
        self.destroy();
        self.init(config.clone());
    }
}

/// Everything consumers are told about.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisEvent {
    Ready,
    Eval(EvalSnapshot),
    Error(String),
    PositionChanged {
        fen: String,
        ply: u32,
        opening: Option<String>,
    },
    ClassificationCleared,
    ClassificationShown {
        result: Classification,
        insight: Option<Insight>,
    },
    ClassificationLocked {
        ply: u32,
        result: Classification,
        mv: Move,
        insight: Option<Insight>,
        suggested_best: Option<Move>,
        sacrifice: i32,
    },
    AccuracyUpdated(f64),
    /// Best move for the side to move, tiered when the runner-up is far behind.
    Hint(Hint),
}

/// Messages for a running [`AnalysisCoordinator::run`] loop.
#[derive(Debug, Clone)]
pub enum Control {
    Reconfigure(AnalysisConfig),
    Shutdown,
}

pub struct AnalysisCoordinator<B> {
    backend: B,
    config: AnalysisConfig,
    openings: Arc<OpeningBook>,
    classifier: MoveClassifier,
    pgn: PgnRecorder,
    cache: EvalCache,
    position: Option<Position>,
    active_fen: Option<String>,
    /// Lines of the latest snapshot for the active position.
    lines: Vec<EvalLine>,
    complete: bool,
    engine_failed: bool,
}

impl<B: AnalysisBackend> AnalysisCoordinator<B> {
    pub fn new(backend: B, config: AnalysisConfig, openings: Arc<OpeningBook>) -> Self {
        Self {
            backend,
            classifier: MoveClassifier::new(config.classification.clone()),
            pgn: PgnRecorder::default(),
            cache: EvalCache::new(config.eval_cache_size),
            config,
            openings,
            position: None,
            active_fen: None,
            lines: Vec::new(),
            complete: false,
            engine_failed: false,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn active_fen(&self) -> Option<&str> {
        self.active_fen.as_deref()
    }

    pub fn pgn(&self) -> &PgnRecorder {
        &self.pgn
    }

    pub fn classifier(&self) -> &MoveClassifier {
        &self.classifier
    }

    /// True when nothing more is expected for the current position: its
    /// analysis finished, the engine gave up, or there is no position yet.
    pub fn is_settled(&self) -> bool {
        self.active_fen.is_none() || self.complete || self.engine_failed
    }

    /// Whether touching `square` would pick up a piece no engine line uses.
    pub fn check_square(&self, square: Square) -> bool {
        match &self.position {
            Some(p) => is_unsupported_piece(square, &p.board, p.side_to_move, &self.lines),
            None => false,
        }
    }

    /// Reads the host board and starts analysis of the new position.
    pub fn on_board_change(&mut self, adapter: &impl BoardAdapter) -> Vec<AnalysisEvent> {
        let board = Board::from_pieces(&adapter.read_pieces());
        if self.position.as_ref().is_some_and(|p| p.board == board) {
            return Vec::new();
        }

        // A diff only reveals the mover when stepping forward.
        let ply = adapter.detect_ply();
        let side_to_move = self
            .position
            .as_ref()
            .filter(|p| ply > p.ply)
            .and_then(|p| detect_turn_from_diff(&p.board, &board))
            .unwrap_or_else(|| adapter.detect_turn());
        let position = Position {
            board,
            side_to_move,
            castling: adapter.detect_castling(),
            en_passant: adapter.detect_en_passant(),
            fullmove: adapter.detect_fullmove(),
            ply,
        };
        let fen = position.to_fen();
        let opening = self.openings.lookup(&fen).map(str::to_string);
        info!(%fen, ply = position.ply, to_move = %side_to_move, "position changed");

        let mut events = vec![AnalysisEvent::PositionChanged {
            fen: fen.clone(),
            ply: position.ply,
            opening,
        }];
        let classified = self
            .classifier
            .on_board_change(&fen, &position.board, position.ply);
        self.forward_classifier(classified, &mut events);
        self.pgn
            .on_board_change(&fen, &position.board, side_to_move, position.ply);

        self.position = Some(position);
        self.active_fen = Some(fen.clone());
        self.lines.clear();
        self.complete = false;

        match self.cache.get(&fen) {
            Some(cached) if cached.complete => {
                debug!(%fen, depth = cached.depth, "replaying cached evaluation");
                self.backend.stop();
                events.extend(self.accept_snapshot(cached));
            }
            Some(cached) => {
                events.extend(self.accept_snapshot(cached));
                self.backend.analyze(&fen);
            }
            None => self.backend.analyze(&fen),
        }
        events
    }

    /// Handles one event from the engine session.
    pub fn on_session_event(&mut self, event: SessionEvent) -> Vec<AnalysisEvent> {
        match event {
            SessionEvent::Ready => {
                self.engine_failed = false;
                vec![AnalysisEvent::Ready]
            }
            SessionEvent::Eval(snapshot) => {
                if self.active_fen.as_deref() != Some(snapshot.fen.as_str()) {
                    debug!(fen = %snapshot.fen, "discarding stale evaluation");
                    return Vec::new();
                }
                self.cache.insert(snapshot.fen.clone(), snapshot.clone());
                self.accept_snapshot(snapshot)
            }
            SessionEvent::Error {
                message,
                recovering,
            } => {
                warn!(%message, recovering, "engine error");
                self.engine_failed = !recovering;
                vec![AnalysisEvent::Error(message)]
            }
        }
    }

    /// Applies new settings: caches are dropped, the engine restarts and
    /// the current position is analyzed again.
    pub fn reconfigure(&mut self, config: AnalysisConfig) -> Vec<AnalysisEvent> {
        info!(
            lines = config.engine.num_lines,
            depth = config.engine.search_depth,
            "reconfiguring"
        );
        self.cache = EvalCache::new(config.eval_cache_size);
        self.classifier.reset(config.classification.clone());
        self.pgn.reset();
        self.backend.restart(&config.engine);
        self.config = config;
        self.lines.clear();
        self.complete = false;
        self.engine_failed = false;

        if let (Some(position), Some(fen)) = (&self.position, &self.active_fen) {
            self.classifier
                .on_board_change(fen, &position.board, position.ply);
            self.pgn
                .on_board_change(fen, &position.board, position.side_to_move, position.ply);
            self.backend.analyze(fen);
        }
        vec![AnalysisEvent::ClassificationCleared]
    }

    fn accept_snapshot(&mut self, snapshot: EvalSnapshot) -> Vec<AnalysisEvent> {
        self.complete = snapshot.complete;
        self.lines = snapshot.lines.clone();
        if let Some(position) = &self.position {
            self.pgn
                .on_eval(position.ply, position.side_to_move, &snapshot);
        }

        let classified = self.classifier.on_eval(&snapshot);
        let hint = critical_move_hint(&snapshot, self.config.classification.enabled);
        let mut events = vec![AnalysisEvent::Eval(snapshot)];
        events.extend(hint.map(AnalysisEvent::Hint));
        self.forward_classifier(classified, &mut events);
        events
    }

    fn forward_classifier(&mut self, classified: Vec<ClassifierEvent>, out: &mut Vec<AnalysisEvent>) {
        for event in classified {
            out.push(match event {
                ClassifierEvent::Cleared => AnalysisEvent::ClassificationCleared,
                ClassifierEvent::Shown {
                    classification,
                    insight,
                } => AnalysisEvent::ClassificationShown {
                    result: classification,
                    insight,
                },
                ClassifierEvent::Locked(locked) => {
                    self.pgn.on_locked(&locked);
                    AnalysisEvent::ClassificationLocked {
                        ply: locked.ply,
                        result: locked.classification,
                        mv: locked.mv,
                        insight: locked.insight,
                        suggested_best: locked.suggested_best,
                        sacrifice: locked.sacrifice,
                    }
                }
                ClassifierEvent::Accuracy(pct) => AnalysisEvent::AccuracyUpdated(pct),
            });
        }
    }

    /// Drives the coordinator until told to shut down.
    ///
    /// Board changes are acted on once the host has been quiet for the
    /// configured debounce period. The loop also ends when the host feed
    /// closes and the last position has settled, or when the session event
    /// stream ends. The coordinator is handed back for inspection.
    pub async fn run<A: BoardAdapter>(
        mut self,
        mut adapter: A,
        mut session_events: mpsc::UnboundedReceiver<SessionEvent>,
        mut controls: mpsc::UnboundedReceiver<Control>,
        output: mpsc::UnboundedSender<AnalysisEvent>,
    ) -> Self {
        let mut changes = adapter.observe_changes();
        let mut changes_open = true;
        let mut controls_open = true;
        let mut settle_at: Option<Instant> = None;

        let emit = |events: Vec<AnalysisEvent>| {
            for event in events {
                let _ = output.send(event);
            }
        };

        loop {
            tokio::select! {
                change = changes.recv(), if changes_open => match change {
                    Some(()) => settle_at = Some(Instant::now() + self.config.debounce()),
                    None => {
                        debug!("board feed closed");
                        changes_open = false;
                    }
                },
                () = debounce_timer(settle_at) => {
                    settle_at = None;
                    emit(self.on_board_change(&adapter));
                }
                event = session_events.recv() => match event {
                    Some(event) => emit(self.on_session_event(event)),
                    None => {
                        warn!("engine session ended");
                        break;
                    }
                },
                control = controls.recv(), if controls_open => match control {
                    Some(Control::Reconfigure(config)) => emit(self.reconfigure(config)),
                    Some(Control::Shutdown) => break,
                    None => controls_open = false,
                },
            }

            if !changes_open && settle_at.is_none() && self.is_settled() {
                debug!("board feed drained and analysis settled");
                break;
            }
        }
        self
    }
}

async fn debounce_timer(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::position_feed;
    use crate::evaluation::Evaluation;
    use crate::quality::MoveQuality;
    use chess_core::{Color, STARTPOS};

    const AFTER_E4: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";
    const AFTER_A3: &str = "rnbqkbnr/pppppppp/8/8/8/P7/1PPPPPPP/RNBQKBNR b KQkq - 0 1";

    #[derive(Debug, Default)]
    struct RecordingBackend {
        analyzed: Vec<String>,
        stops: usize,
        restarts: Vec<EngineConfig>,
    }

    impl AnalysisBackend for RecordingBackend {
        fn analyze(&mut self, fen: &str) {
            self.analyzed.push(fen.to_string());
        }

        fn stop(&mut self) {
            self.stops += 1;
        }

        fn restart(&mut self, config: &EngineConfig) {
            self.restarts.push(config.clone());
        }
    }

    fn coordinator() -> AnalysisCoordinator<RecordingBackend> {
        AnalysisCoordinator::new(
            RecordingBackend::default(),
            AnalysisConfig::default(),
            Arc::new(OpeningBook::builtin()),
        )
    }

    fn position(fen: &str) -> Position {
        Position::from_fen(fen).unwrap()
    }

    fn snapshot(fen: &str, depth: u32, cp: i32, pv: &str, complete: bool) -> EvalSnapshot {
        EvalSnapshot {
            fen: fen.to_string(),
            depth,
            lines: vec![EvalLine {
                depth,
                evaluation: Evaluation::Centipawns(cp),
                pv: Move::parse_list(pv),
            }],
            complete,
        }
    }

    #[test]
    fn test_board_change_requests_analysis() {
        let mut c = coordinator();
        let (feed, adapter) = position_feed(position(STARTPOS));

        let events = c.on_board_change(&adapter);
        assert_eq!(
            events,
            vec![AnalysisEvent::PositionChanged {
                fen: STARTPOS.to_string(),
                ply: 0,
                opening: Some("Starting Position".to_string()),
            }]
        );
        assert_eq!(c.backend().analyzed, vec![STARTPOS.to_string()]);

        // Same board again: nothing happens.
        feed.push(position(STARTPOS));
        assert!(c.on_board_change(&adapter).is_empty());
        assert_eq!(c.backend().analyzed.len(), 1);
    }

    #[test]
    fn test_turn_taken_from_diff() {
        let mut c = coordinator();
        let (feed, adapter) = position_feed(position(STARTPOS));
        c.on_board_change(&adapter);

        // Host claims white to move after 1.e4; the diff says otherwise.
        let mut after = position(AFTER_E4);
        after.side_to_move = Color::White;
        feed.push(after);
        c.on_board_change(&adapter);
        assert_eq!(c.position().unwrap().side_to_move, Color::Black);
        assert_eq!(c.active_fen(), Some(AFTER_E4));
    }

    #[test]
    fn test_stale_eval_discarded() {
        let mut c = coordinator();
        let (feed, adapter) = position_feed(position(STARTPOS));
        c.on_board_change(&adapter);
        feed.push(position(AFTER_E4));
        c.on_board_change(&adapter);

        let stale = snapshot(STARTPOS, 20, 30, "e2e4", true);
        assert!(c.on_session_event(SessionEvent::Eval(stale)).is_empty());
        assert!(!c.is_settled());

        let fresh = snapshot(AFTER_E4, 20, -30, "e7e5", true);
        let events = c.on_session_event(SessionEvent::Eval(fresh.clone()));
        assert_eq!(events[0], AnalysisEvent::Eval(fresh));
        assert!(c.is_settled());
    }

    #[test]
    fn test_cached_evaluation_replayed() {
        let mut c = coordinator();
        let (feed, adapter) = position_feed(position(STARTPOS));
        c.on_board_change(&adapter);
        let done = snapshot(STARTPOS, 22, 30, "e2e4", true);
        c.on_session_event(SessionEvent::Eval(done.clone()));

        feed.push(position(AFTER_E4));
        c.on_board_change(&adapter);
        feed.push(position(STARTPOS));
        let events = c.on_board_change(&adapter);

        assert!(events.contains(&AnalysisEvent::Eval(done)));
        assert_eq!(c.backend().stops, 1);
        assert_eq!(
            c.backend().analyzed,
            vec![STARTPOS.to_string(), AFTER_E4.to_string()]
        );
        assert!(c.is_settled());
    }

    #[test]
    fn test_partial_cached_evaluation_is_resumed() {
        let mut c = coordinator();
        let (feed, adapter) = position_feed(position(STARTPOS));
        c.on_board_change(&adapter);
        c.on_session_event(SessionEvent::Eval(snapshot(STARTPOS, 9, 30, "e2e4", false)));

        feed.push(position(AFTER_E4));
        c.on_board_change(&adapter);
        feed.push(position(STARTPOS));
        c.on_board_change(&adapter);

        assert_eq!(c.backend().stops, 0);
        assert_eq!(c.backend().analyzed.len(), 3);
    }

    #[test]
    fn test_classification_flow() {
        let mut c = coordinator();
        let (feed, adapter) = position_feed(position(STARTPOS));
        c.on_board_change(&adapter);
        c.on_session_event(SessionEvent::Eval(snapshot(STARTPOS, 20, 30, "e2e4", true)));

        feed.push(position(AFTER_A3));
        let events = c.on_board_change(&adapter);
        assert!(events.contains(&AnalysisEvent::ClassificationCleared));

        let events = c.on_session_event(SessionEvent::Eval(snapshot(
            AFTER_A3, 18, -30, "e7e5", false,
        )));
        let locked = events.iter().find_map(|e| match e {
            AnalysisEvent::ClassificationLocked { result, mv, .. } => Some((*result, *mv)),
            _ => None,
        });
        assert_eq!(
            locked,
            Some((
                Classification {
                    quality: MoveQuality::Excellent,
                    cp_loss: 0
                },
                Move::from_uci("a2a3").unwrap()
            ))
        );
        assert!(events
            .iter()
            .any(|e| matches!(e, AnalysisEvent::AccuracyUpdated(_))));
        assert!(c.pgn().export().contains("1. a3 $1 {+0.3/18}"));
    }

    #[test]
    fn test_guard_uses_latest_lines() {
        let mut c = coordinator();
        let (_feed, adapter) = position_feed(position(STARTPOS));
        assert!(!c.check_square(Square::from_algebraic("a2").unwrap()));

        c.on_board_change(&adapter);
        c.on_session_event(SessionEvent::Eval(snapshot(STARTPOS, 12, 30, "e2e4", false)));
        assert!(c.check_square(Square::from_algebraic("a2").unwrap()));
        assert!(!c.check_square(Square::from_algebraic("e2").unwrap()));
    }

    #[test]
    fn test_hint_follows_each_evaluation() {
        use crate::hint::HintTier;

        let mut c = coordinator();
        let (_feed, adapter) = position_feed(position(STARTPOS));
        c.on_board_change(&adapter);

        let mut two_lines = snapshot(STARTPOS, 16, 150, "e2e4 e7e5", false);
        two_lines.lines.push(EvalLine {
            depth: 16,
            evaluation: Evaluation::Centipawns(40),
            pv: Move::parse_list("d2d4"),
        });
        let events = c.on_session_event(SessionEvent::Eval(two_lines));
        assert_eq!(
            events[1],
            AnalysisEvent::Hint(Hint {
                best: Move::from_uci("e2e4").unwrap(),
                tier: Some(HintTier::Critical),
            })
        );

        let mut config = AnalysisConfig::default();
        config.classification.enabled = false;
        c.reconfigure(config);
        let mut two_lines = snapshot(STARTPOS, 16, 150, "e2e4", false);
        two_lines.lines.push(EvalLine {
            depth: 16,
            evaluation: Evaluation::Centipawns(40),
            pv: Move::parse_list("d2d4"),
        });
        let events = c.on_session_event(SessionEvent::Eval(two_lines));
        assert!(events.contains(&AnalysisEvent::Hint(Hint {
            best: Move::from_uci("e2e4").unwrap(),
            tier: None,
        })));
    }

    #[test]
    fn test_reconfigure() {
        let mut c = coordinator();
        let (_feed, adapter) = position_feed(position(STARTPOS));
        c.on_board_change(&adapter);
        c.on_session_event(SessionEvent::Eval(snapshot(STARTPOS, 22, 30, "e2e4", true)));

        let mut config = AnalysisConfig::default();
        config.engine.num_lines = 5;
        let events = c.reconfigure(config);

        assert_eq!(events, vec![AnalysisEvent::ClassificationCleared]);
        assert_eq!(c.backend().restarts.len(), 1);
        assert_eq!(c.backend().restarts[0].num_lines, 5);
        assert_eq!(c.backend().analyzed.last().map(String::as_str), Some(STARTPOS));
        assert!(!c.is_settled());
        assert!(c.pgn().is_empty());
    }

    #[test]
    fn test_engine_errors() {
        let mut c = coordinator();
        let (_feed, adapter) = position_feed(position(STARTPOS));
        c.on_board_change(&adapter);

        let events = c.on_session_event(SessionEvent::Error {
            message: "Engine crashed, restarting".to_string(),
            recovering: true,
        });
        assert_eq!(
            events,
            vec![AnalysisEvent::Error("Engine crashed, restarting".to_string())]
        );
        assert!(!c.is_settled());

        c.on_session_event(SessionEvent::Error {
            message: "Init failed: Engine not found at path: sf".to_string(),
            recovering: false,
        });
        assert!(c.is_settled());
        assert_eq!(c.on_session_event(SessionEvent::Ready), vec![AnalysisEvent::Ready]);
        assert!(!c.is_settled());
    }
}
