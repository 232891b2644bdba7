//! Live chess position analysis with Stockfish integration.
//!
//! This crate follows a game as it is played, keeps a UCI engine analyzing
//! the current position and labels each move by how much it lost.
//!
//! # Overview
//!
//! - [`EngineSession`] - Supervised engine process with crash recovery
//! - [`SearchTracker`] - Turns MultiPV `info` lines into [`EvalSnapshot`]s
//! - [`MoveClassifier`] - Labels played moves ([`MoveQuality`]) as evaluations deepen
//! - [`EvalCache`] - Recently analyzed positions
//! - [`PgnRecorder`] - Annotated PGN of the observed game
//! - [`AnalysisCoordinator`] - Ties a [`BoardAdapter`] to the engine and classifier
//!
//! # Example
//!
//! ```ignore
//! use chess_analysis::{position_feed, AnalysisConfig, AnalysisCoordinator, EngineSession, ProcessLauncher};
//!
//! let config = AnalysisConfig::default();
//! let (session, session_events) = EngineSession::spawn(ProcessLauncher);
//! session.init(config.engine.clone());
//! let coordinator = AnalysisCoordinator::new(session, config, openings);
//! let (feed, adapter) = position_feed(Position::starting());
//! let coordinator = coordinator.run(adapter, session_events, controls, events).await;
//! ```

pub mod adapter;
pub mod cache;
pub mod classifier;
pub mod config;
pub mod coordinator;
pub mod evaluation;
pub mod guard;
pub mod hint;
pub mod insight;
pub mod material;
pub mod pgn;
pub mod quality;
pub mod session;
pub mod tracker;

pub use adapter::{position_feed, BoardAdapter, FeedHandle, PositionFeed};
pub use cache::{BoundedCache, EvalCache, EVAL_CACHE_SIZE};
pub use classifier::{ClassifierEvent, LockedMove, MoveClassifier};
pub use config::{AnalysisConfig, ClassificationConfig, ConfigError, EngineConfig};
pub use coordinator::{AnalysisBackend, AnalysisCoordinator, AnalysisEvent, Control};
pub use evaluation::{EvalLine, EvalSnapshot, Evaluation};
pub use guard::is_unsupported_piece;
pub use hint::{critical_move_hint, line_spread, Hint, HintTier, HINT_MIN_DEPTH};
pub use insight::{detect_insight, Insight};
pub use material::{capture_value, piece_value, sacrifice_magnitude, SACRIFICE_HORIZON};
pub use pgn::PgnRecorder;
pub use quality::{
    accuracy_from_mean, classify, compute_cp_loss, Classification, MoveQuality, PlayerStats,
    BRILLIANT_THRESHOLD, MATE_LOSS,
};
pub use session::{
    EngineError, EngineHandle, EngineLauncher, EngineOutput, EngineSession, EngineSessionState,
    ProcessLauncher, SessionEvent,
};
pub use tracker::SearchTracker;
