//! Engine session supervision against a scripted in-memory engine.

use chess_analysis::{
    EngineConfig, EngineError, EngineHandle, EngineLauncher, EngineOutput, EngineSession,
    EngineSessionState, Evaluation, ProcessLauncher, SessionEvent,
};
use std::path::PathBuf;
use tokio::sync::mpsc;
use uci::{GoOptions, GuiCommand};

const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const AFTER_E4: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";
const AFTER_D4: &str = "rnbqkbnr/pppppppp/8/8/3P4/8/PPP1PPPP/RNBQKBNR b KQkq - 0 1";

/// The engine side of a launched fake: what the session wrote and a way
/// to answer.
struct ScriptedEngine {
    input: mpsc::UnboundedReceiver<String>,
    output: mpsc::UnboundedSender<EngineOutput>,
}

impl ScriptedEngine {
    async fn expect(&mut self) -> GuiCommand {
        let line = self.input.recv().await.expect("session closed engine input");
        GuiCommand::parse(&line).unwrap()
    }

    fn say(&self, line: &str) {
        self.output
            .send(EngineOutput::Line(line.to_string()))
            .unwrap();
    }

    async fn handshake(&mut self, lines: usize, hash_mb: u32) {
        assert_eq!(self.expect().await, GuiCommand::Uci);
        self.say("id name Scripted 1.0");
        self.say("uciok");
        assert_eq!(
            self.expect().await,
            GuiCommand::set_option("MultiPV", lines)
        );
        assert_eq!(self.expect().await, GuiCommand::set_option("Hash", hash_mb));
        assert_eq!(self.expect().await, GuiCommand::IsReady);
        self.say("readyok");
    }

    async fn expect_search(&mut self, fen: &str, depth: u32) {
        assert_eq!(self.expect().await, GuiCommand::position_fen(fen));
        assert_eq!(self.expect().await, GuiCommand::Go(GoOptions::depth(depth)));
    }
}

struct FakeLauncher {
    engines: mpsc::UnboundedSender<ScriptedEngine>,
    fail: bool,
}

impl EngineLauncher for FakeLauncher {
    fn launch(&self, config: &EngineConfig) -> Result<EngineHandle, EngineError> {
        if self.fail {
            return Err(EngineError::NotFound(config.path.display().to_string()));
        }
        let (commands, input) = mpsc::unbounded_channel();
        let (output_tx, output) = mpsc::unbounded_channel();
        let _ = self.engines.send(ScriptedEngine {
            input,
            output: output_tx,
        });
        Ok(EngineHandle {
            commands,
            output,
            child: None,
        })
    }
}

fn config() -> EngineConfig {
    EngineConfig {
        path: PathBuf::from("scripted"),
        num_lines: 2,
        search_depth: 10,
        ..EngineConfig::default()
    }
}

fn spawn(
    fail: bool,
) -> (
    EngineSession,
    mpsc::UnboundedReceiver<SessionEvent>,
    mpsc::UnboundedReceiver<ScriptedEngine>,
) {
    let (engines_tx, engines) = mpsc::unbounded_channel();
    let (session, events) = EngineSession::spawn(FakeLauncher {
        engines: engines_tx,
        fail,
    });
    (session, events, engines)
}

async fn next_eval(events: &mut mpsc::UnboundedReceiver<SessionEvent>) -> chess_analysis::EvalSnapshot {
    match events.recv().await {
        Some(SessionEvent::Eval(snapshot)) => snapshot,
        other => panic!("expected an evaluation, got {:?}", other),
    }
}

#[tokio::test]
async fn test_handshake_then_search() {
    let (session, mut events, mut engines) = spawn(false);
    session.init(config());
    // Requested before the engine is ready: remembered.
    session.analyze(START);

    let mut engine = engines.recv().await.unwrap();
    engine.handshake(2, 32).await;
    assert_eq!(events.recv().await, Some(SessionEvent::Ready));

    engine.expect_search(START, 10).await;
    assert_eq!(*session.state().borrow(), EngineSessionState::Analyzing);

    engine.say("info depth 1 seldepth 1 multipv 1 score cp 20 nodes 20 pv e2e4");
    engine.say("info depth 1 seldepth 1 multipv 2 score cp 15 nodes 40 pv d2d4");
    engine.say("info depth 2 seldepth 2 multipv 1 score cp 25 lowerbound nodes 90 pv e2e4");
    engine.say("info depth 2 seldepth 3 multipv 1 score mate 4 nodes 120 pv e2e4 e7e5");
    engine.say("bestmove e2e4 ponder e7e5");

    let first = next_eval(&mut events).await;
    assert_eq!((first.depth, first.lines.len(), first.complete), (1, 1, false));
    let second = next_eval(&mut events).await;
    assert_eq!((second.depth, second.lines.len()), (1, 2));
    let third = next_eval(&mut events).await;
    assert_eq!(third.depth, 2);
    assert_eq!(third.lines[0].evaluation, Evaluation::Mate(4));

    let done = next_eval(&mut events).await;
    assert!(done.complete);
    assert_eq!(done.fen, START);
    assert_eq!(done.depth, 2);
    assert_eq!(done.lines.len(), 2);

    let mut state = session.state();
    state
        .wait_for(|s| *s == EngineSessionState::Ready)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_new_target_supersedes_running_search() {
    let (session, mut events, mut engines) = spawn(false);
    session.init(config());
    let mut engine = engines.recv().await.unwrap();
    engine.handshake(2, 32).await;
    assert_eq!(events.recv().await, Some(SessionEvent::Ready));

    session.analyze(START);
    engine.expect_search(START, 10).await;

    session.analyze(AFTER_E4);
    assert_eq!(engine.expect().await, GuiCommand::Stop);
    // Supersedes the queued position without another stop.
    session.analyze(AFTER_D4);

    engine.say("info depth 5 multipv 1 score cp 30 pv e2e4");
    engine.say("bestmove e2e4");
    assert_eq!(next_eval(&mut events).await.fen, START);
    let stale = next_eval(&mut events).await;
    assert!(stale.complete);
    assert_eq!(stale.fen, START);

    assert_eq!(engine.expect().await, GuiCommand::IsReady);
    engine.say("readyok");
    engine.expect_search(AFTER_D4, 10).await;
}

#[tokio::test]
async fn test_same_target_is_not_searched_twice() {
    let (session, mut events, mut engines) = spawn(false);
    session.init(config());
    let mut engine = engines.recv().await.unwrap();
    engine.handshake(2, 32).await;
    assert_eq!(events.recv().await, Some(SessionEvent::Ready));

    session.analyze(START);
    session.analyze(START);
    engine.expect_search(START, 10).await;

    // The next thing the engine sees is the stop, not a second search.
    session.stop();
    assert_eq!(engine.expect().await, GuiCommand::Stop);

    // After a stop the same position may be searched again.
    session.analyze(START);
    engine.say("bestmove e2e4");
    assert!(next_eval(&mut events).await.complete);
    assert_eq!(engine.expect().await, GuiCommand::IsReady);
    engine.say("readyok");
    engine.expect_search(START, 10).await;
}

#[tokio::test(start_paused = true)]
async fn test_crash_restarts_and_resubmits() {
    let (session, mut events, mut engines) = spawn(false);
    session.init(config());
    let mut engine = engines.recv().await.unwrap();
    engine.handshake(2, 32).await;
    assert_eq!(events.recv().await, Some(SessionEvent::Ready));

    session.analyze(AFTER_E4);
    engine.expect_search(AFTER_E4, 10).await;
    drop(engine);

    assert_eq!(
        events.recv().await,
        Some(SessionEvent::Error {
            message: "Engine crashed, restarting".to_string(),
            recovering: true,
        })
    );

    let started = tokio::time::Instant::now();
    let mut engine = engines.recv().await.unwrap();
    assert!(started.elapsed() >= std::time::Duration::from_millis(1000));

    engine.handshake(2, 32).await;
    assert_eq!(events.recv().await, Some(SessionEvent::Ready));
    engine.expect_search(AFTER_E4, 10).await;
}

#[tokio::test]
async fn test_init_failure_is_reported_once() {
    let (session, mut events, _engines) = spawn(true);
    session.init(config());

    match events.recv().await {
        Some(SessionEvent::Error {
            message,
            recovering,
        }) => {
            assert_eq!(message, "Init failed: Engine not found at path: scripted");
            assert!(!recovering);
        }
        other => panic!("expected an error, got {:?}", other),
    }
    let mut state = session.state();
    state
        .wait_for(|s| *s == EngineSessionState::Error)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_destroy_is_idempotent() {
    let (session, mut events, mut engines) = spawn(false);
    session.init(config());
    let mut engine = engines.recv().await.unwrap();
    engine.handshake(2, 32).await;
    assert_eq!(events.recv().await, Some(SessionEvent::Ready));

    session.destroy();
    session.destroy();
    assert_eq!(engine.expect().await, GuiCommand::Quit);
    let mut state = session.state();
    state
        .wait_for(|s| *s == EngineSessionState::Idle)
        .await
        .unwrap();

    // A destroyed session can be started again.
    session.init(config());
    let mut engine = engines.recv().await.unwrap();
    engine.handshake(2, 32).await;
    assert_eq!(events.recv().await, Some(SessionEvent::Ready));

    session.shutdown().await;
    assert_eq!(engine.expect().await, GuiCommand::Quit);
}

#[tokio::test]
async fn test_process_launcher_missing_binary() {
    let config = EngineConfig {
        path: PathBuf::from("/nonexistent/stockfish"),
        ..EngineConfig::default()
    };
    let result = ProcessLauncher.launch(&config);
    assert!(matches!(result, Err(EngineError::NotFound(_))));
}
