//! Live analysis against a real engine.
//!
//! These tests require Stockfish to be installed and available in PATH.
//! Run with: `cargo test -p chess-analysis --test stockfish -- --ignored`

use chess_analysis::{
    EngineConfig, EngineSession, EngineSessionState, ProcessLauncher, SessionEvent,
};
use std::time::Duration;

const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Check if Stockfish is available in PATH.
fn stockfish_available() -> bool {
    std::process::Command::new("stockfish")
        .arg("--version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .is_ok()
}

#[tokio::test]
#[ignore = "requires Stockfish"]
async fn test_stockfish_multipv_search() {
    if !stockfish_available() {
        eprintln!("Skipping test: Stockfish not available");
        return;
    }

    let config = EngineConfig {
        num_lines: 3,
        search_depth: 12,
        hash_mb: 16,
        ..EngineConfig::default()
    };
    let (session, mut events) = EngineSession::spawn(ProcessLauncher);
    session.init(config);
    session.analyze(START);

    let complete = tokio::time::timeout(Duration::from_secs(60), async {
        let mut last_depth = 0;
        while let Some(event) = events.recv().await {
            match event {
                SessionEvent::Ready => {}
                SessionEvent::Eval(snapshot) if snapshot.complete => return snapshot,
                SessionEvent::Eval(snapshot) => {
                    assert_eq!(snapshot.fen, START);
                    last_depth = last_depth.max(snapshot.depth);
                }
                SessionEvent::Error { message, .. } => panic!("engine error: {}", message),
            }
        }
        panic!("session ended after depth {}", last_depth);
    })
    .await
    .expect("Stockfish did not finish in time");

    assert!(complete.depth >= 12, "depth {}", complete.depth);
    assert_eq!(complete.lines.len(), 3);
    assert!(complete.lines.iter().all(|l| !l.pv.is_empty()));
    assert_eq!(*session.state().borrow(), EngineSessionState::Ready);

    session.shutdown().await;
}
