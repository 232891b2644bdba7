//! Live Analysis - follows a game and prints engine analysis.
//!
//! Reads one FEN per line from stdin, keeps a UCI engine analyzing the
//! latest position and prints one line per analysis event on stdout. Logs
//! go to stderr.

mod input;
mod output;

use anyhow::Context;
use chess_analysis::{
    position_feed, AnalysisConfig, AnalysisCoordinator, Control, EngineSession, ProcessLauncher,
};
use chess_core::Position;
use chess_openings::OpeningBook;
use clap::Parser;
use input::{parse_line, reconfigured, Input};
use output::Printer;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tokio::sync::mpsc;

/// Live Analysis - engine analysis of positions read from stdin.
#[derive(Parser)]
#[command(name = "live-analysis")]
#[command(about = "Live engine analysis of positions read from stdin")]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// UCI engine executable
    #[arg(long)]
    engine: Option<PathBuf>,

    /// Search depth
    #[arg(long)]
    depth: Option<u32>,

    /// Number of engine lines
    #[arg(long)]
    lines: Option<usize>,

    /// Write an annotated PGN of the game here on exit
    #[arg(long)]
    pgn: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Command-line flags take precedence over the configuration file.
    fn apply(&self, config: &mut AnalysisConfig) {
        if let Some(engine) = &self.engine {
            config.engine.path = engine.clone();
        }
        if let Some(depth) = self.depth {
            config.engine.search_depth = depth;
        }
        if let Some(lines) = self.lines {
            config.engine.num_lines = lines;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run(args));
    // The stdin reader may be parked in a blocking read.
    runtime.shutdown_background();
    result
}

async fn run(args: Args) -> anyhow::Result<()> {
    let mut config =
        AnalysisConfig::load_or_default(args.config.as_deref()).context("loading config")?;
    args.apply(&mut config);
    config.validate()?;

    let mut openings = OpeningBook::builtin();
    if let Some(path) = &config.openings {
        let added = openings
            .extend_from_file(path)
            .with_context(|| format!("loading openings from {}", path.display()))?;
        tracing::info!("Loaded {} openings from {:?}", added, path);
    }

    tracing::info!("Engine: {:?}", config.engine.path);
    tracing::info!(
        "Depth {}, {} lines",
        config.engine.search_depth,
        config.engine.num_lines
    );

    let (session, session_events) = EngineSession::spawn(ProcessLauncher);
    session.init(config.engine.clone());

    let (feed, adapter) = position_feed(Position::starting());
    let (control_tx, control_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    // Stdin: positions go to the feed, commands become control messages.
    // Dropping the feed at EOF lets the coordinator finish and exit.
    let reader_controls = control_tx.clone();
    let mut reader_config = config.clone();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            match parse_line(&line) {
                Ok(Input::Position(position)) => {
                    if !feed.push(position) {
                        break;
                    }
                }
                Ok(input @ (Input::Depth(_) | Input::Lines(_))) => {
                    match reconfigured(&reader_config, &input) {
                        Ok(Some(next)) => {
                            reader_config = next;
                            let _ = reader_controls.send(Control::Reconfigure(reader_config.clone()));
                        }
                        Ok(None) => {}
                        Err(e) => tracing::warn!("Keeping current settings: {:#}", e),
                    }
                }
                Ok(Input::Quit) => {
                    let _ = reader_controls.send(Control::Shutdown);
                    break;
                }
                Ok(Input::Blank) => {}
                Err(e) => tracing::warn!("Ignoring input: {:#}", e),
            }
        }
        tracing::debug!("stdin closed");
    });

    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            let _ = control_tx.send(Control::Shutdown);
        }
    });

    let printer = tokio::spawn(async move {
        let mut printer = Printer::default();
        while let Some(event) = event_rx.recv().await {
            if let Some(line) = printer.format(&event) {
                println!("{}", line);
            }
        }
    });

    let coordinator = AnalysisCoordinator::new(session, config, Arc::new(openings));
    let coordinator = coordinator
        .run(adapter, session_events, control_rx, event_tx)
        .await;
    let _ = printer.await;

    if let Some(path) = &args.pgn {
        std::fs::write(path, coordinator.pgn().export())
            .with_context(|| format!("writing PGN to {}", path.display()))?;
        tracing::info!("Wrote PGN to {:?}", path);
    }

    coordinator.into_backend().shutdown().await;
    Ok(())
}
