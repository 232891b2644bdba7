//! Supervised UCI engine session.
//!
//! An [`EngineSession`] is a handle to one tokio task that owns the engine.
//! The task drives the handshake, tracks the active search target, turns
//! `info` lines into [`EvalSnapshot`]s and restarts the engine once after a
//! crash. Process plumbing sits behind [`EngineLauncher`] so tests can plug
//! in a scripted engine.

use crate::config::EngineConfig;
use crate::evaluation::EvalSnapshot;
use crate::tracker::SearchTracker;
use std::process::Stdio;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant};
use tracing::{debug, info, warn};
use uci::{EngineMessage, GoOptions, GuiCommand};

/// How long a quitting engine gets before it is killed.
const QUIT_GRACE: Duration = Duration::from_millis(100);

/// Errors that can occur when starting an engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Failed to spawn the engine process.
    #[error("Failed to spawn engine: {0}")]
    SpawnError(#[from] std::io::Error),
    /// Engine executable was not found at the specified path.
    #[error("Engine not found at path: {0}")]
    NotFound(String),
    /// The process started but its pipes could not be attached.
    #[error("Engine initialization failed")]
    InitFailed,
}

/// One item read from the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineOutput {
    Line(String),
    /// End of output or an IO fault; the engine is gone.
    Exited,
}

/// A launched engine: a line sink, a line source and the process, if any.
pub struct EngineHandle {
    pub commands: mpsc::UnboundedSender<String>,
    pub output: mpsc::UnboundedReceiver<EngineOutput>,
    pub child: Option<Child>,
}

/// Starts engines for a session.
pub trait EngineLauncher: Send + 'static {
    fn launch(&self, config: &EngineConfig) -> Result<EngineHandle, EngineError>;
}

/// Launches a UCI executable as a child process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLauncher;

impl EngineLauncher for ProcessLauncher {
    fn launch(&self, config: &EngineConfig) -> Result<EngineHandle, EngineError> {
        let mut child = Command::new(&config.path)
            .args(&config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    EngineError::NotFound(config.path.display().to_string())
                }
                _ => EngineError::SpawnError(e),
            })?;

        let mut stdin = child.stdin.take().ok_or(EngineError::InitFailed)?;
        let stdout = child.stdout.take().ok_or(EngineError::InitFailed)?;

        let (commands, mut command_rx) = mpsc::unbounded_channel::<String>();
        let (output_tx, output) = mpsc::unbounded_channel();

        // Task to write to stdin
        tokio::spawn(async move {
            while let Some(cmd) = command_rx.recv().await {
                if stdin.write_all(cmd.as_bytes()).await.is_err() {
                    break;
                }
                if stdin.write_all(b"\n").await.is_err() {
                    break;
                }
                if stdin.flush().await.is_err() {
                    break;
                }
            }
        });

        // Task to read from stdout
        tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                if output_tx.send(EngineOutput::Line(line)).is_err() {
                    return;
                }
            }
            let _ = output_tx.send(EngineOutput::Exited);
        });

        Ok(EngineHandle {
            commands,
            output,
            child: Some(child),
        })
    }
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineSessionState {
    Idle,
    Initializing,
    Ready,
    Analyzing,
    Error,
}

/// Events published by a session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Handshake finished.
    Ready,
    /// A snapshot of the current search; the last one has `complete` set.
    Eval(EvalSnapshot),
    /// `recovering` is set when the session will restart the engine itself.
    Error { message: String, recovering: bool },
}

#[derive(Debug)]
enum SessionCommand {
    Init(EngineConfig),
    Analyze(String),
    Stop,
    Destroy,
}

/// Handle to a running session task.
///
/// All methods are non-blocking; results arrive on the event receiver
/// returned by [`EngineSession::spawn`].
pub struct EngineSession {
    commands: mpsc::UnboundedSender<SessionCommand>,
    state: watch::Receiver<EngineSessionState>,
    task: JoinHandle<()>,
}

impl EngineSession {
    /// Starts the session task. The engine itself is not launched until
    /// [`EngineSession::init`].
    pub fn spawn<L: EngineLauncher>(launcher: L) -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (commands, command_rx) = mpsc::unbounded_channel();
        let (events, event_rx) = mpsc::unbounded_channel();
        let (state_tx, state) = watch::channel(EngineSessionState::Idle);

        let actor = SessionActor::new(launcher, state_tx, events);
        let task = tokio::spawn(actor.run(command_rx));

        (
            Self {
                commands,
                state,
                task,
            },
            event_rx,
        )
    }

    /// Launches the engine and performs the handshake.
    ///
    /// Ignored unless the session is `Idle` or `Error`.
    pub fn init(&self, config: EngineConfig) {
        self.send(SessionCommand::Init(config));
    }

    /// Makes `fen` the search target.
    pub fn analyze(&self, fen: &str) {
        self.send(SessionCommand::Analyze(fen.to_string()));
    }

    /// Asks the engine to end the current search early.
    pub fn stop(&self) {
        self.send(SessionCommand::Stop);
    }

    /// Quits the engine and returns to `Idle`.
    pub fn destroy(&self) {
        self.send(SessionCommand::Destroy);
    }

    /// Watch channel carrying the current state.
    pub fn state(&self) -> watch::Receiver<EngineSessionState> {
        self.state.clone()
    }

    /// Destroys the engine and waits for the session task to finish.
    pub async fn shutdown(self) {
        let Self { commands, task, .. } = self;
        let _ = commands.send(SessionCommand::Destroy);
        drop(commands);
        let _ = task.await;
    }

    fn send(&self, command: SessionCommand) {
        if self.commands.send(command).is_err() {
            warn!("engine session task has stopped");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadyWait {
    Handshake,
    /// Sync before starting a queued search.
    Resume,
}

enum Step {
    Command(SessionCommand),
    Closed,
    Output(EngineOutput),
    Recover,
}

struct SessionActor<L> {
    launcher: L,
    config: Option<EngineConfig>,
    engine: Option<mpsc::UnboundedSender<String>>,
    output: Option<mpsc::UnboundedReceiver<EngineOutput>>,
    child: Option<Child>,
    state: watch::Sender<EngineSessionState>,
    events: mpsc::UnboundedSender<SessionEvent>,
    awaiting: Option<ReadyWait>,
    /// Latest requested position.
    target: Option<String>,
    /// Set by `stop()`; the next `analyze` of the same target searches again.
    interrupted: bool,
    /// Search to start once the engine is free.
    pending: Option<String>,
    search: Option<SearchTracker>,
    stop_sent: bool,
    recovering: bool,
    recovery_at: Option<Instant>,
    faulted: bool,
}

impl<L: EngineLauncher> SessionActor<L> {
    fn new(
        launcher: L,
        state: watch::Sender<EngineSessionState>,
        events: mpsc::UnboundedSender<SessionEvent>,
    ) -> Self {
        Self {
            launcher,
            config: None,
            engine: None,
            output: None,
            child: None,
            state,
            events,
            awaiting: None,
            target: None,
            interrupted: false,
            pending: None,
            search: None,
            stop_sent: false,
            recovering: false,
            recovery_at: None,
            faulted: false,
        }
    }

    async fn run(mut self, mut commands: mpsc::UnboundedReceiver<SessionCommand>) {
        loop {
            let step = tokio::select! {
                cmd = commands.recv() => match cmd {
                    Some(cmd) => Step::Command(cmd),
                    None => Step::Closed,
                },
                out = next_output(&mut self.output) => Step::Output(out),
                () = recovery_timer(self.recovery_at) => Step::Recover,
            };

            match step {
                Step::Command(cmd) => self.on_command(cmd),
                Step::Closed => break,
                Step::Output(out) => self.on_output(out),
                Step::Recover => {
                    info!("restarting engine");
                    self.recovery_at = None;
                    self.start();
                }
            }

            if self.faulted {
                self.faulted = false;
                self.on_fault();
            }
        }
        self.destroy();
    }

    fn current(&self) -> EngineSessionState {
        *self.state.borrow()
    }

    fn set_state(&self, next: EngineSessionState) {
        let previous = self.state.send_replace(next);
        if previous != next {
            debug!(from = ?previous, to = ?next, "engine session state");
        }
    }

    fn emit(&self, event: SessionEvent) {
        let _ = self.events.send(event);
    }

    fn send(&mut self, command: GuiCommand) {
        let line = command.to_uci();
        if let Some(engine) = &self.engine {
            debug!(command = %line, "to engine");
            if engine.send(line).is_err() {
                self.faulted = true;
            }
        }
    }

    fn on_command(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::Init(config) => {
                self.config = Some(config);
                self.start();
            }
            SessionCommand::Analyze(fen) => self.analyze(fen),
            SessionCommand::Stop => self.stop(),
            SessionCommand::Destroy => self.destroy(),
        }
    }

    fn start(&mut self) {
        let state = self.current();
        if !matches!(state, EngineSessionState::Idle | EngineSessionState::Error) {
            warn!(?state, "init ignored, engine already running");
            return;
        }
        let Some(config) = self.config.clone() else {
            return;
        };
        self.recovering = false;
        self.recovery_at = None;
        self.set_state(EngineSessionState::Initializing);

        let handle = match self.launcher.launch(&config) {
            Ok(handle) => handle,
            Err(e) => {
                warn!(error = %e, "engine launch failed");
                self.set_state(EngineSessionState::Error);
                self.emit(SessionEvent::Error {
                    message: format!("Init failed: {e}"),
                    recovering: false,
                });
                return;
            }
        };
        info!(path = %config.path.display(), "engine launched");
        self.engine = Some(handle.commands);
        self.output = Some(handle.output);
        self.child = handle.child;

        self.send(GuiCommand::Uci);
        self.send(GuiCommand::set_option("MultiPV", config.num_lines));
        self.send(GuiCommand::set_option("Hash", config.hash_mb));
        self.send(GuiCommand::IsReady);
        self.awaiting = Some(ReadyWait::Handshake);
    }

    fn analyze(&mut self, fen: String) {
        if self.target.as_deref() == Some(fen.as_str()) && !self.interrupted {
            debug!(%fen, "already the analysis target");
            return;
        }
        self.target = Some(fen.clone());
        self.interrupted = false;

        match self.current() {
            EngineSessionState::Ready if self.awaiting.is_none() => self.start_search(fen),
            EngineSessionState::Analyzing => {
                self.pending = Some(fen);
                if !self.stop_sent {
                    self.send(GuiCommand::Stop);
                    self.stop_sent = true;
                }
            }
            _ => self.pending = Some(fen),
        }
    }

    fn stop(&mut self) {
        self.pending = None;
        if self.target.is_some() {
            self.interrupted = true;
        }
        if self.search.is_some() && !self.stop_sent {
            self.send(GuiCommand::Stop);
            self.stop_sent = true;
        }
    }

    fn destroy(&mut self) {
        self.teardown();
        self.target = None;
        self.pending = None;
        self.interrupted = false;
        self.recovering = false;
        self.recovery_at = None;
        self.set_state(EngineSessionState::Idle);
    }

    fn teardown(&mut self) {
        if let Some(engine) = self.engine.take() {
            let _ = engine.send(GuiCommand::Quit.to_uci());
        }
        self.output = None;
        if let Some(mut child) = self.child.take() {
            tokio::spawn(async move {
                if tokio::time::timeout(QUIT_GRACE, child.wait()).await.is_err() {
                    let _ = child.kill().await;
                }
            });
        }
        self.search = None;
        self.awaiting = None;
        self.stop_sent = false;
    }

    fn start_search(&mut self, fen: String) {
        let Some((num_lines, depth)) = self
            .config
            .as_ref()
            .map(|c| (c.num_lines, c.search_depth))
        else {
            return;
        };
        debug!(%fen, depth, "starting search");
        self.search = Some(SearchTracker::new(fen.clone(), num_lines));
        self.stop_sent = false;
        self.send(GuiCommand::position_fen(&fen));
        self.send(GuiCommand::Go(GoOptions::depth(depth)));
        self.set_state(EngineSessionState::Analyzing);
    }

    fn on_output(&mut self, output: EngineOutput) {
        match output {
            EngineOutput::Line(line) => self.on_line(&line),
            EngineOutput::Exited => self.faulted = true,
        }
    }

    fn on_line(&mut self, line: &str) {
        let message = match EngineMessage::parse(line) {
            Ok(message) => message,
            Err(e) => {
                debug!(%line, error = %e, "skipping engine line");
                return;
            }
        };

        match message {
            EngineMessage::ReadyOk => self.on_ready(),
            EngineMessage::Info(info) => {
                let snapshot = self.search.as_mut().and_then(|s| s.on_info(&info));
                if let Some(snapshot) = snapshot {
                    self.emit(SessionEvent::Eval(snapshot));
                }
            }
            EngineMessage::BestMove { mv, .. } => self.on_best_move(&mv),
            EngineMessage::Id {
                name: Some(name), ..
            } => info!(engine = %name, "engine identified"),
            EngineMessage::Id { .. } | EngineMessage::UciOk | EngineMessage::Other(_) => {}
        }
    }

    fn on_ready(&mut self) {
        match self.awaiting.take() {
            Some(ReadyWait::Handshake) => {
                info!("engine ready");
                self.set_state(EngineSessionState::Ready);
                self.emit(SessionEvent::Ready);
            }
            Some(ReadyWait::Resume) => {}
            None => {
                debug!("unsolicited readyok");
                return;
            }
        }
        if let Some(fen) = self.pending.take() {
            self.start_search(fen);
        }
    }

    fn on_best_move(&mut self, best: &str) {
        let Some(search) = self.search.take() else {
            debug!(best, "bestmove without a search");
            return;
        };
        let snapshot = search.finish();
        debug!(fen = %snapshot.fen, depth = snapshot.depth, best, "search complete");
        self.stop_sent = false;
        self.set_state(EngineSessionState::Ready);
        self.emit(SessionEvent::Eval(snapshot));

        if self.pending.is_some() {
            self.send(GuiCommand::IsReady);
            self.awaiting = Some(ReadyWait::Resume);
        }
    }

    fn on_fault(&mut self) {
        let state = self.current();
        if !matches!(
            state,
            EngineSessionState::Initializing
                | EngineSessionState::Ready
                | EngineSessionState::Analyzing
        ) {
            return;
        }
        if self.recovering {
            debug!("recovery already scheduled");
            return;
        }
        self.recovering = true;

        let resubmit = self.target.clone().filter(|_| !self.interrupted);
        warn!(?state, fen = ?resubmit, "engine crashed");
        self.set_state(EngineSessionState::Error);
        self.emit(SessionEvent::Error {
            message: "Engine crashed, restarting".to_string(),
            recovering: true,
        });

        self.teardown();
        self.set_state(EngineSessionState::Idle);
        self.pending = resubmit;

        let delay = self
            .config
            .as_ref()
            .map(EngineConfig::recovery_delay)
            .unwrap_or_default();
        self.recovery_at = Some(Instant::now() + delay);
    }
}

async fn next_output(output: &mut Option<mpsc::UnboundedReceiver<EngineOutput>>) -> EngineOutput {
    match output {
        Some(rx) => rx.recv().await.unwrap_or(EngineOutput::Exited),
        None => std::future::pending().await,
    }
}

async fn recovery_timer(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
