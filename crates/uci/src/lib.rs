//! UCI (Universal Chess Interface) protocol library.
//!
//! This crate provides the text layer between a GUI-side driver and a UCI
//! engine: formatting and parsing of the commands a GUI sends, and parsing
//! and formatting of the messages an engine answers with.
//!
//! # Commands used by the analysis driver
//!
//! - `uci` / `uciok` - Initialize engine
//! - `setoption name <name> value <value>` - Configure MultiPV and Hash
//! - `isready` / `readyok` - Synchronization
//! - `position fen <fen>` - Set position
//! - `go depth <d>` - Start search
//! - `stop` - Stop search, answered by `bestmove`
//! - `quit` - Exit engine

mod command;
mod info;

pub use command::{GoOptions, GuiCommand};
pub use info::{EngineInfo, InfoBuilder, Score, ScoreBound};

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UciError {
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Messages sent from engine to GUI.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineMessage {
    /// Engine identification.
    Id {
        name: Option<String>,
        author: Option<String>,
    },
    /// UCI initialization complete.
    UciOk,
    /// Engine is ready.
    ReadyOk,
    /// Search information.
    Info(EngineInfo),
    /// Best move found; the search is over.
    BestMove { mv: String, ponder: Option<String> },
    /// Anything else (option declarations, banners, ...).
    Other(String),
}

impl EngineMessage {
    /// Parse one line of engine output.
    pub fn parse(line: &str) -> Result<Self, UciError> {
        let line = line.trim();
        let mut parts = line.split_whitespace();

        match parts.next().unwrap_or("") {
            "uciok" => Ok(EngineMessage::UciOk),
            "readyok" => Ok(EngineMessage::ReadyOk),
            "info" => EngineInfo::parse(line)
                .map(EngineMessage::Info)
                .ok_or_else(|| UciError::ParseError(line.to_string())),
            "bestmove" => {
                let mv = parts
                    .next()
                    .ok_or_else(|| UciError::ParseError("bestmove without a move".to_string()))?
                    .to_string();
                let ponder = match (parts.next(), parts.next()) {
                    (Some("ponder"), Some(p)) => Some(p.to_string()),
                    _ => None,
                };
                Ok(EngineMessage::BestMove { mv, ponder })
            }
            "id" => {
                let rest: Vec<&str> = parts.collect();
                match rest.split_first() {
                    Some((&"name", value)) => Ok(EngineMessage::Id {
                        name: Some(value.join(" ")),
                        author: None,
                    }),
                    Some((&"author", value)) => Ok(EngineMessage::Id {
                        name: None,
                        author: Some(value.join(" ")),
                    }),
                    _ => Ok(EngineMessage::Other(line.to_string())),
                }
            }
            _ => Ok(EngineMessage::Other(line.to_string())),
        }
    }
}
