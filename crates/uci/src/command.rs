//! UCI commands sent from GUI to engine: formatting and parsing.
//!
//! Only the subset an analysis driver needs is modelled. Positions are always
//! sent as a full FEN with no trailing move list.

use crate::UciError;

/// Commands sent from GUI to engine.
#[derive(Debug, Clone, PartialEq)]
pub enum GuiCommand {
    /// Initialize UCI mode.
    Uci,
    /// Set an engine option.
    SetOption { name: String, value: Option<String> },
    /// Check if engine is ready.
    IsReady,
    /// Set up the position to search.
    Position { fen: String },
    /// Start calculating.
    Go(GoOptions),
    /// Stop calculating.
    Stop,
    /// Quit the engine.
    Quit,
    /// Anything else, kept verbatim.
    Unknown(String),
}

/// Options for the `go` command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GoOptions {
    /// Search to this depth.
    pub depth: Option<u32>,
    /// Search until `stop`.
    pub infinite: bool,
}

impl GoOptions {
    /// Fixed-depth search.
    pub fn depth(depth: u32) -> Self {
        GoOptions {
            depth: Some(depth),
            infinite: false,
        }
    }
}

impl GuiCommand {
    /// `setoption name <name> value <value>`
    pub fn set_option(name: &str, value: impl ToString) -> Self {
        GuiCommand::SetOption {
            name: name.to_string(),
            value: Some(value.to_string()),
        }
    }

    /// `position fen <fen>`
    pub fn position_fen(fen: &str) -> Self {
        GuiCommand::Position {
            fen: fen.to_string(),
        }
    }

    /// Format for sending to the engine.
    pub fn to_uci(&self) -> String {
        match self {
            GuiCommand::Uci => "uci".to_string(),
            GuiCommand::SetOption { name, value } => match value {
                Some(v) => format!("setoption name {} value {}", name, v),
                None => format!("setoption name {}", name),
            },
            GuiCommand::IsReady => "isready".to_string(),
            GuiCommand::Position { fen } => format!("position fen {}", fen),
            GuiCommand::Go(opts) => {
                let mut out = "go".to_string();
                if let Some(d) = opts.depth {
                    out.push_str(&format!(" depth {}", d));
                }
                if opts.infinite {
                    out.push_str(" infinite");
                }
                out
            }
            GuiCommand::Stop => "stop".to_string(),
            GuiCommand::Quit => "quit".to_string(),
            GuiCommand::Unknown(s) => s.clone(),
        }
    }

    /// Parse a command line as an engine would receive it.
    pub fn parse(input: &str) -> Result<Self, UciError> {
        let input = input.trim();
        let mut parts = input.split_whitespace();

        match parts.next().unwrap_or("") {
            "uci" => Ok(GuiCommand::Uci),
            "isready" => Ok(GuiCommand::IsReady),
            "stop" => Ok(GuiCommand::Stop),
            "quit" => Ok(GuiCommand::Quit),
            "setoption" => Self::parse_setoption(parts),
            "position" => Self::parse_position(parts),
            "go" => Ok(GuiCommand::Go(Self::parse_go(parts))),
            _ => Ok(GuiCommand::Unknown(input.to_string())),
        }
    }

    fn parse_setoption<'a>(parts: impl Iterator<Item = &'a str>) -> Result<Self, UciError> {
        let parts: Vec<&str> = parts.collect();
        if parts.first() != Some(&"name") {
            return Err(UciError::ParseError(
                "Expected 'name' after setoption".to_string(),
            ));
        }
        let rest = &parts[1..];
        let (name, value) = match rest.iter().position(|&s| s == "value") {
            Some(idx) => (rest[..idx].join(" "), Some(rest[idx + 1..].join(" "))),
            None => (rest.join(" "), None),
        };
        if name.is_empty() {
            return Err(UciError::ParseError("Empty option name".to_string()));
        }
        Ok(GuiCommand::SetOption { name, value })
    }

    fn parse_position<'a>(mut parts: impl Iterator<Item = &'a str>) -> Result<Self, UciError> {
        if parts.next() != Some("fen") {
            return Err(UciError::ParseError(
                "Expected 'fen' after position".to_string(),
            ));
        }
        let fields: Vec<&str> = parts.collect();
        if fields.contains(&"moves") {
            return Err(UciError::ParseError(
                "Move lists after the FEN are not supported".to_string(),
            ));
        }
        if fields.is_empty() {
            return Err(UciError::ParseError("Empty FEN".to_string()));
        }
        Ok(GuiCommand::Position {
            fen: fields.join(" "),
        })
    }

    fn parse_go<'a>(mut parts: impl Iterator<Item = &'a str>) -> GoOptions {
        let mut opts = GoOptions::default();
        while let Some(token) = parts.next() {
            match token {
                "depth" => opts.depth = parts.next().and_then(|d| d.parse().ok()),
                "infinite" => opts.infinite = true,
                _ => {}
            }
        }
        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AFTER_E4: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";

    #[test]
    fn parse_handshake_commands() {
        assert_eq!(GuiCommand::parse("uci").unwrap(), GuiCommand::Uci);
        assert_eq!(GuiCommand::parse(" isready\n").unwrap(), GuiCommand::IsReady);
    }

    #[test]
    fn parse_setoption() {
        assert_eq!(
            GuiCommand::parse("setoption name MultiPV value 3").unwrap(),
            GuiCommand::set_option("MultiPV", 3)
        );
        assert_eq!(
            GuiCommand::parse("setoption name Clear Hash").unwrap(),
            GuiCommand::SetOption {
                name: "Clear Hash".to_string(),
                value: None
            }
        );
        assert!(GuiCommand::parse("setoption value 3").is_err());
    }

    #[test]
    fn parse_position_fen() {
        let cmd = GuiCommand::parse(&format!("position fen {}", AFTER_E4)).unwrap();
        assert_eq!(cmd, GuiCommand::position_fen(AFTER_E4));
    }

    #[test]
    fn position_needs_a_bare_fen() {
        assert!(GuiCommand::parse("position").is_err());
        assert!(GuiCommand::parse("position fen").is_err());
        assert!(GuiCommand::parse("position startpos").is_err());
        assert!(GuiCommand::parse(&format!("position fen {} moves e7e5", AFTER_E4)).is_err());
    }

    #[test]
    fn parse_go() {
        assert_eq!(
            GuiCommand::parse("go depth 10").unwrap(),
            GuiCommand::Go(GoOptions::depth(10))
        );
        assert_eq!(
            GuiCommand::parse("go infinite").unwrap(),
            GuiCommand::Go(GoOptions {
                depth: None,
                infinite: true
            })
        );
        assert_eq!(
            GuiCommand::parse("go depth x").unwrap(),
            GuiCommand::Go(GoOptions::default())
        );
    }

    #[test]
    fn format_handshake_and_search() {
        assert_eq!(GuiCommand::Uci.to_uci(), "uci");
        assert_eq!(
            GuiCommand::set_option("Hash", 32).to_uci(),
            "setoption name Hash value 32"
        );
        assert_eq!(GuiCommand::IsReady.to_uci(), "isready");
        assert_eq!(
            GuiCommand::position_fen("8/8/8/8/8/8/8/K6k w - - 0 1").to_uci(),
            "position fen 8/8/8/8/8/8/8/K6k w - - 0 1"
        );
        assert_eq!(GuiCommand::Go(GoOptions::depth(22)).to_uci(), "go depth 22");
        assert_eq!(GuiCommand::Stop.to_uci(), "stop");
        assert_eq!(GuiCommand::Quit.to_uci(), "quit");
    }

    #[test]
    fn formatted_commands_parse_back() {
        for cmd in [
            GuiCommand::position_fen(AFTER_E4),
            GuiCommand::set_option("MultiPV", 5),
            GuiCommand::Go(GoOptions::depth(18)),
        ] {
            assert_eq!(GuiCommand::parse(&cmd.to_uci()).unwrap(), cmd);
        }
    }

    #[test]
    fn unknown_commands_pass_through() {
        assert_eq!(
            GuiCommand::parse("ucinewgame").unwrap(),
            GuiCommand::Unknown("ucinewgame".to_string())
        );
        assert_eq!(GuiCommand::parse("").unwrap(), GuiCommand::Unknown(String::new()));
    }
}
