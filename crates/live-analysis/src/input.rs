//! Lines read from stdin.

use anyhow::{bail, Context};
use chess_analysis::AnalysisConfig;
use chess_core::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Position(Position),
    Depth(u32),
    Lines(usize),
    Quit,
    Blank,
}

/// Parses one line: a FEN, or a `:depth N`, `:lines N` or `:quit` command.
pub fn parse_line(line: &str) -> anyhow::Result<Input> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Input::Blank);
    }

    let Some(command) = line.strip_prefix(':') else {
        let position = Position::from_fen(line).with_context(|| format!("bad FEN {:?}", line))?;
        return Ok(Input::Position(position));
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("depth"), Some(n)) => {
            let depth = n.parse().with_context(|| format!("bad depth {:?}", n))?;
            if depth == 0 {
                bail!("depth must be at least 1");
            }
            Ok(Input::Depth(depth))
        }
        (Some("lines"), Some(n)) => {
            let lines = n.parse().with_context(|| format!("bad line count {:?}", n))?;
            if lines == 0 {
                bail!("line count must be at least 1");
            }
            Ok(Input::Lines(lines))
        }
        (Some("quit"), None) => Ok(Input::Quit),
        _ => bail!("unknown command {:?}", line),
    }
}

/// The configuration a `:depth` or `:lines` command asks for, checked the
/// same way as the startup configuration. `None` for other inputs.
pub fn reconfigured(current: &AnalysisConfig, input: &Input) -> anyhow::Result<Option<AnalysisConfig>> {
    let mut next = current.clone();
    match *input {
        Input::Depth(depth) => next.engine.search_depth = depth,
        Input::Lines(lines) => next.engine.num_lines = lines,
        _ => return Ok(None),
    }
    next.validate()?;
    Ok(Some(next))
}
