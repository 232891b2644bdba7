//! FEN (Forsyth-Edwards Notation) parsing and serialization.

use crate::{Board, CastlingRights, Color, Piece, Position, Square};
use thiserror::Error;

/// The standard starting position FEN.
pub const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),
}

/// Encodes the placement field: ranks 8 to 1 joined by `/`, runs of empty
/// squares collapsed to a single digit.
pub fn encode_placement(board: &Board) -> String {
    let mut out = String::with_capacity(72);
    for (i, row) in board.rows().iter().enumerate() {
        if i > 0 {
            out.push('/');
        }
        let mut empty = 0u8;
        for cell in row {
            match cell {
                Some(piece) => {
                    if empty > 0 {
                        out.push((b'0' + empty) as char);
                        empty = 0;
                    }
                    out.push(piece.to_fen_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push((b'0' + empty) as char);
        }
    }
    out
}

/// Encodes a full six-field FEN. The halfmove clock is always written as `0`.
pub fn encode_fen(
    board: &Board,
    turn: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    fullmove: u32,
) -> String {
    let ep = en_passant.map_or_else(|| "-".to_string(), |sq| sq.to_algebraic());
    format!(
        "{} {} {} {} 0 {}",
        encode_placement(board),
        turn.to_fen_char(),
        castling,
        ep,
        fullmove
    )
}

impl Position {
    /// Parses a FEN string into a position.
    ///
    /// The halfmove clock is validated but not kept; `ply` is derived from the
    /// fullmove number and side to move.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 6 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let board = parse_placement(parts[0])?;

        let side_to_move = Color::from_fen(parts[1])
            .ok_or_else(|| FenError::InvalidActiveColor(parts[1].to_string()))?;

        let castling = CastlingRights::from_fen(parts[2])
            .ok_or_else(|| FenError::InvalidCastlingRights(parts[2].to_string()))?;

        let en_passant = parse_en_passant(parts[3])?;

        parts[4]
            .parse::<u32>()
            .map_err(|_| FenError::InvalidHalfmoveClock(parts[4].to_string()))?;

        let fullmove = parts[5]
            .parse::<u32>()
            .map_err(|_| FenError::InvalidFullmoveNumber(parts[5].to_string()))?;

        Ok(Position {
            board,
            side_to_move,
            castling,
            en_passant,
            fullmove,
            ply: Position::ply_from_fullmove(fullmove, side_to_move),
        })
    }
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidPiecePlacement(format!(
            "expected 8 ranks, got {}",
            ranks.len()
        )));
    }

    let mut board = Board::empty();
    for (i, rank) in ranks.iter().enumerate() {
        let mut file = 0u32;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip;
            } else if let Some(piece) = Piece::from_fen_char(c) {
                if let Some(sq) = Square::from_coords(file as i8, 7 - i as i8) {
                    board.set(sq, Some(piece));
                }
                file += 1;
            } else {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "invalid character '{}' in rank {}",
                    c,
                    8 - i
                )));
            }
            if file > 8 {
                break;
            }
        }
        if file != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "rank {} has {} squares, expected 8",
                8 - i,
                file
            )));
        }
    }

    Ok(board)
}

fn parse_en_passant(ep: &str) -> Result<Option<Square>, FenError> {
    if ep == "-" {
        return Ok(None);
    }
    match Square::from_algebraic(ep) {
        Some(sq) if matches!(sq.rank().to_char(), '3' | '6') => Ok(Some(sq)),
        _ => Err(FenError::InvalidEnPassantSquare(ep.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PieceKind;
    use proptest::prelude::*;

    #[test]
    fn parse_startpos() {
        let pos = Position::from_fen(STARTPOS).unwrap();
        assert_eq!(pos.side_to_move, Color::White);
        assert_eq!(pos.castling, CastlingRights::ALL);
        assert_eq!(pos.en_passant, None);
        assert_eq!(pos.fullmove, 1);
        assert_eq!(pos.to_fen(), STARTPOS);
    }

    #[test]
    fn parse_custom_position() {
        let pos =
            Position::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 2 3")
                .unwrap();
        assert_eq!(pos.side_to_move, Color::Black);
        assert_eq!(pos.fullmove, 3);
        assert_eq!(pos.ply, 5);
        assert_eq!(
            pos.board.get(Square::from_algebraic("f3").unwrap()),
            Some(Piece::new(PieceKind::Knight, Color::White))
        );
    }

    #[test]
    fn halfmove_clock_is_always_zero_on_output() {
        let pos =
            Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 7 1")
                .unwrap();
        assert_eq!(
            pos.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
    }

    #[test]
    fn encode_collapses_empty_runs() {
        let mut board = Board::empty();
        board.set(Square::E1, Some(Piece::new(PieceKind::King, Color::White)));
        board.set(Square::H8, Some(Piece::new(PieceKind::King, Color::Black)));
        let fen = encode_fen(&board, Color::Black, CastlingRights::NONE, None, 42);
        assert_eq!(fen, "7k/8/8/8/8/8/8/4K3 b - - 0 42");
    }

    #[test]
    fn encode_empty_board() {
        let fen = encode_fen(&Board::empty(), Color::White, CastlingRights::NONE, None, 1);
        assert_eq!(fen, "8/8/8/8/8/8/8/8 w - - 0 1");
    }

    #[test]
    fn invalid_fen() {
        assert!(matches!(
            Position::from_fen("invalid"),
            Err(FenError::InvalidPartCount(1))
        ));
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8/8 x KQkq - 0 1"),
            Err(FenError::InvalidActiveColor(_))
        ));
    }

    #[test]
    fn invalid_piece_placement() {
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8 w KQkq - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            Position::from_fen("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            Position::from_fen("7/8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn invalid_side_fields() {
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8/8 w XYZ - 0 1"),
            Err(FenError::InvalidCastlingRights(_))
        ));
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8/8 w - e4 0 1"),
            Err(FenError::InvalidEnPassantSquare(_))
        ));
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8/8 w - x3 0 1"),
            Err(FenError::InvalidEnPassantSquare(_))
        ));
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8/8 w - - abc 1"),
            Err(FenError::InvalidHalfmoveClock(_))
        ));
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8/8 w - - 0 xyz"),
            Err(FenError::InvalidFullmoveNumber(_))
        ));
    }

    #[test]
    fn fen_error_display() {
        let err = FenError::InvalidPartCount(3);
        assert!(format!("{}", err).contains("3"));

        let err = FenError::InvalidEnPassantSquare("z9".to_string());
        assert!(format!("{}", err).contains("z9"));
    }

    fn arb_board() -> impl Strategy<Value = Board> {
        prop::collection::vec(prop::option::weighted(0.3, 0usize..12), 64).prop_map(|cells| {
            let mut board = Board::empty();
            for (i, cell) in cells.into_iter().enumerate() {
                if let Some(code) = cell {
                    let piece = Piece::from_fen_char(b"PNBRQKpnbrqk"[code] as char);
                    board.set(Square::from_index(i as u8).unwrap(), piece);
                }
            }
            board
        })
    }

    proptest! {
        #[test]
        fn encode_always_has_eight_rank_groups(board in arb_board(), black in any::<bool>()) {
            let turn = if black { Color::Black } else { Color::White };
            let fen = encode_fen(&board, turn, CastlingRights::NONE, None, 1);
            let placement = fen.split(' ').next().unwrap();
            prop_assert_eq!(placement.split('/').count(), 8);
        }

        #[test]
        fn encode_parse_keeps_board(board in arb_board()) {
            let fen = encode_fen(&board, Color::White, CastlingRights::ALL, None, 5);
            let parsed = Position::from_fen(&fen).unwrap();
            prop_assert_eq!(parsed.board, board);
        }
    }
}
