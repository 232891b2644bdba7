//! Host board interface.

use chess_core::{CastlingRights, Color, PlacedPiece, Position, Square};
use tokio::sync::{mpsc, watch};

/// What the analysis needs from whatever shows the game.
///
/// Reads describe the board as currently displayed. Change notifications
/// arrive on the channel returned by [`BoardAdapter::observe_changes`]; they
/// carry no data and may come in bursts.
pub trait BoardAdapter {
    fn read_pieces(&self) -> Vec<PlacedPiece>;

    /// Side to move as reported by the host; used when the board change
    /// alone does not reveal it.
    fn detect_turn(&self) -> Color;

    fn detect_castling(&self) -> CastlingRights;

    fn detect_en_passant(&self) -> Option<Square>;

    fn detect_fullmove(&self) -> u32;

    fn detect_ply(&self) -> u32;

    /// Stream of change notifications. Closing it means the host is gone.
    fn observe_changes(&mut self) -> mpsc::UnboundedReceiver<()>;
}

/// Publishes positions to a [`PositionFeed`].
#[derive(Debug, Clone)]
pub struct FeedHandle {
    current: watch::Sender<Position>,
    changes: mpsc::UnboundedSender<()>,
}

impl FeedHandle {
    /// Replaces the displayed position. Returns false once the feed is gone.
    pub fn push(&self, position: Position) -> bool {
        self.current.send_replace(position);
        self.changes.send(()).is_ok()
    }
}

/// Board adapter fed with whole positions, e.g. FENs read from a stream.
#[derive(Debug)]
pub struct PositionFeed {
    current: watch::Receiver<Position>,
    changes: Option<mpsc::UnboundedReceiver<()>>,
}

/// Creates a feed showing `initial` until something is pushed.
pub fn position_feed(initial: Position) -> (FeedHandle, PositionFeed) {
    let (current_tx, current) = watch::channel(initial);
    let (changes_tx, changes) = mpsc::unbounded_channel();
    (
        FeedHandle {
            current: current_tx,
            changes: changes_tx,
        },
        PositionFeed {
            current,
            changes: Some(changes),
        },
    )
}

impl BoardAdapter for PositionFeed {
    fn read_pieces(&self) -> Vec<PlacedPiece> {
        self.current
            .borrow()
            .board
            .pieces()
            .map(|(square, piece)| PlacedPiece { piece, square })
            .collect()
    }

    fn detect_turn(&self) -> Color {
        self.current.borrow().side_to_move
    }

    fn detect_castling(&self) -> CastlingRights {
        self.current.borrow().castling
    }

    fn detect_en_passant(&self) -> Option<Square> {
        self.current.borrow().en_passant
    }

    fn detect_fullmove(&self) -> u32 {
        self.current.borrow().fullmove
    }

    fn detect_ply(&self) -> u32 {
        self.current.borrow().ply
    }

    fn observe_changes(&mut self) -> mpsc::UnboundedReceiver<()> {
        self.changes
            .take()
            .unwrap_or_else(|| mpsc::unbounded_channel().1)
    }
}
