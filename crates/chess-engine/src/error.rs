//! Error types for engine operations.

use crate::Resolution;
use chess_core::{Color, Coordinate, Move, PlacementError};
use std::fmt;
use thiserror::Error;

/// Why a move request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IllegalReason {
    /// The source square is empty.
    NoPiece,
    /// The piece at the source belongs to the other player.
    NotYourPiece,
    /// The destination holds one of the mover's own pieces.
    SelfCapture,
    /// The destination is not reachable by the piece.
    Unreachable,
    /// The move would leave the mover's king under attack.
    ExposesKing,
}

impl fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalReason::NoPiece => write!(f, "no piece on the source square"),
            IllegalReason::NotYourPiece => write!(f, "piece belongs to the opponent"),
            IllegalReason::SelfCapture => write!(f, "cannot capture own piece"),
            IllegalReason::Unreachable => write!(f, "piece cannot reach that square"),
            IllegalReason::ExposesKing => write!(f, "move leaves own king in check"),
        }
    }
}

/// Error type for board and game operations.
///
/// Every variant is a recoverable condition; the caller decides how to report it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A coordinate outside the 8x8 board was used to read or write a cell.
    #[error("coordinate {0} is off the board")]
    InvalidCoordinate(Coordinate),

    /// The move was refused.
    #[error("illegal move {mv}: {reason}")]
    IllegalMove { mv: Move, reason: IllegalReason },

    /// A move was attempted after checkmate or stalemate.
    #[error("game has already ended: {0}")]
    GameAlreadyResolved(Resolution),

    /// The board has no king of the given color.
    #[error("no {0} king on the board")]
    KingNotFound(Color),

    /// A custom board leaves the side that is not to move in check, so its
    /// king could be captured.
    #[error("{0} is in check but it is not their turn")]
    WaitingSideInCheck(Color),

    /// A color that cannot take a turn was given where a player was expected.
    #[error("{0} is not a player color")]
    NotAPlayer(Color),

    /// A custom layout could not be parsed.
    #[error(transparent)]
    Placement(#[from] PlacementError),
}
