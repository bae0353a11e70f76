//! Check detection and speculative move evaluation.

use crate::movegen::legal_destinations;
use crate::{Board, GameError};
use chess_core::{Color, Coordinate, Move, PieceKind};

/// Returns the coordinate of the king of the given color.
///
/// The board is scanned row-major and the first king found wins.
pub fn find_king(board: &Board, color: Color) -> Result<Coordinate, GameError> {
    board
        .find(PieceKind::King, color)
        .ok_or(GameError::KingNotFound(color))
}

/// Returns every opposing piece that can currently reach the king of `king_color`.
pub fn attackers_of(board: &Board, king_color: Color) -> Result<Vec<Coordinate>, GameError> {
    let king = find_king(board, king_color)?;
    let attackers = board
        .pieces_of(king_color.opposite())
        .filter(|(source, square)| legal_destinations(board, *source, square).contains(king))
        .map(|(source, _)| source)
        .collect();
    Ok(attackers)
}

/// Returns true if the king of the given color is attacked.
pub fn in_check(board: &Board, color: Color) -> Result<bool, GameError> {
    Ok(!attackers_of(board, color)?.is_empty())
}

/// Plays `mv` on a scratch copy of the board and reports whether the king of
/// `color` would be attacked afterwards. The given board is never modified.
pub fn would_expose_king(board: &Board, mv: Move, color: Color) -> Result<bool, GameError> {
    let mut scratch = board.clone();
    scratch.apply(mv)?;
    in_check(&scratch, color)
}
