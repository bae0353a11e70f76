//! Per-color player record.

use chess_core::{Color, Square};

/// Maximum number of pieces one side can lose.
const MAX_CAPTURES: usize = 16;

/// A player: its color, the opposing pieces it has captured, and whether it
/// is currently in check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    color: Color,
    captured: Vec<Square>,
    in_check: bool,
}

impl Player {
    /// Creates a player with no captures.
    pub fn new(color: Color) -> Self {
        Player {
            color,
            captured: Vec::with_capacity(MAX_CAPTURES),
            in_check: false,
        }
    }

    /// Returns the player's color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the captured pieces, grouped by kind in enumeration order.
    #[inline]
    pub fn captured(&self) -> &[Square] {
        &self.captured
    }

    /// Returns true if this player's king was attacked at the start of its turn.
    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.in_check
    }

    /// Returns the summed point value of everything this player captured.
    pub fn material(&self) -> u32 {
        self.captured
            .iter()
            .fold(0u32, |total, square| total.saturating_add(square.points))
    }

    pub(crate) fn set_in_check(&mut self, in_check: bool) {
        self.in_check = in_check;
    }

    /// Records a captured piece, keeping the list ordered by kind.
    pub(crate) fn on_piece_captured(&mut self, piece: Square) {
        let at = self.captured.partition_point(|s| s.kind <= piece.kind);
        self.captured.insert(at, piece);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::PieceKind;

    #[test]
    fn new_player() {
        let player = Player::new(Color::Black);
        assert_eq!(player.color(), Color::Black);
        assert!(player.captured().is_empty());
        assert!(!player.is_in_check());
        assert_eq!(player.material(), 0);
    }

    #[test]
    fn captures_are_grouped_by_kind() {
        let mut player = Player::new(Color::White);
        player.on_piece_captured(Square::piece(PieceKind::Queen, Color::Black));
        player.on_piece_captured(Square::piece(PieceKind::Pawn, Color::Black));
        player.on_piece_captured(Square::piece(PieceKind::Rook, Color::Black));
        player.on_piece_captured(Square::piece(PieceKind::Pawn, Color::Black));

        let kinds: Vec<PieceKind> = player.captured().iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            [
                PieceKind::Pawn,
                PieceKind::Pawn,
                PieceKind::Rook,
                PieceKind::Queen
            ]
        );
        assert_eq!(player.material(), 16);
    }

    #[test]
    fn rook_sorts_before_bishop() {
        let mut player = Player::new(Color::White);
        player.on_piece_captured(Square::piece(PieceKind::Bishop, Color::Black));
        player.on_piece_captured(Square::piece(PieceKind::Rook, Color::Black));
        assert_eq!(player.captured()[0].kind, PieceKind::Rook);
    }

    #[test]
    fn material_saturates() {
        let mut player = Player::new(Color::White);
        player.on_piece_captured(Square::piece(PieceKind::King, Color::Black));
        player.on_piece_captured(Square::piece(PieceKind::Queen, Color::Black));
        assert_eq!(player.material(), u32::MAX);
    }

    #[test]
    fn check_flag() {
        let mut player = Player::new(Color::White);
        player.set_in_check(true);
        assert!(player.is_in_check());
    }
}
