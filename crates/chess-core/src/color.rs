//! Player color representation.

use crate::Offset;

/// The color of a piece or player.
///
/// `None` marks squares that hold no piece. Only `White` and `Black` ever
/// own a player record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(u8)]
pub enum Color {
    #[default]
    None = 0,
    White = 1,
    Black = 2,
}

/// Relationship between the colors of two pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Affinity {
    /// At least one side has no color.
    None,
    /// Same color.
    Friendly,
    /// Different colors, neither of them `None`.
    Enemy,
}

impl Color {
    /// The two colors that take turns, White first.
    pub const PLAYERS: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color. `None` stays `None`.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
            Color::None => Color::None,
        }
    }

    /// Returns true for `White` and `Black`.
    #[inline]
    pub const fn is_player(self) -> bool {
        !matches!(self, Color::None)
    }

    /// Returns the unit step a pawn of this color advances by.
    ///
    /// White starts on the high rows and moves toward row 0.
    #[inline]
    pub const fn forward(self) -> Offset {
        match self {
            Color::White => Offset::UP,
            Color::Black => Offset::DOWN,
            Color::None => Offset::ZERO,
        }
    }

    /// Returns the row pawns of this color start on.
    #[inline]
    pub const fn pawn_row(self) -> Option<i8> {
        match self {
            Color::White => Some(6),
            Color::Black => Some(1),
            Color::None => None,
        }
    }

    /// Returns the row holding this color's pieces at setup.
    #[inline]
    pub const fn back_row(self) -> Option<i8> {
        match self {
            Color::White => Some(7),
            Color::Black => Some(0),
            Color::None => None,
        }
    }

    /// Returns the affinity between two colors.
    #[inline]
    pub const fn affinity(self, other: Color) -> Affinity {
        match (self, other) {
            (Color::None, _) | (_, Color::None) => Affinity::None,
            (Color::White, Color::White) | (Color::Black, Color::Black) => Affinity::Friendly,
            _ => Affinity::Enemy,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
            Color::None => write!(f, "None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_color() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite(), Color::White);
        assert_eq!(Color::None.opposite(), Color::None);
    }

    #[test]
    fn forward_direction() {
        assert_eq!(Color::White.forward(), Offset::new(-1, 0));
        assert_eq!(Color::Black.forward(), Offset::new(1, 0));
    }

    #[test]
    fn starting_rows() {
        assert_eq!(Color::White.pawn_row(), Some(6));
        assert_eq!(Color::Black.pawn_row(), Some(1));
        assert_eq!(Color::White.back_row(), Some(7));
        assert_eq!(Color::Black.back_row(), Some(0));
        assert_eq!(Color::None.pawn_row(), None);
    }

    #[test]
    fn affinity_table() {
        assert_eq!(Color::White.affinity(Color::White), Affinity::Friendly);
        assert_eq!(Color::White.affinity(Color::Black), Affinity::Enemy);
        assert_eq!(Color::Black.affinity(Color::White), Affinity::Enemy);
        assert_eq!(Color::White.affinity(Color::None), Affinity::None);
        assert_eq!(Color::None.affinity(Color::None), Affinity::None);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Color::White), "White");
        assert_eq!(format!("{}", Color::Black), "Black");
    }
}
