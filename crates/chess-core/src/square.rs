//! The contents of one board cell.

use crate::{catalog, Affinity, Color, Offset, PieceKind};

/// A board cell: either empty or a piece together with its movement definition.
///
/// Squares are plain values. The direction list points into the static
/// piece catalog, so copying a square (and therefore a whole board) never
/// allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub kind: PieceKind,
    pub color: Color,
    /// Material value of the piece. The king's value is `u32::MAX`.
    pub points: u32,
    /// Maximum number of steps along any one direction.
    pub max_steps: u8,
    /// Unit directions the piece may travel, in generation order.
    pub directions: &'static [Offset],
}

impl Square {
    /// The canonical empty cell.
    pub const EMPTY: Square = Square::blank(PieceKind::Empty);

    /// An uninitialized cell.
    pub const NONE: Square = Square::blank(PieceKind::None);

    pub(crate) const fn blank(kind: PieceKind) -> Square {
        Square {
            kind,
            color: Color::None,
            points: 0,
            max_steps: 0,
            directions: &[],
        }
    }

    /// Returns the catalog definition for a piece of the given kind and color.
    #[inline]
    pub fn piece(kind: PieceKind, color: Color) -> Square {
        catalog::definition_of(kind, color)
    }

    /// Returns true when no piece stands here.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        !self.kind.is_piece()
    }

    /// Returns true if this is a piece of the given kind and color.
    #[inline]
    pub fn is(&self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }

    /// Returns the affinity between this square's piece and another's.
    #[inline]
    pub const fn affinity(&self, other: &Square) -> Affinity {
        self.color.affinity(other.color)
    }

    /// Returns the board character for this square.
    #[inline]
    pub const fn to_char(&self) -> char {
        self.kind.to_char(self.color)
    }
}

impl Default for Square {
    fn default() -> Self {
        Square::EMPTY
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} {}", self.color, self.kind)
        }
    }
}
