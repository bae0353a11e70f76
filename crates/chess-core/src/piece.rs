//! Chess piece kinds.

use crate::Color;

/// The kind of piece occupying a square.
///
/// `None` and `Empty` carry no movement. The declaration order is also the
/// order captured pieces are grouped in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(u8)]
pub enum PieceKind {
    #[default]
    None = 0,
    Empty = 1,
    Pawn = 2,
    Knight = 3,
    Rook = 4,
    Bishop = 5,
    Queen = 6,
    King = 7,
}

impl PieceKind {
    /// The six kinds that are real pieces.
    pub const PIECES: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns true for the six real pieces.
    #[inline]
    pub const fn is_piece(self) -> bool {
        !matches!(self, PieceKind::None | PieceKind::Empty)
    }

    /// Returns the board character for this kind with the given color.
    ///
    /// White is uppercase, everything else lowercase. Non-pieces render as `.`.
    pub const fn to_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
            PieceKind::None | PieceKind::Empty => return '.',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black | Color::None => c,
        }
    }

    /// Parses a board character into a kind and color.
    pub const fn from_char(c: char) -> Option<(PieceKind, Color)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'r' => PieceKind::Rook,
            'b' => PieceKind::Bishop,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((kind, color))
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::None => "None",
            PieceKind::Empty => "Empty",
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Rook => "Rook",
            PieceKind::Bishop => "Bishop",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}
