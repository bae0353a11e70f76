//! Static movement definitions for every (kind, color) pair.
//!
//! The table is built at compile time and never mutated. Each entry gives the
//! unit directions a piece walks, how far it may walk, and its point value.
//! Pawn rules that do not fit the direction model are flagged with a
//! [`SpecialMove`] and handled by the move generator.

use crate::{Color, Offset, PieceKind, Square};

const NO_DIRECTIONS: &[Offset] = &[];
const WHITE_PAWN_DIRECTIONS: &[Offset] = &[Offset::UP];
const BLACK_PAWN_DIRECTIONS: &[Offset] = &[Offset::DOWN];

const KNIGHT_DIRECTIONS: &[Offset] = &[
    Offset::new(-2, -1),
    Offset::new(-2, 1),
    Offset::new(2, -1),
    Offset::new(2, 1),
    Offset::new(-1, -2),
    Offset::new(-1, 2),
    Offset::new(1, -2),
    Offset::new(1, 2),
];

const ROOK_DIRECTIONS: &[Offset] = &[Offset::UP, Offset::DOWN, Offset::LEFT, Offset::RIGHT];

const BISHOP_DIRECTIONS: &[Offset] = &[
    Offset::UP_LEFT,
    Offset::UP_RIGHT,
    Offset::DOWN_LEFT,
    Offset::DOWN_RIGHT,
];

const ROYAL_DIRECTIONS: &[Offset] = &[
    Offset::UP,
    Offset::DOWN,
    Offset::LEFT,
    Offset::RIGHT,
    Offset::UP_LEFT,
    Offset::DOWN_LEFT,
    Offset::UP_RIGHT,
    Offset::DOWN_RIGHT,
];

/// Sliding range that covers the whole board.
pub const UNBOUNDED_STEPS: u8 = 8;

/// Point value used for the king; never meant to be summed.
pub const KING_POINTS: u32 = u32::MAX;

/// Movement rules that are not expressible as a direction walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialMove {
    /// A two-row advance from the starting row, and diagonal captures onto
    /// enemy pieces.
    Pawn,
}

/// Returns the special-move hook for a piece kind, if any.
#[inline]
pub const fn special_move(kind: PieceKind) -> Option<SpecialMove> {
    match kind {
        PieceKind::Pawn => Some(SpecialMove::Pawn),
        _ => None,
    }
}

/// Returns the point value of a piece kind.
#[inline]
pub const fn points(kind: PieceKind) -> u32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight | PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => KING_POINTS,
        PieceKind::None | PieceKind::Empty => 0,
    }
}

const fn entry(kind: PieceKind, color: Color) -> Square {
    let (directions, max_steps): (&'static [Offset], u8) = match kind {
        PieceKind::Pawn => match color {
            Color::White => (WHITE_PAWN_DIRECTIONS, 1),
            _ => (BLACK_PAWN_DIRECTIONS, 1),
        },
        PieceKind::Knight => (KNIGHT_DIRECTIONS, 1),
        PieceKind::Rook => (ROOK_DIRECTIONS, UNBOUNDED_STEPS),
        PieceKind::Bishop => (BISHOP_DIRECTIONS, UNBOUNDED_STEPS),
        PieceKind::Queen => (ROYAL_DIRECTIONS, UNBOUNDED_STEPS),
        PieceKind::King => (ROYAL_DIRECTIONS, 1),
        PieceKind::None | PieceKind::Empty => (NO_DIRECTIONS, 0),
    };
    Square {
        kind,
        color,
        points: points(kind),
        max_steps,
        directions,
    }
}

const fn build_catalog() -> [[Square; 2]; 6] {
    let mut table = [[Square::EMPTY; 2]; 6];
    let mut i = 0;
    while i < PieceKind::PIECES.len() {
        let kind = PieceKind::PIECES[i];
        table[i][0] = entry(kind, Color::White);
        table[i][1] = entry(kind, Color::Black);
        i += 1;
    }
    table
}

/// Piece definitions indexed by `[kind - Pawn][White = 0, Black = 1]`.
static CATALOG: [[Square; 2]; 6] = build_catalog();

/// Returns the definition of a piece of the given kind and color.
///
/// Non-pieces, and pieces without a player color, yield a blank square of
/// the requested kind with no movement.
pub fn definition_of(kind: PieceKind, color: Color) -> Square {
    let slot = match color {
        Color::White => 0,
        Color::Black => 1,
        Color::None => return Square::blank(blank_kind(kind)),
    };
    if !kind.is_piece() {
        return Square::blank(kind);
    }
    CATALOG[kind as usize - PieceKind::Pawn as usize][slot]
}

const fn blank_kind(kind: PieceKind) -> PieceKind {
    match kind {
        PieceKind::None => PieceKind::None,
        _ => PieceKind::Empty,
    }
}
