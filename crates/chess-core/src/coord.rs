//! Board coordinates and direction offsets.

use std::fmt;
use std::ops::{Add, Mul};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i8 = 8;

/// A (row, column) step used to describe piece movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub d_row: i8,
    pub d_col: i8,
}

impl Offset {
    pub const ZERO: Offset = Offset::new(0, 0);
    pub const UP: Offset = Offset::new(-1, 0);
    pub const DOWN: Offset = Offset::new(1, 0);
    pub const LEFT: Offset = Offset::new(0, -1);
    pub const RIGHT: Offset = Offset::new(0, 1);
    pub const UP_LEFT: Offset = Offset::new(-1, -1);
    pub const UP_RIGHT: Offset = Offset::new(-1, 1);
    pub const DOWN_LEFT: Offset = Offset::new(1, -1);
    pub const DOWN_RIGHT: Offset = Offset::new(1, 1);

    #[inline]
    pub const fn new(d_row: i8, d_col: i8) -> Self {
        Offset { d_row, d_col }
    }
}

impl Add for Offset {
    type Output = Offset;

    #[inline]
    fn add(self, rhs: Offset) -> Offset {
        Offset::new(
            self.d_row.saturating_add(rhs.d_row),
            self.d_col.saturating_add(rhs.d_col),
        )
    }
}

impl Mul<i8> for Offset {
    type Output = Offset;

    #[inline]
    fn mul(self, steps: i8) -> Offset {
        Offset::new(
            self.d_row.saturating_mul(steps),
            self.d_col.saturating_mul(steps),
        )
    }
}

/// A (row, column) position.
///
/// Row 0 is rank 8 and column 0 is file a. A coordinate may lie off the
/// board; [`Coordinate::in_bounds`] must hold before it is used as an index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: i8,
    pub col: i8,
}

impl Coordinate {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Coordinate { row, col }
    }

    /// Returns true if the coordinate lies on the 8x8 board.
    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Returns the array indices for this coordinate, or `None` when off the board.
    #[inline]
    pub const fn index(self) -> Option<(usize, usize)> {
        if self.in_bounds() {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }

    /// Iterates over all 64 on-board coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coordinate::new(row, col)))
    }

    /// Parses a square name such as `e4` (the file letter is case-insensitive).
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        let col = (file - b'a') as i8;
        let row = BOARD_SIZE - 1 - (rank - b'1') as i8;
        Some(Coordinate::new(row, col))
    }

    /// Returns the square name, or `None` when off the board.
    pub fn to_algebraic(self) -> Option<String> {
        let (row, col) = self.index()?;
        let file = (b'a' + col as u8) as char;
        let rank = (b'8' - row as u8) as char;
        Some(format!("{}{}", file, rank))
    }
}

impl Add<Offset> for Coordinate {
    type Output = Coordinate;

    #[inline]
    fn add(self, rhs: Offset) -> Coordinate {
        Coordinate::new(
            self.row.saturating_add(rhs.d_row),
            self.col.saturating_add(rhs.d_col),
        )
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({})", self)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn algebraic_mapping() {
        assert_eq!(Coordinate::from_algebraic("a8"), Some(Coordinate::new(0, 0)));
        assert_eq!(Coordinate::from_algebraic("a1"), Some(Coordinate::new(7, 0)));
        assert_eq!(Coordinate::from_algebraic("h1"), Some(Coordinate::new(7, 7)));
        assert_eq!(Coordinate::from_algebraic("e2"), Some(Coordinate::new(6, 4)));
        assert_eq!(Coordinate::from_algebraic("E2"), Some(Coordinate::new(6, 4)));
    }

    #[test]
    fn algebraic_rejects_garbage() {
        assert_eq!(Coordinate::from_algebraic("i1"), None);
        assert_eq!(Coordinate::from_algebraic("a9"), None);
        assert_eq!(Coordinate::from_algebraic("a0"), None);
        assert_eq!(Coordinate::from_algebraic("e"), None);
        assert_eq!(Coordinate::from_algebraic("e44"), None);
        assert_eq!(Coordinate::from_algebraic(""), None);
    }

    #[test]
    fn display() {
        assert_eq!(Coordinate::new(4, 3).to_string(), "d4");
        assert_eq!(Coordinate::new(-1, 3).to_string(), "(-1, 3)");
    }

    #[test]
    fn all_is_row_major() {
        let all: Vec<_> = Coordinate::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Coordinate::new(0, 0));
        assert_eq!(all[1], Coordinate::new(0, 1));
        assert_eq!(all[8], Coordinate::new(1, 0));
        assert_eq!(all[63], Coordinate::new(7, 7));
    }

    #[test]
    fn offset_arithmetic() {
        let c = Coordinate::new(6, 4) + Offset::UP * 2;
        assert_eq!(c, Coordinate::new(4, 4));
        let far = Coordinate::new(i8::MAX, 0) + Offset::DOWN;
        assert!(!far.in_bounds());
    }

    proptest! {
        #[test]
        fn in_bounds_matches_ranges(row in any::<i8>(), col in any::<i8>()) {
            let c = Coordinate::new(row, col);
            let expected = (0..8).contains(&row) && (0..8).contains(&col);
            prop_assert_eq!(c.in_bounds(), expected);
            prop_assert_eq!(c.index().is_some(), expected);
        }

        #[test]
        fn algebraic_round_trip(row in 0i8..8, col in 0i8..8) {
            let c = Coordinate::new(row, col);
            let name = c.to_algebraic().unwrap();
            prop_assert_eq!(Coordinate::from_algebraic(&name), Some(c));
        }
    }
}
