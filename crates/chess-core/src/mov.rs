//! Move representation.

use crate::Coordinate;
use std::fmt;

/// A request to move the piece at `source` to `dest`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub source: Coordinate,
    pub dest: Coordinate,
}

impl Move {
    #[inline]
    pub const fn new(source: Coordinate, dest: Coordinate) -> Self {
        Move { source, dest }
    }

    /// Builds a move from two square names such as `e2` and `e4`.
    pub fn from_squares(source: &str, dest: &str) -> Option<Self> {
        Some(Move::new(
            Coordinate::from_algebraic(source)?,
            Coordinate::from_algebraic(dest)?,
        ))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.source, self.dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_squares() {
        let m = Move::from_squares("e2", "e4").unwrap();
        assert_eq!(m.source, Coordinate::new(6, 4));
        assert_eq!(m.dest, Coordinate::new(4, 4));
        assert_eq!(Move::from_squares("e2", "z9"), None);
    }

    #[test]
    fn display() {
        let m = Move::from_squares("g1", "f3").unwrap();
        assert_eq!(m.to_string(), "g1 f3");
        assert_eq!(format!("{:?}", m), "Move(g1 f3)");
    }
}
