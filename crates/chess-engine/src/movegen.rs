//! Destination generation for a single piece.
//!
//! Every piece walks each of its catalog directions one step at a time, up to
//! its step limit. A walk ends at the board edge, before a friendly piece, or
//! on an enemy piece (which is a capture). Pawns then get their extra moves
//! appended: the two-row advance from the starting row and diagonal captures.
//!
//! The output order is deterministic: direction order from the catalog, then
//! increasing distance, then pawn extras.

use crate::Board;
use chess_core::catalog::{self, SpecialMove};
use chess_core::{Affinity, Color, Coordinate, Offset, Square};

/// The destinations reachable by one piece.
///
/// A queen in the middle of an empty board reaches 27 squares, so a fixed
/// array avoids heap allocations during the exhaustive reply search.
#[derive(Clone)]
pub struct Destinations {
    items: [Coordinate; Self::MAX_DESTINATIONS],
    len: usize,
}

impl Destinations {
    /// Upper bound on the destinations of any single piece.
    pub const MAX_DESTINATIONS: usize = 32;

    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Destinations {
            items: [Coordinate::new(0, 0); Self::MAX_DESTINATIONS],
            len: 0,
        }
    }

    /// Appends a destination.
    ///
    /// No piece reaches more than 27 squares, so the list never fills up.
    #[inline]
    pub fn push(&mut self, dest: Coordinate) {
        debug_assert!(
            self.len < Self::MAX_DESTINATIONS,
            "a piece has at most 27 destinations"
        );
        self.items[self.len] = dest;
        self.len += 1;
    }

    /// Returns the number of destinations.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the destinations.
    #[inline]
    pub fn as_slice(&self) -> &[Coordinate] {
        &self.items[..self.len]
    }

    /// Returns true if `dest` is in the list.
    #[inline]
    pub fn contains(&self, dest: Coordinate) -> bool {
        self.as_slice().contains(&dest)
    }

    /// Iterates over the destinations in generation order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.as_slice().iter()
    }
}

impl Default for Destinations {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Destinations {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Destinations {}

impl std::ops::Index<usize> for Destinations {
    type Output = Coordinate;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a Destinations {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for Destinations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Returns every destination the piece `square` standing on `source` can reach.
///
/// The result does not consider whether the move would expose the mover's
/// own king; see [`crate::would_expose_king`].
pub fn legal_destinations(board: &Board, source: Coordinate, square: &Square) -> Destinations {
    let mut dests = Destinations::new();
    let special = catalog::special_move(square.kind);

    for &direction in square.directions {
        for step in 1..=square.max_steps as i8 {
            let dest = source + direction * step;
            let Ok(target) = board.get(dest) else {
                break;
            };

            if target.is_empty() {
                dests.push(dest);
                continue;
            }

            // Any occupied square ends the line of sight.
            if square.affinity(&target) == Affinity::Enemy {
                dests.push(dest);
            }
            break;
        }
    }

    if special == Some(SpecialMove::Pawn) {
        pawn_extras(board, source, square.color, &mut dests);
    }

    dests
}

fn pawn_extras(board: &Board, source: Coordinate, color: Color, dests: &mut Destinations) {
    let forward = color.forward();

    if color.pawn_row() == Some(source.row) {
        let path = [source + forward, source + forward * 2];
        let clear = path
            .iter()
            .all(|&c| board.get(c).is_ok_and(|square| square.is_empty()));
        if clear {
            dests.push(path[1]);
        }
    }

    for side in [Offset::LEFT, Offset::RIGHT] {
        let dest = source + forward + side;
        if let Ok(target) = board.get(dest) {
            if !target.is_empty() && color.affinity(target.color) == Affinity::Enemy {
                dests.push(dest);
            }
        }
    }
}
