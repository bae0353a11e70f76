//! The 8x8 board.

use crate::GameError;
use chess_core::placement::{self, Grid};
use chess_core::{Color, Coordinate, Move, PieceKind, PlacementError, Square, BOARD_SIZE};
use std::fmt;

/// Back-row arrangement from column a to column h.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A fixed grid of 64 squares, row-major, row 0 = rank 8.
///
/// All cell access goes through [`Board::get`] and [`Board::set`], which
/// reject coordinates that are off the board. Cloning a board yields a fully
/// independent copy, which is what speculative move checks rely on.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Creates a board with every cell empty.
    pub fn empty() -> Self {
        Board {
            cells: [[Square::EMPTY; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// Creates the standard starting arrangement.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for color in Color::PLAYERS {
            let (Some(back), Some(pawns)) = (color.back_row(), color.pawn_row()) else {
                continue;
            };
            for (col, kind) in BACK_ROW.iter().enumerate() {
                board.cells[back as usize][col] = Square::piece(*kind, color);
                board.cells[pawns as usize][col] = Square::piece(PieceKind::Pawn, color);
            }
        }
        board
    }

    /// Creates a board from placement text such as `7k/5Q2/8/8/8/8/8/R7`.
    pub fn from_placement(text: &str) -> Result<Self, PlacementError> {
        Ok(Board {
            cells: placement::parse_placement(text)?,
        })
    }

    /// Returns the placement text for this board.
    pub fn to_placement(&self) -> String {
        placement::format_placement(&self.cells)
    }

    /// Returns true if the coordinate lies on the board.
    #[inline]
    pub const fn in_bounds(coord: Coordinate) -> bool {
        coord.in_bounds()
    }

    /// Returns the square at the given coordinate.
    #[inline]
    pub fn get(&self, coord: Coordinate) -> Result<Square, GameError> {
        let (row, col) = coord.index().ok_or(GameError::InvalidCoordinate(coord))?;
        Ok(self.cells[row][col])
    }

    /// Replaces the square at the given coordinate.
    #[inline]
    pub fn set(&mut self, coord: Coordinate, square: Square) -> Result<(), GameError> {
        let (row, col) = coord.index().ok_or(GameError::InvalidCoordinate(coord))?;
        self.cells[row][col] = square;
        Ok(())
    }

    /// Moves the piece at `mv.source` onto `mv.dest` and empties the source.
    ///
    /// Returns whatever occupied the destination before the move. No rule
    /// checking is performed.
    pub fn apply(&mut self, mv: Move) -> Result<Square, GameError> {
        let piece = self.get(mv.source)?;
        let previous = self.get(mv.dest)?;
        self.set(mv.dest, piece)?;
        self.set(mv.source, Square::EMPTY)?;
        Ok(previous)
    }

    /// Returns the rows of the board, row 0 (rank 8) first.
    #[inline]
    pub fn rows(&self) -> &Grid {
        &self.cells
    }

    /// Iterates over every occupied cell in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, Square)> + '_ {
        placement::occupied(&self.cells)
    }

    /// Iterates over the pieces of one color in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Coordinate, Square)> + '_ {
        self.pieces().filter(move |(_, square)| square.color == color)
    }

    /// Returns the first cell (row-major) holding the given piece.
    pub fn find(&self, kind: PieceKind, color: Color) -> Option<Coordinate> {
        self.pieces()
            .find(|(_, square)| square.is(kind, color))
            .map(|(coord, _)| coord)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for square in row {
                write!(f, "{}", square.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
