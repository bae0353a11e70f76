//! Piece-placement text: a compact description of a whole board.
//!
//! Eight `/`-separated rows, row 0 (rank 8) first. Each row lists its cells
//! from column 0 (file a): a piece letter (`PNRBQK` for White, lowercase for
//! Black), a digit 1-8 for a run of empty cells, or `.` for one empty cell.

use crate::{Coordinate, PieceKind, Square, BOARD_SIZE};
use thiserror::Error;

/// The standard starting arrangement.
pub const STANDARD_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// A full grid of squares, row-major.
pub type Grid = [[Square; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// Errors that can occur when parsing placement text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid placement: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid placement: row {row} has {cells} cells, expected 8")]
    InvalidRowLength { row: usize, cells: usize },

    #[error("invalid placement: unexpected character '{ch}' in row {row}")]
    InvalidCharacter { row: usize, ch: char },
}

/// Parses placement text into a grid.
pub fn parse_placement(placement: &str) -> Result<Grid, PlacementError> {
    let rows: Vec<&str> = placement.trim().split('/').collect();
    if rows.len() != BOARD_SIZE as usize {
        return Err(PlacementError::InvalidRowCount(rows.len()));
    }

    let mut grid = [[Square::EMPTY; BOARD_SIZE as usize]; BOARD_SIZE as usize];
    for (row, text) in rows.iter().enumerate() {
        let mut col = 0usize;
        for ch in text.chars() {
            let (run, square) = if let Some(n) = ch.to_digit(10).filter(|n| (1..=8).contains(n)) {
                (n as usize, Square::EMPTY)
            } else if ch == '.' {
                (1, Square::EMPTY)
            } else if let Some((kind, color)) = PieceKind::from_char(ch) {
                (1, Square::piece(kind, color))
            } else {
                return Err(PlacementError::InvalidCharacter { row, ch });
            };
            for _ in 0..run {
                if let Some(cell) = grid[row].get_mut(col) {
                    *cell = square;
                }
                col += 1;
            }
        }
        if col != BOARD_SIZE as usize {
            return Err(PlacementError::InvalidRowLength { row, cells: col });
        }
    }

    Ok(grid)
}

/// Formats a grid as placement text, compressing runs of empty cells.
pub fn format_placement(grid: &Grid) -> String {
    let mut out = String::new();
    for (row, cells) in grid.iter().enumerate() {
        let mut empty_run = 0;
        for square in cells {
            if square.is_empty() {
                empty_run += 1;
                continue;
            }
            if empty_run > 0 {
                out.push_str(&empty_run.to_string());
                empty_run = 0;
            }
            out.push(square.to_char());
        }
        if empty_run > 0 {
            out.push_str(&empty_run.to_string());
        }
        if row + 1 < grid.len() {
            out.push('/');
        }
    }
    out
}

/// Returns the coordinates of every piece in a grid, row-major.
pub fn occupied(grid: &Grid) -> impl Iterator<Item = (Coordinate, Square)> + '_ {
    Coordinate::all().filter_map(move |c| {
        let (row, col) = c.index()?;
        let square = grid[row][col];
        (!square.is_empty()).then_some((c, square))
    })
}
