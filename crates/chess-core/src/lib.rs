//! Core types for console chess.
//!
//! This crate provides the value types shared by the engine and its front end:
//! - [`Color`], [`Affinity`] and [`PieceKind`] for piece identity
//! - [`Coordinate`] and [`Offset`] for board geometry
//! - [`Square`] and the [`catalog`] of per-piece movement definitions
//! - [`Move`] for move requests
//! - placement text parsing and formatting

pub mod catalog;
mod color;
mod coord;
mod mov;
mod piece;
pub mod placement;
mod square;

pub use catalog::{definition_of, SpecialMove};
pub use color::{Affinity, Color};
pub use coord::{Coordinate, Offset, BOARD_SIZE};
pub use mov::Move;
pub use piece::PieceKind;
pub use placement::{PlacementError, STANDARD_PLACEMENT};
pub use square::Square;
