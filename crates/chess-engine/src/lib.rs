//! Rules and resolution engine for two-player chess.
//!
//! This crate provides:
//! - [`Board`] - the 8x8 grid with bounds-checked access
//! - [`legal_destinations`] - per-piece destination generation
//! - [`attackers_of`] / [`in_check`] - check detection
//! - [`Game`] - the session: move validation, turn switching, and
//!   checkmate/stalemate detection
//!
//! Castling, en passant, promotion and draw rules are not part of the game.
//!
//! # Example
//!
//! ```
//! use chess_core::Coordinate;
//! use chess_engine::{Game, Resolution};
//!
//! let mut game = Game::new();
//! let e2 = Coordinate::from_algebraic("e2").unwrap();
//! let e4 = Coordinate::from_algebraic("e4").unwrap();
//! game.attempt_move(e2, e4).unwrap();
//! assert_eq!(game.advance_turn().unwrap(), Resolution::Ongoing);
//! ```

mod board;
mod check;
mod error;
mod game;
pub mod movegen;
mod player;

pub use board::Board;
pub use check::{attackers_of, find_king, in_check, would_expose_king};
pub use error::{GameError, IllegalReason};
pub use game::{Game, MoveRecord, Resolution};
pub use movegen::{legal_destinations, Destinations};
pub use player::Player;
