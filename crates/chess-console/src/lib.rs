//! Terminal front end for two-player chess.
//!
//! The pieces here sit around a [`chess_engine::Game`]:
//! - [`input`] turns a typed line into a [`Command`]
//! - [`view`] renders the board and the announcements
//! - [`Session`] runs the read, move, render and announce loop over any
//!   `BufRead`/`Write` pair
//! - [`ConsoleConfig`] loads `chess.toml`

pub mod config;
pub mod input;
mod session;
pub mod view;

pub use config::{ConfigError, ConsoleConfig, Side};
pub use input::{Command, InputError};
pub use session::{stdio_session, Session, SessionError};
