//! The interactive read, move, render and announce loop.

use crate::input::Command;
use crate::view;
use chess_core::Coordinate;
use chess_engine::{Game, GameError, Resolution};
use std::io::{BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A console game over any line reader and writer.
pub struct Session<R: BufRead, W: Write> {
    game: Game,
    reader: R,
    writer: W,
    show_captures: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, reader: R, writer: W) -> Self {
        Self {
            game,
            reader,
            writer,
            show_captures: true,
        }
    }

    /// Sets whether captured pieces are listed after every move.
    pub fn show_captures(mut self, show: bool) -> Self {
        self.show_captures = show;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Plays until the game is resolved, the player quits, or input runs out.
    ///
    /// Returns the resolution at the point the session stopped.
    pub fn run(&mut self) -> Result<Resolution, SessionError> {
        self.display_board()?;
        if self.announce_resolution()? {
            return Ok(self.game.resolution());
        }

        loop {
            let Some((source, dest)) = self.read_move()? else {
                tracing::info!("session ended before the game was resolved");
                return Ok(self.game.resolution());
            };

            match self.game.attempt_move(source, dest) {
                Ok(_) => {}
                Err(GameError::IllegalMove { .. } | GameError::InvalidCoordinate(_)) => {
                    self.say(view::INVALID_MOVE)?;
                    continue;
                }
                Err(err) => return self.stop(err),
            }

            self.display_board()?;
            if self.show_captures {
                self.display_captures()?;
            }

            if let Err(err) = self.game.advance_turn() {
                return self.stop(err);
            }
            if self.announce_resolution()? {
                return Ok(self.game.resolution());
            }
            let message = view::turn_message(self.game.active_player());
            self.say(&message)?;
        }
    }

    /// Reads lines until one names a move. `None` on quit or end of input.
    fn read_move(&mut self) -> Result<Option<(Coordinate, Coordinate)>, SessionError> {
        loop {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match Command::parse(&line) {
                Ok(Command::Move { source, dest }) => return Ok(Some((source, dest))),
                Ok(Command::Quit) => return Ok(None),
                Err(err) => {
                    tracing::debug!(error = %err, "rejected input line");
                    self.say(view::INVALID_INPUT)?;
                }
            }
        }
    }

    fn display_board(&mut self) -> Result<(), SessionError> {
        let board = view::render_board(self.game.board());
        self.writer.write_all(board.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn display_captures(&mut self) -> Result<(), SessionError> {
        let lines: Vec<String> = chess_core::Color::PLAYERS
            .iter()
            .filter_map(|&color| self.game.player(color))
            .filter_map(view::render_captures)
            .collect();
        for line in lines {
            self.say(&line)?;
        }
        Ok(())
    }

    /// Prints the end-of-game message, if any. Returns true when the game is over.
    fn announce_resolution(&mut self) -> Result<bool, SessionError> {
        let resolution = self.game.resolution();
        match view::resolution_message(resolution, self.game.active_color()) {
            Some(message) => {
                self.say(&message)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Ends the session on an engine error that no retry can fix.
    fn stop(&mut self, err: GameError) -> Result<Resolution, SessionError> {
        tracing::warn!(error = %err, "stopping session");
        self.say(&view::stopped_message(&err))?;
        Ok(self.game.resolution())
    }

    fn say(&mut self, message: &str) -> Result<(), SessionError> {
        writeln!(self.writer, "{}", message)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Creates a session over stdin and stdout.
pub fn stdio_session(game: Game) -> Session<std::io::BufReader<std::io::Stdin>, std::io::Stdout> {
    Session::new(
        game,
        std::io::BufReader::new(std::io::stdin()),
        std::io::stdout(),
    )
}
