//! Parsing of typed move lines.

use chess_core::Coordinate;
use thiserror::Error;

/// A line the player typed, once validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the piece on `source` to `dest`.
    Move { source: Coordinate, dest: Coordinate },
    /// Leave the session.
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("expected a source and a destination, got {0} tokens")]
    WrongTokenCount(usize),
    #[error("'{0}' is not a square in [a-h][1-8]")]
    InvalidSquare(String),
}

impl Command {
    /// Parses a line such as `e2 e4` (file letters are case-insensitive),
    /// or `quit` / `exit`.
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [word] if is_quit(word) => Ok(Command::Quit),
            [source, dest] => Ok(Command::Move {
                source: parse_square(source)?,
                dest: parse_square(dest)?,
            }),
            other => Err(InputError::WrongTokenCount(other.len())),
        }
    }
}

fn is_quit(word: &str) -> bool {
    word.eq_ignore_ascii_case("quit") || word.eq_ignore_ascii_case("exit")
}

fn parse_square(token: &str) -> Result<Coordinate, InputError> {
    Coordinate::from_algebraic(token).ok_or_else(|| InputError::InvalidSquare(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(name: &str) -> Coordinate {
        Coordinate::from_algebraic(name).unwrap()
    }

    #[test]
    fn parse_move() {
        assert_eq!(
            Command::parse("e2 e4\n"),
            Ok(Command::Move {
                source: at("e2"),
                dest: at("e4")
            })
        );
        assert_eq!(
            Command::parse("  G1\tf3 "),
            Ok(Command::Move {
                source: at("g1"),
                dest: at("f3")
            })
        );
    }

    #[test]
    fn parse_quit() {
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(Command::parse("EXIT\n"), Ok(Command::Quit));
    }

    #[test]
    fn wrong_token_count() {
        assert_eq!(Command::parse(""), Err(InputError::WrongTokenCount(0)));
        assert_eq!(Command::parse("e2"), Err(InputError::WrongTokenCount(1)));
        assert_eq!(
            Command::parse("e2 e4 e5"),
            Err(InputError::WrongTokenCount(3))
        );
    }

    #[test]
    fn invalid_squares() {
        assert_eq!(
            Command::parse("i2 e4"),
            Err(InputError::InvalidSquare("i2".to_string()))
        );
        assert_eq!(
            Command::parse("e2 e9"),
            Err(InputError::InvalidSquare("e9".to_string()))
        );
        assert_eq!(
            Command::parse("e2 e10"),
            Err(InputError::InvalidSquare("e10".to_string()))
        );
        assert_eq!(
            Command::parse("e0 e4"),
            Err(InputError::InvalidSquare("e0".to_string()))
        );
    }
}
