//! Game session: the authoritative board, both players and the turn state machine.
//!
//! A driver alternates two calls:
//! - [`Game::attempt_move`] validates and commits one move for the active player
//! - [`Game::advance_turn`] hands the turn to the other player and decides
//!   whether the game continues, or ended in checkmate or stalemate

use crate::check::{in_check, would_expose_king};
use crate::movegen::{legal_destinations, Destinations};
use crate::{Board, GameError, IllegalReason, Player};
use chess_core::{Color, Coordinate, Move, Square};
use std::fmt;

/// State of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Resolution {
    /// Play continues.
    #[default]
    Ongoing,
    /// The side to move has no legal move and is not in check.
    Stalemate,
    /// The side to move has no legal move and is in check.
    Checkmate,
}

impl Resolution {
    /// Returns true once the game has ended.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Resolution::Ongoing)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Ongoing => write!(f, "ongoing"),
            Resolution::Stalemate => write!(f, "stalemate"),
            Resolution::Checkmate => write!(f, "checkmate"),
        }
    }
}

/// A committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// Source and destination.
    pub mv: Move,
    /// The piece that moved.
    pub piece: Square,
    /// The enemy piece that stood on the destination, if any.
    pub captured: Option<Square>,
}

/// A two-player game session.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    /// Indexed by [`slot`]: White first.
    players: [Player; 2],
    active: Color,
    resolution: Resolution,
    history: Vec<MoveRecord>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

fn slot(color: Color) -> usize {
    match color {
        Color::White => 0,
        _ => 1,
    }
}

impl Game {
    /// Creates a game in the standard starting position with White to move.
    pub fn new() -> Self {
        Game {
            board: Board::standard(),
            players: [Player::new(Color::White), Player::new(Color::Black)],
            active: Color::White,
            resolution: Resolution::Ongoing,
            history: Vec::new(),
        }
    }

    /// Creates a game from an arbitrary board with `first` to move.
    ///
    /// Both kings must be present, and the side waiting for its turn must
    /// not be in check. The side to move is evaluated straight away, so a
    /// board that is already mate or stalemate starts resolved.
    pub fn from_board(board: Board, first: Color) -> Result<Self, GameError> {
        if !first.is_player() {
            return Err(GameError::NotAPlayer(first));
        }
        for color in Color::PLAYERS {
            crate::find_king(&board, color)?;
        }
        if in_check(&board, first.opposite())? {
            return Err(GameError::WaitingSideInCheck(first.opposite()));
        }

        let mut game = Game {
            board,
            active: first,
            ..Game::new()
        };
        game.evaluate_turn(first)?;
        Ok(game)
    }

    /// Creates a game from placement text with `first` to move.
    pub fn from_placement(placement: &str, first: Color) -> Result<Self, GameError> {
        Self::from_board(Board::from_placement(placement)?, first)
    }

    /// Resets to the standard starting position with White to move.
    ///
    /// Calling this any number of times always yields the same state.
    pub fn setup_board(&mut self) {
        *self = Game::new();
    }

    /// Returns the authoritative board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    #[inline]
    pub fn active_player(&self) -> &Player {
        &self.players[slot(self.active)]
    }

    /// Returns the color whose turn it is.
    #[inline]
    pub fn active_color(&self) -> Color {
        self.active
    }

    /// Returns the record of the given player.
    pub fn player(&self, color: Color) -> Option<&Player> {
        color.is_player().then(|| &self.players[slot(color)])
    }

    /// Returns the current resolution.
    #[inline]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Returns true if the game has ended.
    #[inline]
    pub fn is_over(&self) -> bool {
        self.resolution.is_terminal()
    }

    /// Returns every committed move, oldest first.
    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Returns the destinations of whatever piece stands on `source`.
    ///
    /// Moves that would expose the owner's king are included.
    pub fn legal_destinations(&self, source: Coordinate) -> Result<Destinations, GameError> {
        let square = self.board.get(source)?;
        Ok(legal_destinations(&self.board, source, &square))
    }

    /// Returns every move the active player may make, in board scan order.
    pub fn legal_moves(&self) -> Result<Vec<Move>, GameError> {
        let mut moves = Vec::new();
        for (source, square) in self.board.pieces_of(self.active) {
            for &dest in &legal_destinations(&self.board, source, &square) {
                let mv = Move::new(source, dest);
                if !would_expose_king(&self.board, mv, self.active)? {
                    moves.push(mv);
                }
            }
        }
        Ok(moves)
    }

    /// Moves the active player's piece from `source` to `dest`.
    ///
    /// The move is first played on a scratch copy of the board; it is only
    /// committed if the mover's king is safe afterwards. Nothing changes when
    /// an error is returned.
    pub fn attempt_move(
        &mut self,
        source: Coordinate,
        dest: Coordinate,
    ) -> Result<MoveRecord, GameError> {
        if self.resolution.is_terminal() {
            return Err(GameError::GameAlreadyResolved(self.resolution));
        }

        let mv = Move::new(source, dest);
        let piece = self.board.get(source)?;
        let target = self.board.get(dest)?;

        if target.color == self.active {
            return Err(self.reject(mv, IllegalReason::SelfCapture));
        }
        if piece.is_empty() {
            return Err(self.reject(mv, IllegalReason::NoPiece));
        }
        if piece.color != self.active {
            return Err(self.reject(mv, IllegalReason::NotYourPiece));
        }
        if !legal_destinations(&self.board, source, &piece).contains(dest) {
            return Err(self.reject(mv, IllegalReason::Unreachable));
        }
        if would_expose_king(&self.board, mv, self.active)? {
            return Err(self.reject(mv, IllegalReason::ExposesKing));
        }

        let previous = self.board.apply(mv)?;
        let captured = (!previous.is_empty()).then_some(previous);

        let mover = &mut self.players[slot(self.active)];
        if let Some(piece) = captured {
            mover.on_piece_captured(piece);
        }
        // A committed move never leaves the mover in check.
        mover.set_in_check(false);

        let record = MoveRecord {
            mv,
            piece,
            captured,
        };
        self.history.push(record);
        tracing::debug!(color = %self.active, mv = %mv, captured = ?captured.map(|s| s.kind), "move committed");
        Ok(record)
    }

    /// Hands the turn to the other player and re-evaluates the resolution.
    ///
    /// Must be called after every successful [`Game::attempt_move`]. Once the
    /// game is resolved this is a no-op returning the final resolution.
    pub fn advance_turn(&mut self) -> Result<Resolution, GameError> {
        if self.resolution.is_terminal() {
            return Ok(self.resolution);
        }
        self.evaluate_turn(self.active.opposite())
    }

    /// Hands the turn to `color`, updating its check flag and the resolution.
    ///
    /// The state only changes once the evaluation has succeeded.
    fn evaluate_turn(&mut self, color: Color) -> Result<Resolution, GameError> {
        let checked = in_check(&self.board, color)?;
        let has_move = self.has_legal_move(color)?;

        self.active = color;
        self.players[slot(color)].set_in_check(checked);
        self.resolution = match (has_move, checked) {
            (true, _) => Resolution::Ongoing,
            (false, true) => Resolution::Checkmate,
            (false, false) => Resolution::Stalemate,
        };

        if self.resolution.is_terminal() {
            tracing::info!(color = %color, resolution = %self.resolution, "game resolved");
        } else if checked {
            tracing::debug!(color = %color, "player in check");
        }
        Ok(self.resolution)
    }

    /// Searches the moves of `color` until one leaves its king safe.
    fn has_legal_move(&self, color: Color) -> Result<bool, GameError> {
        for (source, square) in self.board.pieces_of(color) {
            for &dest in &legal_destinations(&self.board, source, &square) {
                let mv = Move::new(source, dest);
                if !would_expose_king(&self.board, mv, color)? {
                    tracing::trace!(mv = %mv, "found a legal reply");
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    fn reject(&self, mv: Move, reason: IllegalReason) -> GameError {
        tracing::debug!(color = %self.active, mv = %mv, reason = %reason, "move rejected");
        GameError::IllegalMove { mv, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::PieceKind;

    fn at(name: &str) -> Coordinate {
        Coordinate::from_algebraic(name).unwrap()
    }

    fn play(game: &mut Game, source: &str, dest: &str) -> Resolution {
        game.attempt_move(at(source), at(dest)).unwrap();
        game.advance_turn().unwrap()
    }

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.active_color(), Color::White);
        assert_eq!(game.resolution(), Resolution::Ongoing);
        assert!(!game.active_player().is_in_check());
        assert!(game.history().is_empty());
        assert_eq!(game.board(), &Board::standard());
    }

    #[test]
    fn opening_moves_alternate() {
        let mut game = Game::new();
        assert_eq!(play(&mut game, "e2", "e4"), Resolution::Ongoing);
        assert_eq!(game.active_color(), Color::Black);
        assert_eq!(play(&mut game, "e7", "e5"), Resolution::Ongoing);
        assert_eq!(game.active_color(), Color::White);
        assert_eq!(game.history().len(), 2);
        assert_eq!(
            game.board().to_placement(),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR"
        );
    }

    #[test]
    fn rejects_unreachable_destination() {
        let mut game = Game::new();
        let err = game.attempt_move(at("e2"), at("e5")).unwrap_err();
        assert!(matches!(
            err,
            GameError::IllegalMove {
                reason: IllegalReason::Unreachable,
                ..
            }
        ));
        assert_eq!(game.board(), &Board::standard());
    }

    #[test]
    fn rejects_self_capture() {
        let mut game = Game::new();
        let err = game.attempt_move(at("a1"), at("a2")).unwrap_err();
        assert!(matches!(
            err,
            GameError::IllegalMove {
                reason: IllegalReason::SelfCapture,
                ..
            }
        ));
    }

    #[test]
    fn rejects_moving_opponent_or_empty() {
        let mut game = Game::new();
        assert!(matches!(
            game.attempt_move(at("e7"), at("e5")),
            Err(GameError::IllegalMove {
                reason: IllegalReason::NotYourPiece,
                ..
            })
        ));
        assert!(matches!(
            game.attempt_move(at("e4"), at("e5")),
            Err(GameError::IllegalMove {
                reason: IllegalReason::NoPiece,
                ..
            })
        ));
    }

    #[test]
    fn rejects_off_board_coordinates() {
        let mut game = Game::new();
        let off = Coordinate::new(9, 2);
        assert_eq!(
            game.attempt_move(at("e2"), off),
            Err(GameError::InvalidCoordinate(off))
        );
        assert_eq!(
            game.legal_destinations(off),
            Err(GameError::InvalidCoordinate(off))
        );
    }

    #[test]
    fn pinned_piece_cannot_move() {
        let mut game = Game::from_placement("4r2k/8/8/8/8/8/4B3/4K3", Color::White).unwrap();
        // d3 is reachable for the bishop in isolation.
        assert!(game.legal_destinations(at("e2")).unwrap().contains(at("d3")));
        let err = game.attempt_move(at("e2"), at("d3")).unwrap_err();
        assert!(matches!(
            err,
            GameError::IllegalMove {
                reason: IllegalReason::ExposesKing,
                ..
            }
        ));
        assert!(game
            .board()
            .get(at("e2"))
            .unwrap()
            .is(PieceKind::Bishop, Color::White));
    }

    #[test]
    fn capture_is_recorded() {
        let mut game = Game::from_placement("4k3/8/8/3p4/8/8/8/3RK3", Color::White).unwrap();
        let record = game.attempt_move(at("d1"), at("d5")).unwrap();
        assert_eq!(record.captured.map(|s| s.kind), Some(PieceKind::Pawn));
        assert_eq!(record.piece.kind, PieceKind::Rook);
        let white = game.player(Color::White).unwrap();
        assert_eq!(white.captured().len(), 1);
        assert_eq!(white.material(), 1);
        assert!(game.player(Color::Black).unwrap().captured().is_empty());
        assert!(game.player(Color::None).is_none());
    }

    #[test]
    fn check_flag_is_set_for_the_new_active_player() {
        let mut game = Game::from_placement("4k3/8/8/8/8/8/8/R3K3", Color::White).unwrap();
        assert_eq!(play(&mut game, "a1", "a8"), Resolution::Ongoing);
        assert_eq!(game.active_color(), Color::Black);
        assert!(game.active_player().is_in_check());
    }

    #[test]
    fn fools_mate() {
        let mut game = Game::new();
        play(&mut game, "f2", "f3");
        play(&mut game, "e7", "e5");
        play(&mut game, "g2", "g4");
        assert_eq!(play(&mut game, "d8", "h4"), Resolution::Checkmate);
        assert_eq!(game.active_color(), Color::White);
        assert!(game.active_player().is_in_check());
        assert!(game.is_over());
    }

    #[test]
    fn moves_after_resolution_are_refused() {
        let mut game = Game::new();
        play(&mut game, "f2", "f3");
        play(&mut game, "e7", "e5");
        play(&mut game, "g2", "g4");
        play(&mut game, "d8", "h4");
        let before = game.board().clone();
        assert_eq!(
            game.attempt_move(at("a2"), at("a3")),
            Err(GameError::GameAlreadyResolved(Resolution::Checkmate))
        );
        assert_eq!(game.advance_turn(), Ok(Resolution::Checkmate));
        assert_eq!(game.board(), &before);
        assert_eq!(game.active_color(), Color::White);
    }

    #[test]
    fn stalemate_board_starts_resolved() {
        let game = Game::from_placement("7k/5Q2/6K1/8/8/8/8/8", Color::Black).unwrap();
        assert_eq!(game.resolution(), Resolution::Stalemate);
        assert!(!game.active_player().is_in_check());
        assert!(game.legal_moves().unwrap().is_empty());
    }

    #[test]
    fn from_board_requires_both_kings() {
        assert_eq!(
            Game::from_placement("8/8/8/8/8/8/8/4K3", Color::White).unwrap_err(),
            GameError::KingNotFound(Color::Black)
        );
        assert!(matches!(
            Game::from_placement("8/8/8", Color::White),
            Err(GameError::Placement(_))
        ));
        assert_eq!(
            Game::from_placement("4k3/8/8/8/8/8/8/4K3", Color::None).unwrap_err(),
            GameError::NotAPlayer(Color::None)
        );
    }

    #[test]
    fn from_board_rejects_waiting_side_in_check() {
        // White to move could take the black king straight away.
        assert_eq!(
            Game::from_placement("4k3/8/8/8/8/8/8/4RK2", Color::White).unwrap_err(),
            GameError::WaitingSideInCheck(Color::Black)
        );
        assert!(Game::from_placement("4k3/8/8/8/8/8/8/4RK2", Color::Black).is_ok());
    }

    #[test]
    fn failed_turn_change_leaves_state_untouched() {
        // Only reachable by editing the board behind the session's back.
        let mut game = Game::from_placement("4k3/8/8/8/8/8/8/R3K3", Color::White).unwrap();
        game.board.set(at("e8"), Square::EMPTY).unwrap();

        assert_eq!(
            game.advance_turn(),
            Err(GameError::KingNotFound(Color::Black))
        );
        assert_eq!(game.active_color(), Color::White);
        assert_eq!(game.resolution(), Resolution::Ongoing);
        assert_eq!(
            game.advance_turn(),
            Err(GameError::KingNotFound(Color::Black))
        );
        assert_eq!(game.active_color(), Color::White);
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let game = Game::new();
        assert_eq!(game.legal_moves().unwrap().len(), 20);
    }

    #[test]
    fn setup_board_resets_everything() {
        let mut game = Game::new();
        play(&mut game, "e2", "e4");
        game.setup_board();
        assert_eq!(game.board(), &Board::standard());
        assert_eq!(game.active_color(), Color::White);
        assert!(game.history().is_empty());
        game.setup_board();
        assert_eq!(game.board(), &Board::standard());
    }
}
