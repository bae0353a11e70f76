//! Text rendering of the board and the session announcements.

use chess_core::{Color, Square, BOARD_SIZE};
use chess_engine::{Board, GameError, Player, Resolution};

/// Printed when a line is not two squares.
pub const INVALID_INPUT: &str = "Invalid input. Must be in format: [a-h][1-8] [a-h][1-8]";

/// Printed when the engine refuses a move.
pub const INVALID_MOVE: &str = "Invalid move. Try a different move.";

const RULE_WIDTH: usize = 24;

/// Renders the board, rank 8 at the top, with a file legend and a rule line.
///
/// ```text
/// |8 rnbqkbnr
/// ...
/// |1 RNBQKBNR
/// |
/// |  ABCDEFGH
/// |________________________
/// ```
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for (row, cells) in board.rows().iter().enumerate() {
        let rank = BOARD_SIZE as usize - row;
        out.push('|');
        out.push_str(&rank.to_string());
        out.push(' ');
        out.extend(cells.iter().map(Square::to_char));
        out.push('\n');
    }
    out.push_str("|\n|  ");
    out.extend((b'A'..=b'H').map(char::from));
    out.push_str("\n|");
    out.push_str(&"_".repeat(RULE_WIDTH));
    out.push('\n');
    out
}

/// Renders the pieces `player` has taken and their value, or `None` if nothing
/// has been captured yet.
pub fn render_captures(player: &Player) -> Option<String> {
    if player.captured().is_empty() {
        return None;
    }
    let pieces: String = player.captured().iter().map(Square::to_char).collect();
    Some(format!(
        "{} captured: {} ({} points)",
        player.color(),
        pieces,
        player.material()
    ))
}

/// Announces whose turn it is, and whether they are in check.
pub fn turn_message(player: &Player) -> String {
    let mut out = format!("{} player's turn...", player.color());
    if player.is_in_check() {
        out.push('\n');
        out.push_str(&format!("{} player is in check!", player.color()));
    }
    out
}

/// Announces the end of the game. `active` is the player left without a move.
pub fn resolution_message(resolution: Resolution, active: Color) -> Option<String> {
    match resolution {
        Resolution::Ongoing => None,
        Resolution::Checkmate => Some(format!("Checkmate!! {} player loses!", active)),
        Resolution::Stalemate => Some("Stalemate.".to_string()),
    }
}

/// Explains why the session stopped early.
pub fn stopped_message(err: &GameError) -> String {
    format!("Game stopped: {}", err)
}
