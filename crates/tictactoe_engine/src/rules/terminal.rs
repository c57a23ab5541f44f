//! Terminal-state detection and scoring.

use super::{is_full, winner};
use crate::{Board, Outcome, Player};
use tracing::instrument;

/// Returns true if the game is over: a line is complete or the board is full.
///
/// This is the only stopping condition for search recursion.
#[instrument(level = "trace")]
pub fn is_terminal(board: &Board) -> bool {
    is_full(board) || winner(board).is_some()
}

/// Scores a terminal board from X's perspective.
///
/// Returns `1` if X won, `-1` if O won, `0` for a draw.
///
/// Precondition: `is_terminal(board)`. Checked in debug builds; in release
/// a non-terminal board scores as if it were drawn.
#[instrument(level = "trace")]
pub fn utility(board: &Board) -> i8 {
    debug_assert!(is_terminal(board), "utility called on a non-terminal board");
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Derives the game outcome from board contents.
#[instrument(level = "trace")]
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(Player::X) => Outcome::XWins,
        Some(Player::O) => Outcome::OWins,
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}
