//! Win detection logic for tic-tac-toe.

use crate::{Board, Line, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player owns any of the eight lines,
/// `None` otherwise. Well-formed boards never have two winners; if one
/// does, the first line in `Line` order decides.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Player> {
    Line::iter().find_map(|line| line.owner(board))
}
