//! Consistent winner invariant: only the player who just moved can own a line.

use super::Invariant;
use crate::{Board, Cell, Line, Player};
use strum::IntoEnumIterator;

/// Invariant: at most one player owns a line, and that player made the last move.
///
/// The game stops at the first completed line, so an X line implies X moved
/// last (one mark ahead) and an O line implies equal counts.
pub struct ConsistentWinner;

impl Invariant<Board> for ConsistentWinner {
    fn holds(board: &Board) -> bool {
        let owners: Vec<Player> = Line::iter().filter_map(|line| line.owner(board)).collect();
        let x_line = owners.contains(&Player::X);
        let o_line = owners.contains(&Player::O);

        let x = board.count(Cell::X);
        let o = board.count(Cell::O);

        match (x_line, o_line) {
            (true, true) => false,
            (true, false) => x == o + 1,
            (false, true) => x == o,
            (false, false) => true,
        }
    }

    fn description() -> &'static str {
        "Only the player who moved last owns a complete line"
    }
}
