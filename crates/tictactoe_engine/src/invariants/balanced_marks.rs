//! Balanced marks invariant: X and O alternate, X first.

use super::Invariant;
use crate::{Board, Cell};

/// Invariant: X has as many marks as O, or exactly one more.
///
/// Holds for every board reached by alternating moves starting with X.
pub struct BalancedMarks;

impl Invariant<Board> for BalancedMarks {
    fn holds(board: &Board) -> bool {
        let x = board.count(Cell::X);
        let o = board.count(Cell::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}
