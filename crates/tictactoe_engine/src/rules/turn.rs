//! Turn order, move generation and move application.

use super::is_terminal;
use crate::contracts::{Contract, MoveContract};
use crate::error::{InvalidMove, InvalidMoveReason};
use crate::{Board, Cell, Move, Player};
use std::collections::BTreeSet;
use tracing::instrument;

/// Returns the starting board: all nine cells empty.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player whose turn it is, or `None` once the game is over.
///
/// Turn order is derived from the number of marks: an even count means X
/// is to move, odd means O. There is no separate turn state to drift.
#[instrument(level = "trace")]
pub fn current_player(board: &Board) -> Option<Player> {
    if is_terminal(board) {
        return None;
    }
    if board.occupied() % 2 == 0 {
        Some(Player::X)
    } else {
        Some(Player::O)
    }
}

/// Returns every empty cell as a move, or the empty set on a terminal board.
///
/// Callers must not depend on iteration order; it happens to be ascending
/// (row, col).
#[instrument(level = "trace")]
pub fn legal_moves(board: &Board) -> BTreeSet<Move> {
    if is_terminal(board) {
        return BTreeSet::new();
    }
    board
        .iter()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(mv, _)| mv)
        .collect()
}

/// Returns a new board with `mv` marked for the player to move.
///
/// Fails with [`InvalidMove`] when the coordinates are out of range, the
/// cell is occupied, or the game is already over. The input board is
/// never modified.
///
/// Contract enforcement:
/// - Preconditions checked always
/// - Postconditions checked in debug builds only
#[instrument(level = "trace")]
pub fn apply_move(board: &Board, mv: Move) -> Result<Board, InvalidMove> {
    MoveContract::pre(board, &mv)?;

    let Some(player) = current_player(board) else {
        return Err(InvalidMove::new(mv, InvalidMoveReason::GameOver));
    };
    let next = board.with(mv, Cell::from(player));

    debug_assert!(
        MoveContract::post(board, &next).is_ok(),
        "apply_move postcondition violated"
    );

    Ok(next)
}
