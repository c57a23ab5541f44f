//! Contract-based validation for move application.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::error::{InvalidMove, InvalidMoveReason};
use crate::invariants::InvariantViolation;
use crate::rules::is_terminal;
use crate::{Board, Cell, Move};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
///
/// A failed precondition is the caller's fault and surfaces as `Self::Error`.
/// A failed postcondition is an engine bug and is reported as invariant
/// violations.
pub trait Contract<S, A> {
    /// Error raised when a precondition fails.
    type Error;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Error>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: both coordinates lie in `0..3`.
pub struct InBounds;

impl InBounds {
    /// Rejects coordinates off the board.
    #[instrument(level = "trace")]
    pub fn check(mv: &Move) -> Result<(), InvalidMove> {
        if mv.in_bounds() {
            Ok(())
        } else {
            Err(InvalidMove::new(*mv, InvalidMoveReason::OutOfBounds))
        }
    }
}

/// Precondition: the game has not ended.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move on a terminal board.
    #[instrument(level = "trace", skip(board))]
    pub fn check(mv: &Move, board: &Board) -> Result<(), InvalidMove> {
        if is_terminal(board) {
            Err(InvalidMove::new(*mv, InvalidMoveReason::GameOver))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell exists and is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto an occupied or nonexistent cell.
    #[instrument(level = "trace", skip(board))]
    pub fn check(mv: &Move, board: &Board) -> Result<(), InvalidMove> {
        match board.cell(mv.row, mv.col).map(Cell::owner) {
            None => Err(InvalidMove::new(*mv, InvalidMoveReason::OutOfBounds)),
            Some(Some(owner)) => Err(InvalidMove::new(*mv, InvalidMoveReason::Occupied(owner))),
            Some(None) => Ok(()),
        }
    }
}

/// Composite precondition: the move is one of `legal_moves(board)`.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(level = "trace", skip(board))]
    pub fn check(mv: &Move, board: &Board) -> Result<(), InvalidMove> {
        InBounds::check(mv)?;
        GameNotOver::check(mv, board)?;
        CellIsEmpty::check(mv, board)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for `apply_move`.
///
/// Preconditions:
/// - Coordinates in range
/// - Game not over
/// - Cell empty
///
/// Postconditions:
/// - Exactly one cell changed, from empty to a mark
///
/// Whole-board invariants are not rechecked here: boards built with
/// `Board::from_rows` are trusted as given.
pub struct MoveContract;

impl Contract<Board, Move> for MoveContract {
    type Error = InvalidMove;

    fn pre(board: &Board, mv: &Move) -> Result<(), InvalidMove> {
        LegalMove::check(mv, board)
    }

    fn post(before: &Board, after: &Board) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        let changed: Vec<Move> = before
            .iter()
            .zip(after.iter())
            .filter(|((_, a), (_, b))| a != b)
            .map(|((mv, _), _)| mv)
            .collect();

        if changed.len() != 1 {
            warn!(changed = changed.len(), "Move changed an unexpected number of cells");
            violations.push(InvariantViolation::new("Exactly one cell changes per move"));
        }

        if changed.iter().any(|mv| !before.cell_at(*mv).is_empty()) {
            warn!("Move overwrote an existing mark");
            violations.push(InvariantViolation::new("Marks are never overwritten"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
