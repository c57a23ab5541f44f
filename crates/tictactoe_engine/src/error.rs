//! Engine error types.

use crate::types::{Move, Player};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum InvalidMoveReason {
    /// Row or column outside `0..3`.
    #[display("coordinates out of range")]
    OutOfBounds,

    /// The target cell already holds a mark.
    #[display("cell already occupied by {}", _0)]
    Occupied(Player),

    /// The board is terminal; nobody is to move.
    #[display("game is already over")]
    GameOver,
}

/// A move that is not in `legal_moves` for the board it was applied to.
///
/// This is a caller-contract violation: callers are expected to draw moves
/// from `legal_moves` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("Invalid move {}: {}", mv, reason)]
pub struct InvalidMove {
    /// The rejected move.
    pub mv: Move,
    /// Why it was rejected.
    pub reason: InvalidMoveReason,
}

impl InvalidMove {
    /// Creates a new invalid-move error.
    pub fn new(mv: Move, reason: InvalidMoveReason) -> Self {
        Self { mv, reason }
    }
}

impl std::error::Error for InvalidMove {}

/// Board text could not be parsed into a reachable board.
#[derive(Debug, Clone, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct BoardParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
