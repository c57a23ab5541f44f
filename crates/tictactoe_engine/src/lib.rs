//! Tic-tac-toe engine - pure game logic with exhaustive minimax search
//!
//! Every operation takes a board by reference and returns a new value;
//! nothing is mutated in place and there is no shared state.
//!
//! # Architecture
//!
//! - **Types**: `Board`, `Cell`, `Player`, `Move`, `Outcome`
//! - **Rules**: turn order, legal moves, move application, terminal detection
//! - **Contracts / Invariants**: checks guarding move application and board parsing
//! - **Search**: full-depth minimax returning optimal moves
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{apply_move, best_move, current_player, initial_state, Player};
//!
//! # fn main() -> Result<(), tictactoe_engine::InvalidMove> {
//! let board = initial_state();
//! assert_eq!(current_player(&board), Some(Player::X));
//!
//! let mv = best_move(&board).expect("initial board is not terminal");
//! let board = apply_move(&board, mv)?;
//! assert_eq!(current_player(&board), Some(Player::O));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod error;
mod invariants;
mod rules;
mod search;
mod types;

#[cfg(kani)]
mod verification;

// Crate-level exports - Types
pub use types::{Board, Cell, Line, Move, Outcome, Player, SIZE};

// Crate-level exports - Errors
pub use error::{BoardParseError, InvalidMove, InvalidMoveReason};

// Crate-level exports - Rules
pub use rules::{
    apply_move, current_player, initial_state, is_full, is_terminal, legal_moves, outcome,
    utility, winner,
};

// Crate-level exports - Contracts and invariants
pub use contracts::{CellIsEmpty, Contract, GameNotOver, InBounds, LegalMove, MoveContract};
pub use invariants::{
    BalancedMarks, BoardInvariants, ConsistentWinner, Invariant, InvariantSet, InvariantViolation,
};

// Crate-level exports - Search
pub use search::{
    SearchConfig, SearchReport, SearchStats, Searcher, best_move, minimax_value,
    principal_variation,
};
