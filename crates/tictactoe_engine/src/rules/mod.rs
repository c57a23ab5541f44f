//! Game rules for tic-tac-toe.
//!
//! Pure functions over `Board` values. None of them mutate their input;
//! `apply_move` returns a fresh board.

pub mod draw;
pub mod terminal;
pub mod turn;
pub mod win;

pub use draw::is_full;
pub use terminal::{is_terminal, outcome, utility};
pub use turn::{apply_move, current_player, initial_state, legal_moves};
pub use win::winner;
