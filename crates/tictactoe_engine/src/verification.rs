//! Formal verification of move application using Kani model checker.
//!
//! These proof harnesses check properties for ALL well-formed boards and
//! moves (bounded), not just the ones a search happens to visit.

use crate::{
    Board, BoardInvariants, Cell, InvalidMoveReason, InvariantSet, Move, apply_move, legal_moves,
};

impl kani::Arbitrary for Cell {
    fn any() -> Self {
        let tag: u8 = kani::any();
        kani::assume(tag < 3);
        match tag {
            0 => Cell::Empty,
            1 => Cell::X,
            _ => Cell::O,
        }
    }
}

fn any_board() -> Board {
    Board::from_rows([
        [kani::any(), kani::any(), kani::any()],
        [kani::any(), kani::any(), kani::any()],
        [kani::any(), kani::any(), kani::any()],
    ])
}

/// Verify out-of-range moves are always rejected.
#[kani::proof]
fn verify_out_of_bounds_rejected() {
    let board = any_board();
    let mv = Move::new(kani::any(), kani::any());
    kani::assume(!mv.in_bounds());

    let result = apply_move(&board, mv);
    assert!(matches!(
        result,
        Err(e) if e.reason == InvalidMoveReason::OutOfBounds
    ));
}

/// Verify an accepted move fills exactly the target cell and nothing else.
#[kani::proof]
#[kani::unwind(10)]
fn verify_apply_move_touches_one_cell() {
    let board = any_board();
    let mv = Move::new(kani::any(), kani::any());
    kani::assume(mv.in_bounds());
    kani::assume(BoardInvariants::check_all(&board).is_ok());

    if let Ok(next) = apply_move(&board, mv) {
        assert!(board.cell(mv.row, mv.col) == Some(Cell::Empty));
        assert!(next.cell(mv.row, mv.col) != Some(Cell::Empty));
        assert_eq!(next.occupied(), board.occupied() + 1);
        assert!(legal_moves(&board).contains(&mv));
    }
}
