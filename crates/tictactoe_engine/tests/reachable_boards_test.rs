//! Exhaustive property checks over every board reachable from the initial state.

use std::collections::{HashMap, HashSet};
use tictactoe_engine::{
    Board, BoardInvariants, Cell, InvariantSet, Move, Outcome, Player, SearchConfig, Searcher,
    apply_move, current_player, initial_state, is_full, is_terminal, legal_moves, outcome,
    utility, winner,
};

/// Every reachable board mapped to its ply count.
fn reachable_boards() -> HashMap<Board, usize> {
    let mut seen = HashMap::new();
    let mut stack = vec![(initial_state(), 0)];
    while let Some((board, ply)) = stack.pop() {
        if seen.insert(board, ply).is_some() {
            continue;
        }
        for mv in legal_moves(&board) {
            let next = apply_move(&board, mv).expect("legal move must apply");
            stack.push((next, ply + 1));
        }
    }
    seen
}

#[test]
fn test_reachable_board_count() {
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_every_reachable_board_satisfies_invariants() {
    for board in reachable_boards().keys() {
        assert!(BoardInvariants::check_all(board).is_ok(), "{}", board);
    }
}

#[test]
fn test_current_player_alternates_from_x() {
    for (board, ply) in reachable_boards() {
        let expected = if is_terminal(&board) {
            None
        } else if ply % 2 == 0 {
            Some(Player::X)
        } else {
            Some(Player::O)
        };
        assert_eq!(current_player(&board), expected, "{}", board);
    }
}

#[test]
fn test_each_move_removes_exactly_one_legal_move() {
    for board in reachable_boards().keys() {
        let before = legal_moves(board).len();
        for mv in legal_moves(board) {
            let next = apply_move(board, mv).unwrap();
            let after = board.count(Cell::Empty) - 1;
            assert_eq!(next.count(Cell::Empty), after);
            if !is_terminal(&next) {
                assert_eq!(legal_moves(&next).len(), before - 1, "{}", next);
            }
        }
    }
}

#[test]
fn test_moves_outside_legal_set_always_fail() {
    for board in reachable_boards().keys() {
        let legal = legal_moves(board);
        for row in 0..5 {
            for col in 0..5 {
                let mv = Move::new(row, col);
                let result = apply_move(board, mv);
                if legal.contains(&mv) {
                    assert!(result.is_ok(), "{} at {}", board, mv);
                } else {
                    let err = result.unwrap_err();
                    assert_eq!(err.mv, mv);
                }
            }
        }
    }
}

#[test]
fn test_terminal_iff_full_or_won() {
    for board in reachable_boards().keys() {
        let expected = is_full(board) || winner(board).is_some();
        assert_eq!(is_terminal(board), expected, "{}", board);
        assert_eq!(outcome(board).is_over(), expected);
    }
}

#[test]
fn test_utility_matches_winner() {
    for board in reachable_boards().keys().filter(|b| is_terminal(b)) {
        let expected = match winner(board) {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        };
        assert_eq!(utility(board), expected, "{}", board);
        match expected {
            1 => assert_eq!(outcome(board), Outcome::XWins),
            -1 => assert_eq!(outcome(board), Outcome::OWins),
            _ => assert_eq!(outcome(board), Outcome::Draw),
        }
    }
}

#[test]
fn test_pruned_and_full_search_agree() {
    let mut pruned = Searcher::new(SearchConfig::new(true));
    let mut full = Searcher::new(SearchConfig::new(false));
    for board in reachable_boards().keys() {
        let a = pruned.analyze(board);
        let b = full.analyze(board);
        assert_eq!(a.value, b.value, "{}", board);
        assert_eq!(a.best_move.is_some(), b.best_move.is_some());
    }
}

#[test]
fn test_best_move_preserves_value() {
    let mut searcher = Searcher::default();
    let mut checked = HashSet::new();
    for board in reachable_boards().keys() {
        let report = searcher.analyze(board);
        match report.best_move {
            Some(mv) => {
                let next = apply_move(board, mv).unwrap();
                assert_eq!(searcher.value(&next), report.value, "{} -> {}", board, mv);
                checked.insert(*board);
            }
            None => assert!(is_terminal(board)),
        }
    }
    assert!(!checked.is_empty());
}
