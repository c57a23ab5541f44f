//! Tests for analysis and play-line reports.

use tictactoe_engine::{Board, Move, Outcome, Player, Searcher, initial_state};
use tictactoe_solver::{Analysis, OutputFormat, PlayLine, Report, describe_value};

#[test]
fn test_analysis_of_winning_position() {
    let board: Board = "XX./OO./...".parse().unwrap();
    let analysis = Analysis::new(&board, &mut Searcher::default());

    assert_eq!(analysis.to_move, Some(Player::X));
    assert_eq!(analysis.outcome, Outcome::InProgress);
    assert_eq!(analysis.best_move, Some(Move::new(0, 2)));
    assert_eq!(analysis.value, 1);

    let text = analysis.render(OutputFormat::Text).unwrap();
    assert!(text.contains("Best move: (0, 2)"));
    assert!(text.contains("Value:     1 (X wins)"));
}

#[test]
fn test_analysis_of_finished_game() {
    let board: Board = "XXX/OO./...".parse().unwrap();
    let analysis = Analysis::new(&board, &mut Searcher::default());

    assert_eq!(analysis.to_move, None);
    assert_eq!(analysis.best_move, None);
    let text = analysis.to_text();
    assert!(text.contains("To move:   nobody"));
    assert!(text.contains("Outcome:   X wins"));
}

#[test]
fn test_analysis_json() {
    let board: Board = "XX./OO./...".parse().unwrap();
    let analysis = Analysis::new(&board, &mut Searcher::default());

    let json = analysis.render(OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["best_move"]["row"], 0);
    assert_eq!(value["best_move"]["col"], 2);
    assert_eq!(value["to_move"], "X");
    assert_eq!(value["outcome"], "InProgress");
}

#[test]
fn test_play_line_from_start_is_a_draw() {
    let line = PlayLine::new(&initial_state(), &mut Searcher::default()).unwrap();

    assert_eq!(line.plies.len(), 9);
    assert_eq!(line.outcome, Outcome::Draw);
    assert_eq!(line.plies[0].player, Player::X);
    assert_eq!(line.plies[1].player, Player::O);

    let text = line.to_text();
    assert!(text.starts_with(" 1. X"));
    assert!(text.ends_with("Result: Draw"));
}

#[test]
fn test_play_line_on_finished_board_is_empty() {
    let board: Board = "XXX/OO./...".parse().unwrap();
    let line = PlayLine::new(&board, &mut Searcher::default()).unwrap();

    assert!(line.plies.is_empty());
    assert_eq!(line.end, board);
    assert_eq!(line.outcome, Outcome::XWins);
}

#[test]
fn test_describe_value() {
    assert_eq!(describe_value(1), "X wins");
    assert_eq!(describe_value(-1), "O wins");
    assert_eq!(describe_value(0), "draw");
}
