//! Text and JSON rendering of search results.

use crate::config::OutputFormat;
use serde::Serialize;
use tictactoe_engine::{
    Board, InvalidMove, Move, Outcome, Player, Searcher, apply_move, current_player, outcome,
};
use tracing::instrument;

/// Something that can be printed as text or JSON.
pub trait Report: Serialize {
    /// Human-readable rendering.
    fn to_text(&self) -> String;

    /// Renders in the requested format.
    fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => serde_json::to_string_pretty(self),
        }
    }
}

/// Describes a minimax value in words.
pub fn describe_value(value: i8) -> &'static str {
    match value {
        v if v > 0 => "X wins",
        v if v < 0 => "O wins",
        _ => "draw",
    }
}

/// Analysis of a single position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// The analyzed board.
    pub board: Board,
    /// Player to move, if the game is not over.
    pub to_move: Option<Player>,
    /// Current outcome.
    pub outcome: Outcome,
    /// Optimal move, if any.
    pub best_move: Option<Move>,
    /// Value under perfect play (X's perspective).
    pub value: i8,
    /// Boards evaluated.
    pub nodes: u64,
}

impl Analysis {
    /// Searches `board` and collects the results.
    #[instrument(skip(searcher))]
    pub fn new(board: &Board, searcher: &mut Searcher) -> Self {
        let report = searcher.analyze(board);
        Self {
            board: *board,
            to_move: current_player(board),
            outcome: outcome(board),
            best_move: report.best_move,
            value: report.value,
            nodes: report.nodes,
        }
    }
}

impl Report for Analysis {
    fn to_text(&self) -> String {
        let to_move = self
            .to_move
            .map_or_else(|| "nobody".to_string(), |p| p.to_string());
        let best_move = self
            .best_move
            .map_or_else(|| "none".to_string(), |mv| mv.to_string());

        format!(
            "{}\n\nTo move:   {}\nOutcome:   {}\nBest move: {}\nValue:     {} ({})\nNodes:     {}",
            self.board,
            to_move,
            self.outcome,
            best_move,
            self.value,
            describe_value(self.value),
            self.nodes,
        )
    }
}

/// One move in a played-out line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ply {
    /// Player making the move.
    pub player: Player,
    /// Where the mark went.
    pub mv: Move,
}

/// Optimal play from a starting board to the end of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayLine {
    /// Starting board.
    pub start: Board,
    /// Moves in order.
    pub plies: Vec<Ply>,
    /// Board after the last move.
    pub end: Board,
    /// Final outcome.
    pub outcome: Outcome,
}

impl PlayLine {
    /// Plays the principal variation from `board`.
    #[instrument(skip(searcher))]
    pub fn new(board: &Board, searcher: &mut Searcher) -> Result<Self, InvalidMove> {
        let mut position = *board;
        let mut plies = Vec::new();

        for mv in searcher.principal_variation(board) {
            if let Some(player) = current_player(&position) {
                plies.push(Ply { player, mv });
            }
            position = apply_move(&position, mv)?;
        }

        Ok(Self {
            start: *board,
            plies,
            end: position,
            outcome: outcome(&position),
        })
    }
}

impl Report for PlayLine {
    fn to_text(&self) -> String {
        let mut text = String::new();
        for (i, ply) in self.plies.iter().enumerate() {
            text.push_str(&format!("{:>2}. {} {}\n", i + 1, ply.player, ply.mv));
        }
        if !self.plies.is_empty() {
            text.push('\n');
        }
        text.push_str(&format!("{}\n\nResult: {}", self.end, self.outcome));
        text
    }
}
