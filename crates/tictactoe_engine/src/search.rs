//! Exhaustive minimax search.
//!
//! Every line is searched to the end of the game; utilities are always
//! from X's perspective (X maximizes, O minimizes). The only pruning is
//! the early exit once the mover has found the best value available to
//! it, which never changes the returned value.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{best_move, initial_state, minimax_value};
//!
//! let board = initial_state();
//! assert_eq!(minimax_value(&board), 0);
//! assert!(best_move(&board).is_some());
//! ```

use crate::rules::{apply_move, current_player, legal_moves, utility};
use crate::{Board, Move, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Value below any real utility.
const X_FLOOR: i8 = -2;
/// Value above any real utility.
const O_CEILING: i8 = 2;

/// Search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Stop scanning siblings once the mover reaches its best possible value.
    prune: bool,
}

impl SearchConfig {
    /// Creates a search configuration.
    pub fn new(prune: bool) -> Self {
        Self { prune }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { prune: true }
    }
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards evaluated, root included.
    pub nodes: u64,
}

/// Result of analyzing one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Optimal move for the player to move; `None` on a terminal board.
    pub best_move: Option<Move>,
    /// Minimax value of the position from X's perspective.
    pub value: i8,
    /// Boards evaluated for this analysis.
    pub nodes: u64,
}

/// Best value a player can hope for.
fn target(player: Player) -> i8 {
    match player {
        Player::X => 1,
        Player::O => -1,
    }
}

/// Worse than any real value for `player`.
fn floor(player: Player) -> i8 {
    match player {
        Player::X => X_FLOOR,
        Player::O => O_CEILING,
    }
}

/// True if `candidate` is strictly better than `incumbent` for `player`.
fn improves(player: Player, candidate: i8, incumbent: i8) -> bool {
    match player {
        Player::X => candidate > incumbent,
        Player::O => candidate < incumbent,
    }
}

/// Every legal move paired with the board it produces.
fn successors(board: &Board) -> impl Iterator<Item = (Move, Board)> {
    let board = *board;
    legal_moves(&board)
        .into_iter()
        .map(move |mv| {
            let next = apply_move(&board, mv).expect("moves from legal_moves always apply");
            (mv, next)
        })
}

/// Minimax searcher with configurable pruning and node counting.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
    stats: SearchStats,
}

impl Searcher {
    /// Creates a searcher.
    #[instrument]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the counters accumulated since creation or the last reset.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Clears the counters.
    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Minimax value of `board` from X's perspective.
    pub fn value(&mut self, board: &Board) -> i8 {
        self.stats.nodes += 1;

        let Some(player) = current_player(board) else {
            return utility(board);
        };

        let mut best = floor(player);
        for (_, child) in successors(board) {
            let value = self.value(&child);
            if improves(player, value, best) {
                best = value;
            }
            if self.config.prune && best == target(player) {
                break;
            }
        }
        best
    }

    /// Searches one level explicitly, keeping the move that produced the best value.
    fn search_root(&mut self, board: &Board) -> Option<(Move, Board, i8)> {
        let player = current_player(board)?;

        let mut best: Option<(Move, Board, i8)> = None;
        for (mv, child) in successors(board) {
            let value = self.value(&child);
            trace!(%mv, value, "Root move evaluated");

            let better = match best {
                Some((_, _, incumbent)) => improves(player, value, incumbent),
                None => true,
            };
            if better {
                best = Some((mv, child, value));
            }
            if self.config.prune && value == target(player) {
                break;
            }
        }
        best
    }

    /// Analyzes `board`: best move, value and nodes evaluated.
    #[instrument(level = "debug", skip(self), fields(prune = self.config.prune))]
    pub fn analyze(&mut self, board: &Board) -> SearchReport {
        let start = self.stats.nodes;
        self.stats.nodes += 1;

        let report = match self.search_root(board) {
            Some((mv, _, value)) => SearchReport {
                best_move: Some(mv),
                value,
                nodes: self.stats.nodes - start,
            },
            None => SearchReport {
                best_move: None,
                value: utility(board),
                nodes: self.stats.nodes - start,
            },
        };

        debug!(
            best_move = ?report.best_move,
            value = report.value,
            nodes = report.nodes,
            "Search complete"
        );
        report
    }

    /// Optimal move for the player to move, or `None` on a terminal board.
    ///
    /// Among equally good moves the first in `legal_moves` order wins.
    pub fn best_move(&mut self, board: &Board) -> Option<Move> {
        self.analyze(board).best_move
    }

    /// Plays optimal moves for both sides until the game ends.
    #[instrument(level = "debug", skip(self))]
    pub fn principal_variation(&mut self, board: &Board) -> Vec<Move> {
        let mut line = Vec::new();
        let mut position = *board;

        while let Some((mv, next, _)) = self.search_root(&position) {
            line.push(mv);
            position = next;
        }

        debug!(plies = line.len(), "Principal variation complete");
        line
    }
}

/// Minimax value of `board` (+1 X wins, -1 O wins, 0 draw) under perfect play.
#[instrument(level = "debug")]
pub fn minimax_value(board: &Board) -> i8 {
    Searcher::default().value(board)
}

/// Optimal move for the player to move, or `None` if the game is over.
#[instrument(level = "debug")]
pub fn best_move(board: &Board) -> Option<Move> {
    Searcher::default().best_move(board)
}

/// The sequence of optimal moves from `board` to the end of the game.
#[instrument(level = "debug")]
pub fn principal_variation(board: &Board) -> Vec<Move> {
    Searcher::default().principal_variation(board)
}
