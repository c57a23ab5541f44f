//! Command-line interface for tictactoe_solver.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::Board;
use tictactoe_solver::OutputFormat;

/// Tic-tac-toe solver - perfect play via exhaustive minimax
#[derive(Parser, Debug)]
#[command(name = "tictactoe_solver")]
#[command(about = "Perfect-play tic-tac-toe analysis", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it is missing)
    #[arg(short, long, global = true, default_value = "tictactoe_solver.toml")]
    pub config: PathBuf,

    /// Explore every sibling instead of stopping at a forced win
    #[arg(long, global = true)]
    pub no_prune: bool,

    /// Output format (overrides the config file)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find the best move and minimax value of a position
    Analyze {
        /// Board as nine cells, e.g. "XX./OO./..." (X, O, and . or _ for empty)
        board: Board,
    },

    /// Play optimal moves for both sides to the end of the game
    Play {
        /// Starting board (defaults to the empty board)
        board: Option<Board>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from(["tictactoe_solver", "analyze", "XX./OO./..."]).unwrap();
        match cli.command {
            Command::Analyze { board } => assert_eq!(board.occupied(), 4),
            Command::Play { .. } => panic!("expected analyze"),
        }
        assert!(!cli.no_prune);
        assert_eq!(cli.format, None);
    }

    #[test]
    fn test_parse_play_with_global_flags() {
        let cli =
            Cli::try_parse_from(["tictactoe_solver", "play", "--no-prune", "--format", "json"])
                .unwrap();
        assert!(matches!(cli.command, Command::Play { board: None }));
        assert!(cli.no_prune);
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_rejects_unreachable_board() {
        let result = Cli::try_parse_from(["tictactoe_solver", "analyze", "OOO/.../..."]);
        assert!(result.is_err());
    }
}
