//! Tic-tac-toe solver - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_engine::{Board, Searcher};
use tictactoe_solver::{Analysis, PlayLine, Report, SolverConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let prune = if cli.no_prune { Some(false) } else { None };
    let config = SolverConfig::load_or_default(&cli.config)?.with_overrides(prune, cli.format);
    let mut searcher = Searcher::new(*config.search());

    let output = match cli.command {
        Command::Analyze { board } => run_analyze(&board, &mut searcher, &config)?,
        Command::Play { board } => {
            run_play(&board.unwrap_or_default(), &mut searcher, &config)?
        }
    };

    println!("{}", output);
    Ok(())
}

/// Analyze a single position.
#[instrument(skip(searcher, config))]
fn run_analyze(board: &Board, searcher: &mut Searcher, config: &SolverConfig) -> Result<String> {
    info!("Analyzing position");
    let analysis = Analysis::new(board, searcher);
    info!(nodes = analysis.nodes, value = analysis.value, "Analysis finished");
    Ok(analysis.render(*config.format())?)
}

/// Play out the principal variation.
#[instrument(skip(searcher, config))]
fn run_play(board: &Board, searcher: &mut Searcher, config: &SolverConfig) -> Result<String> {
    info!("Playing optimal line");
    let line = PlayLine::new(board, searcher)?;
    info!(
        plies = line.plies.len(),
        nodes = searcher.stats().nodes,
        outcome = %line.outcome,
        "Play finished"
    );
    Ok(line.render(*config.format())?)
}

fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tictactoe_engine=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
