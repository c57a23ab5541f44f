//! Tic-tac-toe solver - configuration and reporting for the analysis CLI
//!
//! The game logic lives in [`tictactoe_engine`]; this crate wraps it with a
//! TOML-backed configuration layer and text/JSON report rendering.
//!
//! # Example
//!
//! ```
//! use tictactoe_solver::{Analysis, OutputFormat, Report, SolverConfig};
//! use tictactoe_engine::{Searcher, initial_state};
//!
//! let config = SolverConfig::default();
//! let mut searcher = Searcher::new(*config.search());
//! let analysis = Analysis::new(&initial_state(), &mut searcher);
//! let text = analysis.render(OutputFormat::Text).unwrap();
//! assert!(text.contains("Value:     0 (draw)"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod report;

// Crate-level exports - Configuration
pub use config::{ConfigError, OutputFormat, SolverConfig};

// Crate-level exports - Reports
pub use report::{Analysis, PlayLine, Ply, Report, describe_value};
