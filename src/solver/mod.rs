//! Exact MinMax solver with alpha-beta pruning for Red-Blue Nim.
//!
//! ## Overview
//!
//! The state space is small, so the search always runs to the leaves:
//!
//! - **Exact values**: every result is a proven `WIN` or `LOSS`
//! - **Deterministic**: ties go to the first move in enumeration order
//! - **Pruning is invisible**: alpha-beta only changes how many nodes are
//!   visited, never the returned `(value, move)` pair
//! - **Optional memoization**: a transposition table for large piles
//!
//! ## Usage
//!
//! ```rust
//! use red_blue_nim::core::{Position, Ruleset, WIN};
//! use red_blue_nim::solver::{SearchMode, Solver, SolverConfig};
//!
//! let config = SolverConfig::default().with_mode(SearchMode::AlphaBeta);
//! let mut solver = Solver::new(Ruleset::Misere, config);
//!
//! let eval = solver.solve(Position::new(5, 4));
//! assert_eq!(eval.value, WIN);
//! assert!(eval.best_move.is_some());
//! println!("{} nodes searched", solver.stats().nodes);
//! ```

pub mod config;
pub mod search;
pub mod stats;
pub mod table;

pub use config::{SearchMode, SolverConfig};
pub use search::{best_move, evaluate, Evaluation, Solver};
pub use stats::SearchStats;
pub use table::TranspositionTable;
