//! # red-blue-nim
//!
//! Red-Blue Nim solved exactly by MinMax search with alpha-beta pruning.
//!
//! Two piles of marbles, red and blue. Players alternate removing one or more
//! marbles from a single pile. Under the **standard** ruleset the side that
//! empties both piles wins; under **misère** it loses.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: positions and moves are `Copy` values, the solver is a
//!    function of its arguments, and nothing performs I/O.
//!
//! 2. **Exact search**: no depth limit and no heuristic. The state space is
//!    small, so every answer is a proof.
//!
//! 3. **Stated once**: the ruleset's effect on the terminal payoff lives in a
//!    single method, `Ruleset::terminal_value`.
//!
//! ## Modules
//!
//! - `core`: piles, moves, positions, rulesets, game state, RNG, errors
//! - `solver`: MinMax with alpha-beta pruning, configuration, statistics
//! - `game`: the live game, players and the turn loop

pub mod core;
pub mod game;
pub mod solver;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameState, Move, MoveList, NimError, Pile, Position, Result, Ruleset, Score, LOSS,
    NEG_INFINITY, POS_INFINITY, WIN,
};

pub use crate::solver::{
    best_move, evaluate, Evaluation, SearchMode, SearchStats, Solver, SolverConfig,
    TranspositionTable,
};

pub use crate::game::{
    play_out, Game, GameConfig, Player, Ply, RandomPlayer, ScriptedPlayer, Side, SolverPlayer,
};
