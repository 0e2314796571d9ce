//! MinMax search with alpha-beta pruning.
//!
//! The search is exhaustive: there is no depth limit and no heuristic, so
//! every value it returns is the proven game-theoretic value. Termination is
//! guaranteed because every ply strictly reduces `red + blue`, which also
//! bounds the recursion depth.

use std::time::Instant;

use log::debug;
use serde::{Deserialize, Serialize};

use super::config::{SearchMode, SolverConfig};
use super::stats::SearchStats;
use super::table::TranspositionTable;
use crate::core::{Move, Position, Ruleset, Score, NEG_INFINITY, POS_INFINITY};

/// Result of evaluating one node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Evaluation {
    /// `WIN` or `LOSS` for the maximizing side.
    pub value: Score,

    /// A move achieving `value`. `None` only at a terminal position.
    pub best_move: Option<Move>,
}

impl Evaluation {
    #[must_use]
    pub const fn new(value: Score, best_move: Option<Move>) -> Self {
        Self { value, best_move }
    }

    /// Leaf result: a value and no move.
    #[must_use]
    pub const fn terminal(value: Score) -> Self {
        Self::new(value, None)
    }
}

/// Exhaustive solver for one ruleset.
///
/// A solver holds no game state. Its only mutable parts are the statistics
/// of the last search and, in `SearchMode::Memoized`, the transposition
/// table, which stays valid across searches because the ruleset never
/// changes.
#[derive(Clone, Debug)]
pub struct Solver {
    ruleset: Ruleset,
    config: SolverConfig,
    stats: SearchStats,
    table: TranspositionTable,
}

impl Solver {
    /// Create a new solver.
    pub fn new(ruleset: Ruleset, config: SolverConfig) -> Self {
        let capacity = match config.mode {
            SearchMode::Memoized => config.table_capacity,
            SearchMode::AlphaBeta | SearchMode::Minimax => 0,
        };
        Self {
            ruleset,
            config,
            stats: SearchStats::default(),
            table: TranspositionTable::with_capacity(capacity),
        }
    }

    /// Alpha-beta solver with default settings.
    pub fn with_ruleset(ruleset: Ruleset) -> Self {
        Self::new(ruleset, SolverConfig::default())
    }

    #[must_use]
    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Statistics of the most recent `solve`, or the running totals of direct
    /// `evaluate` calls since then.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Solved nodes held by the transposition table.
    #[must_use]
    pub fn table_len(&self) -> usize {
        self.table.len()
    }

    /// Evaluate `position` with an explicit side to move and window.
    ///
    /// `maximizing` is true when the maximizing side is to move. The root
    /// call uses `alpha = NEG_INFINITY` and `beta = POS_INFINITY`.
    /// On a terminal position this returns the terminal payoff and no move.
    pub fn evaluate(
        &mut self,
        position: Position,
        maximizing: bool,
        alpha: Score,
        beta: Score,
    ) -> Evaluation {
        self.search(position, maximizing, alpha, beta, 0)
    }

    /// Solve `position` for the side to move, treated as the maximizer.
    ///
    /// Resets and fills `stats()`.
    pub fn solve(&mut self, position: Position) -> Evaluation {
        let start = Instant::now();
        self.stats.reset();

        let eval = self.evaluate(position, true, NEG_INFINITY, POS_INFINITY);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            "solved {} ({}): value {} via {:?}, {} nodes, {} cutoffs, {} table hits in {}us",
            position,
            self.ruleset,
            eval.value,
            eval.best_move,
            self.stats.nodes,
            self.stats.cutoffs,
            self.stats.table_hits,
            self.stats.time_us,
        );

        eval
    }

    /// Best move for the side to move. `None` only on empty piles.
    pub fn best_move(&mut self, position: Position) -> Option<Move> {
        self.solve(position).best_move
    }

    fn search(
        &mut self,
        position: Position,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
        depth: u32,
    ) -> Evaluation {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if position.is_terminal() {
            self.stats.terminal_nodes += 1;
            return Evaluation::terminal(self.ruleset.terminal_value(maximizing));
        }

        let memoized = self.config.mode == SearchMode::Memoized;
        if memoized {
            if let Some(eval) = self.table.get(position, maximizing) {
                self.stats.table_hits += 1;
                return eval;
            }
        }
        let pruning = self.config.mode == SearchMode::AlphaBeta;

        let mut best_value = if maximizing { NEG_INFINITY } else { POS_INFINITY };
        let mut best_move = None;

        for (mv, child) in position.successors() {
            let value = self.search(child, !maximizing, alpha, beta, depth + 1).value;

            // Strict comparisons: the first move reaching the best value wins ties.
            if maximizing {
                if value > best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                if pruning {
                    alpha = alpha.max(value);
                }
            } else {
                if value < best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                if pruning {
                    beta = beta.min(value);
                }
            }

            if pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        let eval = Evaluation::new(best_value, best_move);
        if memoized {
            self.table.insert(position, maximizing, eval);
        }
        eval
    }
}

/// Evaluate `position` under `ruleset` with a fresh alpha-beta solver.
pub fn evaluate(
    position: Position,
    ruleset: Ruleset,
    maximizing: bool,
    alpha: Score,
    beta: Score,
) -> Evaluation {
    Solver::with_ruleset(ruleset).evaluate(position, maximizing, alpha, beta)
}

/// Best move for the side to move in `position` under `ruleset`.
///
/// ```
/// use red_blue_nim::core::{Move, Position, Ruleset};
/// use red_blue_nim::solver::best_move;
///
/// // Equalising the piles is the winning reply under standard rules.
/// assert_eq!(best_move(Position::new(3, 1), Ruleset::Standard), Some(Move::red(2)));
/// assert_eq!(best_move(Position::new(0, 0), Ruleset::Standard), None);
/// ```
pub fn best_move(position: Position, ruleset: Ruleset) -> Option<Move> {
    Solver::with_ruleset(ruleset).best_move(position)
}
