//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Counters collected during one root search.
///
/// Bookkeeping only: the counters never influence the result.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered, root included.
    pub nodes: u64,

    /// Nodes with both piles empty.
    pub terminal_nodes: u64,

    /// Times the remaining siblings of a node were skipped.
    pub cutoffs: u64,

    /// Nodes answered from the transposition table.
    pub table_hits: u64,

    /// Deepest ply reached below the root.
    pub max_depth: u32,

    /// Wall time of the search (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Nodes searched per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
