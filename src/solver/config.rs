//! Solver configuration parameters.

use serde::{Deserialize, Serialize};

/// How the solver walks the game tree.
///
/// Every mode returns the same `(value, move)` pair for the same input. They
/// differ only in how many nodes get visited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// MinMax with alpha-beta cutoffs.
    #[default]
    AlphaBeta,

    /// Plain MinMax: the window is passed down unmodified and no sibling is
    /// ever skipped. Reference behaviour for the pruned search.
    Minimax,

    /// Plain MinMax backed by a transposition table keyed on
    /// `(red, blue, maximizing)`. Identical subtrees reached through
    /// different move orders are solved once.
    Memoized,
}

/// Solver configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Tree walk strategy.
    pub mode: SearchMode,

    /// Initial capacity of the transposition table.
    /// Only used by `SearchMode::Memoized`.
    pub table_capacity: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            mode: SearchMode::AlphaBeta,
            table_capacity: 4096,
        }
    }
}

impl SolverConfig {
    /// Create a new config with a different search mode.
    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Create a new config with a different table capacity.
    pub fn with_table_capacity(mut self, capacity: usize) -> Self {
        self.table_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.mode, SearchMode::AlphaBeta);
        assert_eq!(config.table_capacity, 4096);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SolverConfig::default()
            .with_mode(SearchMode::Memoized)
            .with_table_capacity(64);

        assert_eq!(config.mode, SearchMode::Memoized);
        assert_eq!(config.table_capacity, 64);
    }

    #[test]
    fn test_serialization() {
        let config = SolverConfig::default().with_mode(SearchMode::Minimax);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"minimax\""));
        let deserialized: SolverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_deserialize_from_file_format() {
        let json = r#"{ "mode": "alpha_beta", "table_capacity": 16 }"#;
        let config: SolverConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.mode, SearchMode::AlphaBeta);
        assert_eq!(config.table_capacity, 16);
    }
}
